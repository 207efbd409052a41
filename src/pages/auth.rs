use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Spinner,
};
use crate::session::{callback_outcome, CallbackOutcome, AUTH_ERROR_PATH, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::{AppContext, Toast};
use super::PRIVACY_PATH;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

const LINKEDIN_LOGO_PATH: &str = "M20.447 20.452h-3.554v-5.569c0-1.328-.475-2.236-1.986-2.236-1.081 0-1.722.732-2.004 1.438-.103.25-.129.599-.129.948v5.419h-3.554s.05-8.736 0-9.638h3.554v1.364c.429-.659 1.191-1.594 2.905-1.594 2.121 0 3.71 1.389 3.71 4.374v5.494zM5.337 8.855c-1.144 0-1.915-.758-1.915-1.704 0-.959.771-1.703 1.96-1.703 1.188 0 1.914.744 1.938 1.703 0 .946-.75 1.704-1.983 1.704zm1.581 11.597H3.754V9.09h3.164v11.362zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.225 0z";

#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let loading: RwSignal<bool> = RwSignal::new(false);

    let on_sign_in = move |_| {
        loading.set(true);
        // On success the browser is already navigating away.
        if let Err(e) = app_state.0.session.sign_in_with_linkedin() {
            error!("sign in: {e}");
            app_state.0.notify(Toast::error("Failed to sign in with LinkedIn"));
            loading.set(false);
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center px-4 py-12">
                <Card>
                    <CardHeader class="items-center text-center">
                        <CardTitle class="text-2xl">"LinkedIn Post Generator"</CardTitle>
                        <CardDescription>
                            "Sign in with your LinkedIn account to get started"
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <Button
                            variant=ButtonVariant::Brand
                            size=ButtonSize::Lg
                            class="w-full"
                            attr:disabled=move || loading.get()
                            on:click=on_sign_in
                        >
                            <Show
                                when=move || loading.get()
                                fallback=|| view! {
                                    <svg class="size-5" viewBox="0 0 24 24" fill="currentColor">
                                        <path d=LINKEDIN_LOGO_PATH />
                                    </svg>
                                }
                            >
                                <Spinner />
                            </Show>
                            {move || if loading.get() { "Signing in..." } else { "Sign in with LinkedIn" }}
                        </Button>
                    </CardContent>

                    <CardFooter class="flex-col justify-center gap-2">
                        <p class="text-center text-sm text-muted-foreground">
                            "We only access your basic profile information to personalize your experience."
                        </p>
                        <a class="text-xs text-muted-foreground underline underline-offset-4" href=PRIVACY_PATH>
                            "Privacy Policy"
                        </a>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}

/// OAuth redirect target: trades `?code=` for a session, then leaves.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let query = use_query_map();
    let navigate = StoredValue::new(use_navigate());

    Effect::new(move |_| {
        let params = query.get_untracked();
        let outcome = callback_outcome(
            params.get("code").as_deref(),
            params.get("error_description").or_else(|| params.get("error")).as_deref(),
        );

        match outcome {
            CallbackOutcome::Fail { reason } => {
                error!("auth callback: {reason}");
                navigate.with_value(|nav| nav(AUTH_ERROR_PATH, Default::default()));
            }
            CallbackOutcome::Exchange { code } => {
                spawn_local(async move {
                    match app_state.0.session.exchange_code(&code).await {
                        Ok(session) => {
                            log!("signed in as {}", session.user.id);
                            navigate.with_value(|nav| nav(DASHBOARD_PATH, Default::default()));
                        }
                        Err(e) => {
                            error!("auth callback: code exchange failed: {e}");
                            navigate.with_value(|nav| nav(AUTH_ERROR_PATH, Default::default()));
                        }
                    }
                });
            }
        }
    });

    view! {
        <div class="flex min-h-screen items-center justify-center">
            <Spinner class="size-8 text-primary" />
        </div>
    }
}

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen items-center justify-center bg-background">
            <div class="max-w-md p-6 text-center">
                <h1 class="text-2xl font-bold">"Authentication Error"</h1>
                <p class="mt-4 text-sm text-muted-foreground">
                    "Something went wrong during authentication. Please try again or contact support."
                </p>
                <a class="mt-6 inline-block text-sm text-primary underline underline-offset-4" href=LOGIN_PATH>
                    "Back to sign in"
                </a>
            </div>
        </main>
    }
}
