use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner};
use crate::models::User;
use super::PRIVACY_PATH;
use crate::session::LOGIN_PATH;
use crate::state::AppContext;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

const NAV_ITEMS: [(&str, &str); 3] = [
    ("Generator", "/"),
    ("History", "/history"),
    ("Calendar", "/calendar"),
];

/// Renders `children` only once a session is confirmed; otherwise sends the
/// visitor to the login page.
#[component]
pub fn ProtectedLayout(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    let checking: RwSignal<bool> = RwSignal::new(true);
    let authenticated: RwSignal<bool> = RwSignal::new(false);
    let user: RwSignal<Option<User>> = RwSignal::new(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match app_state.0.session.get_current_session().await {
                Ok(Some(session)) => {
                    user.set(Some(session.user));
                    authenticated.set(true);
                }
                Ok(None) => {
                    navigate.with_value(|nav| nav(LOGIN_PATH, Default::default()));
                }
                Err(e) => {
                    warn!("session check failed: {e}");
                    navigate.with_value(|nav| nav(LOGIN_PATH, Default::default()));
                }
            }
            checking.set(false);
        });
    });

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || !checking.get()
            fallback=|| view! {
                <div class="flex min-h-screen items-center justify-center">
                    <Spinner class="size-8 text-primary" />
                </div>
            }
        >
            <Show when=move || authenticated.get() fallback=|| ().into_view()>
                <div class="flex min-h-screen flex-col">
                    <Navigation user=user />
                    <main class="mx-auto w-full max-w-7xl flex-1 px-6 py-8">
                        {move || children.with_value(|c| c())}
                    </main>
                    <footer class="mt-auto border-t bg-background/50 py-4">
                        <p class="text-center text-sm text-muted-foreground">
                            "LinkedIn Post Generator · "
                            <a class="underline underline-offset-4 hover:text-foreground" href=PRIVACY_PATH>"Privacy Policy"</a>
                        </p>
                    </footer>
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn Navigation(user: RwSignal<Option<User>>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let location = use_location();
    let pathname = move || location.pathname.get();

    // The stored session carries a user snapshot; refresh it from the auth server.
    Effect::new(move |_| {
        spawn_local(async move {
            match app_state.0.session.get_current_user().await {
                Ok(Some(fresh)) => user.set(Some(fresh)),
                Ok(None) => {}
                Err(e) => warn!("profile fetch failed: {e}"),
            }
        });
    });

    let signing_out: RwSignal<bool> = RwSignal::new(false);
    let on_sign_out = move |_| {
        signing_out.set(true);
        spawn_local(async move {
            // Leaves the page whether or not the revoke worked.
            app_state.0.session.sign_out().await;
        });
    };

    let initial = move || {
        user.get()
            .map(|u| u.initial())
            .unwrap_or_else(|| "U".to_string())
    };
    let display_name = move || user.get().and_then(|u| u.display_name()).unwrap_or_default();

    view! {
        <nav class="sticky top-0 z-50 border-b border-border bg-card/50 backdrop-blur-sm">
            <div class="mx-auto max-w-7xl px-6">
                <div class="flex h-16 items-center justify-between">
                    <div class="flex items-center gap-8">
                        <a href="/" class="flex items-center gap-2">
                            <div class="flex size-8 items-center justify-center rounded-lg bg-primary text-sm font-bold text-primary-foreground">
                                "in"
                            </div>
                            <span class="text-lg font-semibold">"LinkedIn Post Gen"</span>
                        </a>
                        <div class="flex items-center gap-1">
                            {NAV_ITEMS
                                .into_iter()
                                .map(|(name, href)| {
                                    let class = move || {
                                        if pathname() == href {
                                            "rounded-lg px-4 py-2 text-sm font-medium bg-secondary text-foreground"
                                        } else {
                                            "rounded-lg px-4 py-2 text-sm font-medium text-muted-foreground hover:bg-secondary/50 hover:text-foreground"
                                        }
                                    };
                                    view! { <a href=href class=class>{name}</a> }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex items-center gap-4">
                        <div
                            class="flex size-8 items-center justify-center rounded-full bg-gradient-to-br from-primary to-primary/60 text-xs font-semibold text-white"
                            title=display_name
                        >
                            {initial}
                        </div>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            attr:disabled=move || signing_out.get()
                            on:click=on_sign_out
                        >
                            "Sign out"
                        </Button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
