use crate::api::ApiError;
use crate::components::ui::{Alert, AlertDescription, AlertTitle, Toaster};
use crate::pages::{
    AuthCallbackPage, AuthErrorPage, CalendarPage, GeneratorPage, HistoryPage, LoginPage,
    PrivacyPage, ProtectedLayout,
};
use crate::state::{load_app_state, AppContext};
use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app_state = match load_app_state() {
        Ok(state) => state,
        Err(e) => {
            error!("startup: {e}");
            return view! { <ConfigErrorPage error=e /> }.into_any();
        }
    };
    provide_context(AppContext(app_state));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("auth/login") view=LoginPage />
                <Route path=path!("auth/callback") view=AuthCallbackPage />
                <Route path=path!("auth/error") view=AuthErrorPage />
                <Route path=path!("privacy") view=PrivacyPage />
                <Route path=path!("history") view=move || view! {
                    <ProtectedLayout>
                        <HistoryPage />
                    </ProtectedLayout>
                } />
                <Route path=path!("calendar") view=move || view! {
                    <ProtectedLayout>
                        <CalendarPage />
                    </ProtectedLayout>
                } />
                <Route path=path!("") view=move || view! {
                    <ProtectedLayout>
                        <GeneratorPage />
                    </ProtectedLayout>
                } />
            </Routes>
        </Router>
        <Toaster />
    }
    .into_any()
}

/// Shown instead of the app when `window.ENV` is missing required keys.
#[component]
fn ConfigErrorPage(error: ApiError) -> impl IntoView {
    view! {
        <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center px-4 py-12">
            <Alert class="border-destructive/30">
                <AlertTitle class="text-destructive">"Configuration error"</AlertTitle>
                <AlertDescription>{error.message}</AlertDescription>
            </Alert>
        </div>
    }
}
