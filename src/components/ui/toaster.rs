use crate::state::{AppContext, ToastKind};
use icons::{Check, X};
use leptos::prelude::*;

/// Renders the app-wide toast stack. Mounted once, next to the router.
#[component]
pub fn Toaster() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let toasts = app_state.0.toasts;

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-[100] flex w-80 flex-col gap-2">
            <For each=move || toasts.get() key=|(id, _)| *id let:item>
                {
                    let (_, toast) = item;
                    let (class, is_error) = match toast.kind {
                        ToastKind::Success => ("border-border bg-background text-foreground", false),
                        ToastKind::Error => ("border-destructive/40 bg-background text-destructive", true),
                    };
                    view! {
                        <div
                            role="status"
                            class=format!("pointer-events-auto flex items-start gap-2 rounded-md border px-3 py-2 text-sm shadow-lg {class}")
                        >
                            <Show
                                when=move || is_error
                                fallback=|| view! { <Check class="mt-0.5 size-4 shrink-0" /> }
                            >
                                <X class="mt-0.5 size-4 shrink-0" />
                            </Show>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
