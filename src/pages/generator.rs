use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Label, Spinner,
    Textarea,
};
use crate::models::PostType;
use crate::screens::{share_toast, GeneratorState};
use crate::share::share_post_to_linkedin;
use crate::state::{AppContext, Toast};
use crate::util::{copy_to_clipboard, set_timeout};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COPIED_RESET_MS: i32 = 2_000;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state: RwSignal<GeneratorState> = RwSignal::new(GeneratorState::default());
    let theme: RwSignal<String> = RwSignal::new(String::new());

    let on_generate = move |_| {
        let started = state
            .try_update(|s| {
                s.theme = theme.get_untracked();
                s.begin_generate()
            })
            .unwrap_or_else(|| Err(Toast::error("Please enter a theme for your post")));

        let (theme_val, post_type) = match started {
            Ok(v) => v,
            Err(toast) => {
                app_state.0.notify(toast);
                return;
            }
        };

        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.generate_linkedin_post(&theme_val, post_type).await;
            if let Err(e) = &result {
                error!("generate post: {e}");
            }
            let toast = state.try_update(|s| s.finish_generate(result));
            app_state.0.notify_opt(toast);
        });
    };

    let on_copy = move |_| {
        let content = state.with_untracked(|s| s.generated.clone());
        spawn_local(async move {
            match copy_to_clipboard(&content).await {
                Ok(()) => {
                    state.update(|s| s.copied = true);
                    app_state.0.notify(Toast::success("Copied to clipboard!"));
                    set_timeout(COPIED_RESET_MS, move || state.update(|s| s.copied = false));
                }
                Err(e) => {
                    error!("copy: {e}");
                    app_state.0.notify(Toast::error("Failed to copy to clipboard"));
                }
            }
        });
    };

    let on_share = move |_| {
        let Some(content) = state.with_untracked(|s| s.share_content()) else {
            return;
        };
        app_state.0.notify(share_toast(share_post_to_linkedin(&content)));
    };

    let on_save = move |_| {
        let Some(post) = state.try_update(|s| s.begin_save()).flatten() else {
            return;
        };
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.insert_post(&post).await;
            if let Err(e) = &result {
                error!("save post: {e}");
            }
            let toast = state.try_update(|s| s.finish_save(result));
            app_state.0.notify_opt(toast);
        });
    };

    let generating = move || state.with(|s| s.generating);
    let saving = move || state.with(|s| s.saving);
    let copied = move || state.with(|s| s.copied);
    let has_output = move || state.with(|s| s.has_output());

    view! {
        <div class="space-y-8">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight">"Generate LinkedIn Post"</h1>
                <p class="text-muted-foreground">
                    "Create engaging content in seconds with AI-powered generation"
                </p>
            </div>

            <div class="grid gap-8 lg:grid-cols-2">
                <div class="space-y-6">
                    <Card>
                        <CardContent class="space-y-6">
                            <div class="space-y-3">
                                <Label>"Post Type"</Label>
                                <div class="grid w-full grid-cols-3 gap-1 rounded-lg bg-muted p-1">
                                    {PostType::ALL
                                        .into_iter()
                                        .map(|pt| {
                                            let is_active = move || state.with(|s| s.post_type == pt);
                                            let class = move || {
                                                if is_active() {
                                                    "flex flex-col items-center rounded-md bg-background px-3 py-1.5 text-sm font-medium shadow-sm"
                                                } else {
                                                    "flex flex-col items-center rounded-md px-3 py-1.5 text-sm font-medium text-muted-foreground hover:text-foreground"
                                                }
                                            };
                                            view! {
                                                <button
                                                    type="button"
                                                    class=class
                                                    aria-pressed=move || is_active().to_string()
                                                    on:click=move |_| state.update(|s| s.post_type = pt)
                                                >
                                                    <span>{pt.label()}</span>
                                                    <span class="text-[10px] font-normal text-muted-foreground">{pt.hint()}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="space-y-3">
                                <Label html_for="theme">"What do you want to write about?"</Label>
                                <Textarea
                                    id="theme"
                                    class="min-h-[120px] resize-none"
                                    placeholder="e.g., The importance of work-life balance in tech..."
                                    bind_value=theme
                                />
                            </div>

                            <Button
                                size=ButtonSize::Lg
                                class="w-full"
                                attr:disabled=move || generating() || theme.get().trim().is_empty()
                                on:click=on_generate
                            >
                                <Show when=generating fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if generating() { "Generating..." } else { "Generate Post" }}
                            </Button>
                        </CardContent>
                    </Card>

                    <Card class="bg-muted/50">
                        <CardContent class="space-y-2">
                            <h3 class="text-sm font-semibold">"Tips for better results:"</h3>
                            <ul class="space-y-1 text-sm text-muted-foreground">
                                <li>"• Be specific about your topic"</li>
                                <li>"• Include key points you want to cover"</li>
                                <li>"• Mention your target audience if relevant"</li>
                                <li>"• Specify the tone (professional, casual, etc.)"</li>
                            </ul>
                        </CardContent>
                    </Card>
                </div>

                <Card>
                    <CardHeader class="flex-row items-center justify-between">
                        <CardTitle>"Generated Content"</CardTitle>
                        <Show when=has_output fallback=|| ().into_view()>
                            <div class="flex gap-2">
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_copy>
                                    {move || if copied() { "Copied" } else { "Copy" }}
                                </Button>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    class="border-blue-200 text-blue-600 hover:bg-blue-50"
                                    on:click=on_share
                                >
                                    "Share to LinkedIn"
                                </Button>
                                <Button size=ButtonSize::Sm attr:disabled=saving on:click=on_save>
                                    <Show when=saving fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if saving() { "Saving..." } else { "Save" }}
                                </Button>
                            </div>
                        </Show>
                    </CardHeader>
                    <CardContent>
                        <Show
                            when=has_output
                            fallback=|| view! {
                                <div class="flex min-h-[400px] items-center justify-center rounded-lg border border-dashed bg-muted/20">
                                    <p class="text-sm text-muted-foreground">"Your generated post will appear here"</p>
                                </div>
                            }
                        >
                            <div class="min-h-[400px] rounded-lg border bg-background p-4">
                                <pre class="whitespace-pre-wrap font-sans text-sm leading-relaxed">
                                    {move || state.with(|s| s.generated.clone())}
                                </pre>
                            </div>
                        </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
