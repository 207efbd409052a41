use crate::components::ui::{Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, Spinner};
use crate::models::Post;
use crate::screens::{share_toast, HistoryState};
use crate::share::share_post_to_linkedin;
use crate::state::{AppContext, Toast};
use crate::util::{copy_to_clipboard, format_timestamp, set_timeout};
use icons::Check;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COPIED_RESET_MS: i32 = 2_000;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state: RwSignal<HistoryState> = RwSignal::new(HistoryState::default());
    let deleting: RwSignal<bool> = RwSignal::new(false);

    Effect::new(move |_| {
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.list_posts().await;
            if let Err(e) = &result {
                error!("load posts: {e}");
            }
            let toast = state.try_update(|s| s.finish_load(result)).flatten();
            app_state.0.notify_opt(toast);
        });
    });

    let on_toggle_favorite = move |id: String| {
        let Some(is_favorite) = state.with_untracked(|s| s.favorite_target(&id)) else {
            return;
        };
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.set_post_favorite(&id, is_favorite).await;
            let toast = state.try_update(|s| s.finish_favorite(&id, is_favorite, result));
            app_state.0.notify_opt(toast);
        });
    };

    let on_copy = move |post: Post| {
        spawn_local(async move {
            match copy_to_clipboard(&post.content).await {
                Ok(()) => {
                    state.update(|s| s.copied_id = Some(post.id.clone()));
                    app_state.0.notify(Toast::success("Copied to clipboard!"));
                    set_timeout(COPIED_RESET_MS, move || {
                        state.update(|s| {
                            if s.copied_id.as_deref() == Some(post.id.as_str()) {
                                s.copied_id = None;
                            }
                        })
                    });
                }
                Err(e) => {
                    error!("copy: {e}");
                    app_state.0.notify(Toast::error("Failed to copy to clipboard"));
                }
            }
        });
    };

    let on_share = move |post: Post| {
        app_state.0.notify(share_toast(share_post_to_linkedin(&post.content)));
    };

    let on_confirm_delete = move |_| {
        let Some(id) = state.with_untracked(|s| s.confirm_delete.clone()) else {
            return;
        };
        deleting.set(true);
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.delete_post(&id).await;
            if let Err(e) = &result {
                error!("delete post {id}: {e}");
            }
            let toast = state.try_update(|s| s.finish_delete(&id, result));
            app_state.0.notify_opt(toast);
            deleting.set(false);
        });
    };

    let loading = move || state.with(|s| s.loading);

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! {
                <div class="flex min-h-[400px] items-center justify-center">
                    <Spinner class="size-8 text-primary" />
                </div>
            }
        >
            <div class="space-y-8">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold tracking-tight">"Post History"</h1>
                    <p class="text-muted-foreground">"View and manage all your generated posts"</p>
                </div>

                <Show
                    when=move || !state.with(|s| s.show_empty_state())
                    fallback=|| view! {
                        <Card class="p-12">
                            <div class="space-y-3 text-center">
                                <h3 class="font-semibold">"No posts yet"</h3>
                                <p class="text-sm text-muted-foreground">"Generate your first post to see it here"</p>
                            </div>
                        </Card>
                    }
                >
                    <div class="grid gap-4">
                        <For
                            each=move || state.with(|s| s.posts.clone())
                            key=|post| (post.id.clone(), post.is_favorite)
                            let:post
                        >
                            {
                                let id = post.id.clone();
                                let is_copied = {
                                    let id = id.clone();
                                    move || state.with(|s| s.copied_id.as_deref() == Some(id.as_str()))
                                };
                                let star_class = if post.is_favorite { "text-yellow-400" } else { "text-muted-foreground" };
                                let fav_id = id.clone();
                                let delete_id = id.clone();
                                let copy_post = post.clone();
                                let share_post = post.clone();

                                view! {
                                    <Card class="transition-shadow hover:shadow-md">
                                        <CardContent class="space-y-4">
                                            <div class="flex items-start justify-between gap-4">
                                                <div class="flex-1 space-y-2">
                                                    <div class="flex flex-wrap items-center gap-2">
                                                        <Badge class="border-transparent bg-secondary text-secondary-foreground">
                                                            {post.post_type.label()}
                                                        </Badge>
                                                        <span class="text-xs text-muted-foreground">"•"</span>
                                                        <span class="text-xs text-muted-foreground">
                                                            {format_timestamp(&post.created_at)}
                                                        </span>
                                                    </div>
                                                    <p class="font-medium">{post.theme.clone()}</p>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Icon
                                                        attr:title="Favorite"
                                                        on:click=move |_| on_toggle_favorite(fav_id.clone())
                                                    >
                                                        <span class=star_class>{if post.is_favorite { "★" } else { "☆" }}</span>
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Sm
                                                        on:click=move |_| on_copy(copy_post.clone())
                                                    >
                                                        <Show when=is_copied fallback=|| "Copy">
                                                            <Check class="text-green-600" />
                                                        </Show>
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Sm
                                                        class="text-blue-600"
                                                        on:click=move |_| on_share(share_post.clone())
                                                    >
                                                        "Share"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Sm
                                                        class="text-destructive"
                                                        attr:title="Delete"
                                                        on:click=move |_| {
                                                            state.update(|s| s.confirm_delete = Some(delete_id.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </div>
                                            </div>
                                            <div class="rounded-lg bg-muted/50 p-4">
                                                <p class="line-clamp-4 whitespace-pre-wrap text-sm leading-relaxed">
                                                    {post.content.clone()}
                                                </p>
                                            </div>
                                        </CardContent>
                                    </Card>
                                }
                            }
                        </For>
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.confirm_delete.is_some()) fallback=|| ().into_view()>
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                        <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                            <div class="mb-3 space-y-1">
                                <div class="text-sm font-medium">"Delete post?"</div>
                                <div class="text-xs text-muted-foreground">
                                    "This action cannot be undone. This will permanently delete your post."
                                </div>
                            </div>
                            <div class="flex items-center justify-end gap-2 pt-2">
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    attr:disabled=move || deleting.get()
                                    on:click=move |_| state.update(|s| s.confirm_delete = None)
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Destructive
                                    size=ButtonSize::Sm
                                    attr:disabled=move || deleting.get()
                                    on:click=on_confirm_delete
                                >
                                    <Show when=move || deleting.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                </Button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
