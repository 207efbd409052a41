use crate::api::{ApiClient, ApiResult};
use crate::components::ui::input::FIELD_CLASS;
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, Input, Label, Spinner, Textarea,
};
use crate::models::{category_badge_class, CalendarIdea, IdeaCategory, IdeaStatus};
use crate::screens::{schedule_generated_ideas, CalendarState, IdeaGroup};
use crate::state::AppContext;
use crate::util::{format_date, today_utc};
use icons::Check;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;
use wasm_bindgen::JsCast;

/// Refetch after a write so the list reflects server defaults and ordering.
async fn reload_ideas(client: &ApiClient, state: RwSignal<CalendarState>) -> ApiResult<()> {
    let ideas = client.list_ideas().await?;
    state.update(|s| s.ideas = ideas);
    Ok(())
}

async fn generate_and_store(client: &ApiClient, state: RwSignal<CalendarState>) -> ApiResult<usize> {
    let generated = client.generate_calendar_ideas().await?;
    let rows = schedule_generated_ideas(generated, today_utc());
    if !rows.is_empty() {
        client.insert_ideas(&rows).await?;
    }
    reload_ideas(client, state).await?;
    Ok(rows.len())
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state: RwSignal<CalendarState> = RwSignal::new(CalendarState::default());

    // Dialog inputs; copied into the draft on submit.
    let title: RwSignal<String> = RwSignal::new(String::new());
    let description: RwSignal<String> = RwSignal::new(String::new());
    let category: RwSignal<IdeaCategory> = RwSignal::new(IdeaCategory::default());
    let scheduled_date: RwSignal<String> = RwSignal::new(String::new());
    let adding: RwSignal<bool> = RwSignal::new(false);

    Effect::new(move |_| {
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.list_ideas().await;
            if let Err(e) = &result {
                error!("load ideas: {e}");
            }
            let toast = state.try_update(|s| s.finish_load(result)).flatten();
            app_state.0.notify_opt(toast);
        });
    });

    let on_open_dialog = move |_| {
        title.set(String::new());
        description.set(String::new());
        category.set(IdeaCategory::default());
        scheduled_date.set(String::new());
        state.update(|s| s.open_dialog());
    };

    let on_generate = move |_| {
        if state.with_untracked(|s| s.generating) {
            return;
        }
        state.update(|s| s.generating = true);
        let client = app_state.0.client();
        spawn_local(async move {
            let result = generate_and_store(&client, state).await;
            match &result {
                Ok(n) => log!("stored {n} generated ideas"),
                Err(e) => error!("generate ideas: {e}"),
            }
            let toast = state.try_update(|s| s.finish_generate(result));
            app_state.0.notify_opt(toast);
        });
    };

    let on_add = move |_| {
        let row = state.try_update(|s| {
            s.draft.title = title.get_untracked();
            s.draft.description = description.get_untracked();
            s.draft.category = category.get_untracked();
            s.draft.scheduled_date = scheduled_date.get_untracked();
            s.draft.to_new_idea()
        });
        let row = match row {
            Some(Ok(row)) => row,
            Some(Err(toast)) => {
                app_state.0.notify(toast);
                return;
            }
            None => return,
        };

        adding.set(true);
        let client = app_state.0.client();
        spawn_local(async move {
            let result = match client.insert_idea(&row).await {
                Ok(()) => reload_ideas(&client, state).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                error!("add idea: {e}");
            }
            let toast = state.try_update(|s| s.finish_add(result));
            app_state.0.notify_opt(toast);
            adding.set(false);
        });
    };

    let on_toggle_status = move |id: String| {
        let Some(status) = state.with_untracked(|s| s.status_target(&id)) else {
            return;
        };
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.set_idea_status(&id, status).await;
            let toast = state.try_update(|s| s.finish_status(&id, status, result)).flatten();
            app_state.0.notify_opt(toast);
        });
    };

    let on_delete = move |id: String| {
        let client = app_state.0.client();
        spawn_local(async move {
            let result = client.delete_idea(&id).await;
            if let Err(e) = &result {
                error!("delete idea {id}: {e}");
            }
            let toast = state.try_update(|s| s.finish_delete(&id, result));
            app_state.0.notify_opt(toast);
        });
    };

    let on_category_change = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            if let Ok(c) = IdeaCategory::from_str(&select.value()) {
                category.set(c);
            }
        }
    };

    let generating = move || state.with(|s| s.generating);
    let loading = move || state.with(|s| s.loading);

    let idea_card = move |idea: CalendarIdea| {
        let completed = idea.status == IdeaStatus::Completed;
        let toggle_id = idea.id.clone();
        let delete_id = idea.id.clone();
        let toggle_class = if completed {
            "mt-1 flex size-5 items-center justify-center rounded-full border border-green-600 text-green-600"
        } else {
            "mt-1 flex size-5 items-center justify-center rounded-full border text-muted-foreground hover:text-foreground"
        };
        let card_class = if completed {
            "py-4 opacity-60 transition-all hover:shadow-md"
        } else {
            "py-4 transition-all hover:shadow-md"
        };

        view! {
            <Card class=card_class>
                <CardContent class="space-y-3 px-4">
                    <div class="flex items-start justify-between gap-2">
                        <button
                            type="button"
                            class=toggle_class
                            aria-label="Toggle status"
                            on:click=move |_| on_toggle_status(toggle_id.clone())
                        >
                            <Show when=move || completed fallback=|| ().into_view()>
                                <Check class="size-3.5" />
                            </Show>
                        </button>
                        <div class="flex-1">
                            <h3 class="text-sm font-semibold leading-tight">{idea.title.clone()}</h3>
                        </div>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            class="h-8 text-muted-foreground hover:text-destructive"
                            attr:title="Delete"
                            on:click=move |_| on_delete(delete_id.clone())
                        >
                            "Delete"
                        </Button>
                    </div>
                    {idea.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                        <p class="line-clamp-2 text-xs text-muted-foreground">{d}</p>
                    })}
                    <div class="flex items-center justify-between gap-2">
                        {idea.category.clone().map(|c| {
                            let class = format!("text-xs {}", category_badge_class(&c));
                            view! { <Badge class=class>{c}</Badge> }
                        })}
                        {idea.scheduled_date.map(|d| view! {
                            <span class="text-xs text-muted-foreground">{format_date(Some(d))}</span>
                        })}
                    </div>
                </CardContent>
            </Card>
        }
    };

    let group_section = move |group: IdeaGroup| {
        let count = group.count_label();
        let heading = group.status.to_string();
        view! {
            <div class="space-y-4">
                <h2 class="flex items-center gap-2 text-lg font-semibold capitalize">
                    {heading}
                    <span class="text-sm font-normal text-muted-foreground">{count}</span>
                </h2>
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                    {group.ideas.into_iter().map(idea_card).collect_view()}
                </div>
            </div>
        }
    };

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
                <div class="flex items-center justify-between">
                    <div class="space-y-2">
                        <h1 class="text-3xl font-bold tracking-tight">"Content Calendar"</h1>
                        <p class="text-muted-foreground">"Plan and organize your content ideas"</p>
                    </div>
                    <div class="flex gap-2">
                        <Button
                            variant=ButtonVariant::Outline
                            attr:disabled=generating
                            on:click=on_generate
                        >
                            <Show when=generating fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if generating() { "Generating..." } else { "Generate Ideas" }}
                        </Button>
                        <Button on:click=on_open_dialog>"Add Idea"</Button>
                    </div>
                </div>

                <Show
                    when=move || !state.with(|s| s.show_empty_state())
                    fallback=|| view! {
                        <Card class="p-12">
                            <div class="space-y-3 text-center">
                                <h3 class="font-semibold">"No ideas yet"</h3>
                                <p class="text-sm text-muted-foreground">"Generate AI-powered ideas or add your own"</p>
                            </div>
                        </Card>
                    }
                >
                    <div class="space-y-8">
                        {move || state.with(|s| s.groups()).into_iter().map(group_section).collect_view()}
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.dialog_open) fallback=|| ().into_view()>
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                        <div class="w-full max-w-lg rounded-md border border-border bg-background p-6 shadow-lg">
                            <div class="mb-4 space-y-1">
                                <div class="text-lg font-semibold">"Add Content Idea"</div>
                                <div class="text-sm text-muted-foreground">
                                    "Create a new content idea for your calendar"
                                </div>
                            </div>

                            <div class="space-y-4">
                                <div class="space-y-2">
                                    <Label html_for="idea-title">"Title"</Label>
                                    <Input id="idea-title" placeholder="Enter idea title..." bind_value=title />
                                </div>
                                <div class="space-y-2">
                                    <Label html_for="idea-description">"Description"</Label>
                                    <Textarea
                                        id="idea-description"
                                        placeholder="Add details about this idea..."
                                        bind_value=description
                                    />
                                </div>
                                <div class="grid grid-cols-2 gap-4">
                                    <div class="space-y-2">
                                        <Label html_for="idea-category">"Category"</Label>
                                        <select
                                            id="idea-category"
                                            class=format!("flex h-9 {FIELD_CLASS}")
                                            on:change=on_category_change
                                        >
                                            {IdeaCategory::ALL
                                                .into_iter()
                                                .map(|c| view! {
                                                    <option value=c.to_string() selected=move || category.get() == c>
                                                        {c.to_string()}
                                                    </option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                    <div class="space-y-2">
                                        <Label html_for="idea-date">"Date"</Label>
                                        <Input id="idea-date" r#type="date" bind_value=scheduled_date />
                                    </div>
                                </div>
                            </div>

                            <div class="flex items-center justify-end gap-2 pt-6">
                                <Button
                                    variant=ButtonVariant::Outline
                                    attr:disabled=move || adding.get()
                                    on:click=move |_| state.update(|s| s.dialog_open = false)
                                >
                                    "Cancel"
                                </Button>
                                <Button attr:disabled=move || adding.get() on:click=on_add>
                                    <Show when=move || adding.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    "Add Idea"
                                </Button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
