use leptos::{
    either::{Either, EitherOf3},
    ev::SubmitEvent,
    prelude::*,
    task::spawn_local,
};

use captions::{Action, CaptionState, UiStatus};

use config::AppConfig;

mod api;
mod clipboard;
mod config;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[derive(Clone, Copy)]
struct Store(RwSignal<CaptionState>);

impl Store {
    fn dispatch(self, action: Action) {
        self.0
            .update(|state| *state = std::mem::take(state).reduce(action));
    }
}

#[derive(Clone, Copy)]
struct CopyTimer(StoredValue<Option<TimeoutHandle>>);

impl CopyTimer {
    fn replace(self, handle: Option<TimeoutHandle>) {
        self.0.update_value(|slot| {
            if let Some(previous) = std::mem::replace(slot, handle) {
                previous.clear();
            }
        });
    }
}

#[component]
fn App() -> impl IntoView {
    provide_context(AppConfig::default());
    provide_context(Store(RwSignal::new(CaptionState::default())));
    provide_context(CopyTimer(StoredValue::new(None)));

    view! {
        <div class="min-h-screen bg-base-200 p-6">
            <div class="max-w-3xl mx-auto">
                <div class="card bg-base-100 shadow-lg p-8 mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Caption Generator"</h1>
                    <p class="opacity-70 mb-6">"Generate engaging captions for your content"</p>

                    <CaptionForm />
                    <Outcome />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CaptionForm() -> impl IntoView {
    let store = use_context::<Store>().expect("No caption store provided");
    let copy_timer = use_context::<CopyTimer>().expect("No copy timer provided");
    let endpoint = use_context::<AppConfig>()
        .expect("No app config provided")
        .webhook_url;

    let is_loading = Memo::new(move |_| store.0.read().is_loading);
    let count = Memo::new(move |_| store.0.read().form.count);

    let submit = move |e: SubmitEvent| {
        e.prevent_default();

        copy_timer.replace(None);
        store.dispatch(Action::SubmitStarted);
        let (submission, payload) =
            store.0.with_untracked(|state| (state.submission(), state.form.payload()));
        leptos::logging::log!(
            "Requesting {} caption(s) of {} words for {:?}",
            payload.count,
            payload.word_count,
            payload.keyword
        );

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let action = match api::generate_captions(&endpoint, &payload).await {
                Ok(captions) => Action::SubmitSucceeded {
                    submission,
                    captions,
                },
                Err(error) => {
                    leptos::logging::error!("Error: {}", error);
                    Action::SubmitFailed { submission, error }
                }
            };
            store.dispatch(action);
        });
    };

    view! {
        <form on:submit=submit class="space-y-4">
            <div>
                <label for="keyword" class="label mb-1">
                    "Keyword"
                </label>
                <input
                    id="keyword"
                    type="text"
                    class="input w-full"
                    placeholder="Enter your keyword"
                    required=true
                    prop:value=move || store.0.read().form.keyword.clone()
                    on:input=move |e| store.dispatch(Action::EditKeyword(event_target_value(&e)))
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label for="count" class="label mb-1">
                        "Number of Captions"
                    </label>
                    <input
                        id="count"
                        type="number"
                        class="input w-full"
                        min=0
                        required=true
                        prop:value=move || count.get().to_string()
                        on:input=move |e| store.dispatch(Action::EditCount(event_target_value(&e)))
                    />
                </div>

                <div>
                    <label for="wordCount" class="label mb-1">
                        "Words per Caption"
                    </label>
                    <input
                        id="wordCount"
                        type="number"
                        class="input w-full"
                        min=0
                        required=true
                        prop:value=move || store.0.read().form.word_count.to_string()
                        on:input=move |e| {
                            store.dispatch(Action::EditWordCount(event_target_value(&e)))
                        }
                    />
                </div>
            </div>

            <button
                type="submit"
                class="btn btn-primary w-full"
                disabled=move || is_loading.get()
            >
                {move || {
                    if is_loading.get() {
                        Either::Left(view! { <span class="loading loading-spinner"></span> })
                    } else {
                        Either::Right(
                            view! {
                                <SendIcon />
                                <span>{captions::submit_label(count.get())}</span>
                            },
                        )
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn Outcome() -> impl IntoView {
    let store = use_context::<Store>().expect("No caption store provided");
    // Copy feedback and form edits leave the status alone, so the list is not rebuilt for them.
    let status = Memo::new(move |_| store.0.read().status());

    view! {
        {move || match status.get() {
            UiStatus::Error(message) => EitherOf3::A(view! {
                <div role="alert" class="alert alert-error mt-4">
                    {message}
                </div>
            }),
            UiStatus::Success(captions) => EitherOf3::B(view! { <CaptionList captions /> }),
            UiStatus::Idle | UiStatus::Loading => EitherOf3::C(()),
        }}
    }
}

#[component]
fn CaptionList(captions: Vec<String>) -> impl IntoView {
    let total = captions.len();

    view! {
        <div class="mt-8 space-y-4">
            <For
                each=move || captions.clone().into_iter().enumerate()
                key=|(index, caption)| (*index, caption.clone())
                children=move |(index, caption)| {
                    view! { <CaptionCard index caption total /> }
                }
            />
        </div>
    }
}

#[component]
fn CaptionCard(index: usize, caption: String, total: usize) -> impl IntoView {
    let store = use_context::<Store>().expect("No caption store provided");
    let copy_timer = use_context::<CopyTimer>().expect("No copy timer provided");
    let feedback = use_context::<AppConfig>()
        .expect("No app config provided")
        .copy_feedback;

    let copied = Memo::new(move |_| store.0.read().copied_index == Some(index));

    let text = caption.clone();
    let copy = move |_| {
        let text = text.clone();
        let submission = store.0.with_untracked(CaptionState::submission);
        spawn_local(async move {
            if let Err(e) = clipboard::write_text(&text).await {
                leptos::logging::error!("Failed to copy text: {}", e);
                return;
            }

            let before = store.0.with_untracked(CaptionState::copy_ticket);
            store.dispatch(Action::CopySucceeded { submission, index });
            let ticket = store.0.with_untracked(CaptionState::copy_ticket);
            if ticket == before {
                leptos::logging::debug_warn!("Dropped copy feedback for a superseded caption list");
                return;
            }

            match set_timeout_with_handle(
                move || store.dispatch(Action::CopyExpired { ticket }),
                feedback,
            ) {
                Ok(handle) => copy_timer.replace(Some(handle)),
                Err(e) => leptos::logging::error!("Failed to schedule copy reset: {:?}", e),
            }
        });
    };

    view! {
        <div class="card bg-base-100 border border-base-300 shadow-sm hover:shadow-md overflow-hidden">
            <div class="bg-base-200 px-4 py-2 border-b border-base-300 flex justify-between items-center">
                <h3 class="font-semibold text-primary flex items-center gap-2">
                    {format!("✨ {}", captions::caption_heading(index, total))}
                </h3>
                <button
                    type="button"
                    class="btn btn-ghost btn-circle btn-sm"
                    title="Copy to clipboard"
                    on:click=copy
                >
                    {move || {
                        if copied.get() {
                            Either::Left(view! { <CheckIcon /> })
                        } else {
                            Either::Right(view! { <CopyIcon /> })
                        }
                    }}
                </button>
            </div>
            <div class="p-4">
                <p class="whitespace-pre-wrap">{caption}</p>
            </div>
        </div>
    }
}

#[component]
fn SendIcon() -> impl IntoView {
    view! {
        <svg
            width="20px"
            height="20px"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d="M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z"></path>
            <path d="m21.854 2.147-10.94 10.939"></path>
        </svg>
    }
}

#[component]
fn CopyIcon() -> impl IntoView {
    view! {
        <svg
            width="18px"
            height="18px"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-label="copy"
        >
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2"></rect>
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"></path>
        </svg>
    }
}

#[component]
fn CheckIcon() -> impl IntoView {
    view! {
        <svg
            width="18px"
            height="18px"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-label="copied"
            class="stroke-success"
        >
            <path d="M18 6 7 17l-5-5"></path>
            <path d="m22 10-7.5 7.5L13 16"></path>
        </svg>
    }
}
