use crate::auth::use_auth;
use crate::components::{LoadingSpinner, UrlCard};
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use zaplink_core::{RequestSequence, ShortUrl};

const LOAD_ERROR: &str = "Failed to retrieve URL list. Please try again later.";
const EMPTY_MESSAGE: &str = "No URLs found for this tag.";

/// The signed-in user's links, optionally narrowed to one tag
#[function_component(UrlListPage)]
pub fn url_list_page() -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();

    let tag = use_state(String::new);
    let urls = use_state(Vec::<ShortUrl>::new);
    let loading = use_state(|| false);
    let notice = use_state(|| None::<String>);
    // Only the latest request may write its result
    let requests = use_memo((), |()| RequestSequence::new());

    let load = {
        let urls = urls.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let client = services.client.clone();
        let requests = requests.clone();
        Callback::from(move |tag: String| {
            let ticket = requests.start();
            let urls = urls.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let client = client.clone();
            let requests = requests.clone();
            let auth = auth.clone();
            let cancel = cancel.clone();

            spawn_local(async move {
                loading.set(true);
                notice.set(None);

                let result = with_auth_error_handling(&auth, client.list_urls(&tag)).await;
                if cancel.is_cancelled() || !requests.is_current(ticket) {
                    return;
                }

                match result {
                    Ok(response) => {
                        let (links, message) = response.into_parts();
                        let message = match message {
                            Some(message) if !message.is_empty() => Some(message),
                            _ if links.is_empty() => Some(EMPTY_MESSAGE.to_string()),
                            _ => None,
                        };
                        notice.set(message);
                        urls.set(links);
                    }
                    Err(e) => {
                        tracing::error!("Failed to list URLs for tag {tag:?}: {e}");
                        notice.set(Some(LOAD_ERROR.to_string()));
                        urls.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |()| load.emit(String::new()));
    }

    let oninput = {
        let tag = tag.clone();
        let load = load.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if value.trim().is_empty() {
                load.emit(String::new());
            }
            tag.set(value);
        })
    };

    let onsubmit = {
        let tag = tag.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            load.emit((*tag).clone());
        })
    };

    let on_delete = {
        let urls = urls.clone();
        Callback::from(move |id: String| {
            let remaining = urls.iter().filter(|url| url.id != id).cloned().collect();
            urls.set(remaining);
        })
    };

    html! {
        <div class="max-w-4xl mx-auto">
            <h2 class="text-2xl font-semibold mb-4">{"My Links"}</h2>

            <form {onsubmit} class="flex gap-2 mb-4">
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-700"
                    placeholder="Search by tag"
                    value={(*tag).clone()}
                    {oninput}
                />
                <button type="submit" class="px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700" disabled={*loading}>
                    {"Search"}
                </button>
            </form>

            if let Some(message) = &*notice {
                <div class="mb-4 p-3 rounded bg-blue-50 border border-blue-200 text-blue-700 text-sm">{ message.clone() }</div>
            }

            if *loading {
                <LoadingSpinner text="Loading..." />
            } else {
                <div class="space-y-3">
                    { for urls.iter().map(|url| html! {
                        <UrlCard key={url.id.clone()} url={url.clone()} on_delete={on_delete.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}
