use super::CopyButton;
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use zaplink_core::BulkOutcome;
use zaplink_core::links::parse_bulk_input;

/// Shortens many URLs at once, one `url [tag]` per line
#[function_component(BulkForm)]
pub fn bulk_form() -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();

    let input = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let outcomes = use_state(Vec::<BulkOutcome>::new);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            input.set(area.value());
        })
    };

    let onsubmit = {
        let input = input.clone();
        let loading = loading.clone();
        let error = error.clone();
        let outcomes = outcomes.clone();
        let client = services.client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let entries = match parse_bulk_input(&input) {
                Ok(entries) => entries,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let loading = loading.clone();
            let error = error.clone();
            let outcomes = outcomes.clone();
            let client = client.clone();
            let auth = auth.clone();
            let cancel = cancel.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);
                outcomes.set(Vec::new());

                let result = with_auth_error_handling(&auth, client.bulk_shorten(&entries)).await;
                if cancel.is_cancelled() {
                    return;
                }

                match result {
                    Ok(response) => outcomes.set(response.outcomes()),
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let config = services.config.clone();

    html! {
        <div>
            <h2 class="text-2xl font-semibold mb-4 text-gray-900 dark:text-gray-100">{"Bulk Shorten"}</h2>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 rounded bg-red-50 border border-red-200 text-red-700 text-sm">{ message.clone() }</div>
            }

            <form {onsubmit} class="space-y-3">
                <textarea
                    rows="6"
                    class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-700 font-mono text-sm"
                    placeholder={"https://example.com work\nhttps://another.example"}
                    value={(*input).clone()}
                    {oninput}
                />
                <p class="text-xs text-gray-500">{"One URL per line, optionally followed by a tag."}</p>
                <button
                    type="submit"
                    class="w-full py-2.5 rounded bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-60"
                    disabled={*loading}
                >
                    { if *loading { "Processing..." } else { "Shorten All" } }
                </button>
            </form>

            if !outcomes.is_empty() {
                <ul class="mt-4 divide-y divide-gray-200 dark:divide-gray-700">
                    { for outcomes.iter().map(|outcome| {
                        let original = outcome.original_url.clone();
                        match &outcome.result {
                            Ok(short_id) => {
                                let link = config.short_link(short_id);
                                html! {
                                    <li key={original.clone()} class="py-2 flex flex-wrap items-center gap-2">
                                        <span class="text-sm text-gray-500 truncate max-w-xs">{ original }</span>
                                        <span class="font-mono text-blue-600">{ link.clone() }</span>
                                        <CopyButton text={link} />
                                    </li>
                                }
                            }
                            Err(message) => html! {
                                <li key={original.clone()} class="py-2 text-sm">
                                    <span class="text-gray-500">{ original }</span>
                                    <span class="ml-2 text-red-600">{ message.clone() }</span>
                                </li>
                            },
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
