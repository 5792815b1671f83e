use super::{CopyButton, Modal};
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zaplink_core::preview::parse_keywords;
use zaplink_core::share::SharePlatform;

#[derive(Properties, PartialEq)]
pub struct ShareModalProps {
    pub short_id: AttrValue,
    pub short_link: AttrValue,
    pub on_close: Callback<()>,
}

fn open_in_new_tab(url: &str) {
    let opened = gloo::utils::window().open_with_url_and_target_and_features(
        url,
        "_blank",
        "noopener,noreferrer",
    );
    if let Err(e) = opened {
        tracing::warn!("Failed to open share window: {e:?}");
    }
}

/// Share a short link on social platforms, titled with the page's keywords when known
#[function_component(ShareModal)]
pub fn share_modal(props: &ShareModalProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();
    let title = use_state(|| None::<String>);

    {
        let title = title.clone();
        let client = services.client.clone();
        use_effect_with(props.short_id.clone(), move |short_id| {
            let short_id = short_id.clone();
            spawn_local(async move {
                let result = with_auth_error_handling(&auth, client.summary(&short_id)).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(summary) => {
                        let keywords = summary
                            .keywords
                            .as_deref()
                            .map(parse_keywords)
                            .unwrap_or_default();
                        if !keywords.is_empty() {
                            title.set(Some(keywords.join(", ")));
                        }
                    }
                    Err(e) => tracing::debug!("No share title for {short_id}: {e}"),
                }
            });
            || ()
        });
    }

    html! {
        <Modal title="Share Link" on_close={props.on_close.clone()}>
            <div class="flex items-center gap-2 mb-4">
                <input
                    type="text"
                    readonly=true
                    class="flex-1 px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-gray-50 dark:bg-gray-700 font-mono text-sm"
                    value={props.short_link.clone()}
                />
                <CopyButton text={props.short_link.clone()} />
            </div>
            <div class="grid grid-cols-2 gap-2">
                { for SharePlatform::ALL.into_iter().map(|platform| {
                    let url = platform.share_url(&props.short_link, title.as_deref());
                    let onclick = Callback::from(move |_: MouseEvent| open_in_new_tab(&url));
                    html! {
                        <button
                            type="button"
                            class="px-3 py-2 rounded border border-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 text-sm"
                            {onclick}
                        >
                            { platform.label() }
                        </button>
                    }
                }) }
            </div>
        </Modal>
    }
}
