use super::{CopyButton, QrModal};
use crate::services::use_services;
use yew::prelude::*;
use zaplink_core::ShortenResponse;

#[derive(Properties, PartialEq)]
pub struct UrlSuccessCardProps {
    pub response: ShortenResponse,
}

/// Result panel shown after a link was created
#[function_component(UrlSuccessCard)]
pub fn url_success_card(props: &UrlSuccessCardProps) -> Html {
    let services = use_services();
    let show_qr = use_state(|| false);

    let short_link = services.config.short_link(&props.response.short_id);
    let redirect_link = services.config.redirect_link(&props.response.short_id);

    let open_qr = {
        let show_qr = show_qr.clone();
        Callback::from(move |_: MouseEvent| show_qr.set(true))
    };
    let close_qr = {
        let show_qr = show_qr.clone();
        Callback::from(move |()| show_qr.set(false))
    };

    html! {
        <div class="mb-4 p-4 rounded border border-green-200 bg-green-50 dark:bg-gray-800 dark:border-green-700">
            <p class="font-medium text-green-700 dark:text-green-400 mb-2">{"Short URL created successfully!"}</p>
            <div class="flex flex-wrap items-center gap-2">
                <span class="font-mono text-blue-600 break-all">{ short_link.clone() }</span>
                <CopyButton text={short_link.clone()} />
                <a
                    href={redirect_link}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 text-sm rounded border border-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    {"Open"}
                </a>
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded border border-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                    onclick={open_qr}
                >
                    {"QR Code"}
                </button>
            </div>
            if props.response.is_private {
                <p class="text-xs text-gray-500 mt-2">{"Saved to your links."}</p>
            }
            if *show_qr {
                <QrModal
                    short_id={props.response.short_id.clone()}
                    short_link={short_link}
                    on_close={close_qr}
                />
            }
        </div>
    }
}
