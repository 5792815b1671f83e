use super::{AnalyticsModal, CopyButton, Modal, PreviewState, QrModal, ShareModal, UrlPreview};
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zaplink_core::links::format_last_access;
use zaplink_core::preview::{Placement, PreviewContent, Throttle};
use zaplink_core::{ShortUrl, SystemClock};

const DELETE_ERROR: &str = "Unable to delete URL. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct UrlCardProps {
    pub url: ShortUrl,
    /// Called with the link id after the backend deleted it
    #[prop_or_default]
    pub on_delete: Callback<String>,
}

#[derive(Clone, Copy, PartialEq)]
enum Dialog {
    Qr,
    Analytics,
    Share,
    ConfirmDelete,
}

#[allow(clippy::cast_possible_truncation)]
fn viewport_width() -> i32 {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(0, |width| width as i32)
}

#[function_component(UrlCard)]
pub fn url_card(props: &UrlCardProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();

    let dialog = use_state(|| None::<Dialog>);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    // The summary is fetched at most once per card; the throttle guards against
    // hover bursts while that first request is being decided.
    let preview = use_state(PreviewState::default);
    let placement = use_state(|| None::<Placement>);
    let throttle = {
        let interval = services.config.preview_throttle();
        use_memo((), move |()| Throttle::new(Rc::new(SystemClock), interval))
    };

    let url = &props.url;
    let short_link = services.config.short_link(&url.id);
    let redirect_link = services.config.redirect_link(&url.id);

    let open = |which: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(which)))
    };
    let close = {
        let dialog = dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |()| {
            delete_error.set(None);
            dialog.set(None);
        })
    };

    let on_enter = {
        let preview = preview.clone();
        let placement = placement.clone();
        let client = services.client.clone();
        let id = url.id.clone();
        let auth = auth.clone();
        let cancel = cancel.clone();
        Callback::from(move |e: MouseEvent| {
            placement.set(Some(Placement::near_cursor(
                e.client_x(),
                e.client_y(),
                viewport_width(),
            )));

            if *preview != PreviewState::Idle || !throttle.ready() {
                return;
            }

            preview.set(PreviewState::Loading);
            let preview = preview.clone();
            let client = client.clone();
            let id = id.clone();
            let auth = auth.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = with_auth_error_handling(&auth, client.summary(&id)).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(summary) => preview.set(PreviewState::Ready(PreviewContent::from(&summary))),
                    Err(e) => {
                        tracing::warn!("Preview for {id} failed: {e}");
                        preview.set(PreviewState::Failed(e.user_message()));
                    }
                }
            });
        })
    };
    let on_move = {
        let placement = placement.clone();
        Callback::from(move |e: MouseEvent| {
            placement.set(Some(Placement::near_cursor(
                e.client_x(),
                e.client_y(),
                viewport_width(),
            )));
        })
    };
    let on_leave = {
        let placement = placement.clone();
        Callback::from(move |_: MouseEvent| placement.set(None))
    };

    let on_confirm_delete = {
        let id = url.id.clone();
        let client = services.client.clone();
        let dialog = dialog.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| {
            if *deleting {
                return;
            }
            let id = id.clone();
            let client = client.clone();
            let dialog = dialog.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let on_delete = on_delete.clone();
            let auth = auth.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                deleting.set(true);
                let result = with_auth_error_handling(&auth, client.delete_url(&id)).await;
                if cancel.is_cancelled() {
                    return;
                }
                deleting.set(false);
                match result {
                    Ok(response) => {
                        tracing::info!("Deleted {id}: {}", response.message);
                        dialog.set(None);
                        on_delete.emit(id);
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete {id}: {e}");
                        delete_error.set(Some(DELETE_ERROR.to_string()));
                    }
                }
            });
        })
    };

    let button = "px-3 py-1.5 text-sm rounded border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700";

    let dialog_view = match *dialog {
        None => Html::default(),
        Some(Dialog::Qr) => html! {
            <QrModal short_id={url.id.clone()} short_link={short_link.clone()} on_close={close} />
        },
        Some(Dialog::Analytics) => html! {
            <AnalyticsModal short_id={url.id.clone()} on_close={close} />
        },
        Some(Dialog::Share) => html! {
            <ShareModal short_id={url.id.clone()} short_link={short_link.clone()} on_close={close} />
        },
        Some(Dialog::ConfirmDelete) => {
            let cancel_click = {
                let close = close.clone();
                Callback::from(move |_: MouseEvent| close.emit(()))
            };
            let footer = html! {
                <>
                    <button type="button" class={button} onclick={cancel_click}>{"Cancel"}</button>
                    <button
                        type="button"
                        class="px-3 py-1.5 text-sm rounded bg-red-600 text-white hover:bg-red-700 disabled:opacity-60"
                        disabled={*deleting}
                        onclick={on_confirm_delete}
                    >
                        { if *deleting { "Deleting..." } else { "Delete" } }
                    </button>
                </>
            };
            html! {
                <Modal title="Confirm Delete" on_close={close} footer={footer}>
                    <p>{"Are you sure you want to delete this short URL?"}</p>
                    <p class="mt-2 font-mono text-sm text-blue-600 break-all">{ short_link.clone() }</p>
                    if let Some(message) = &*delete_error {
                        <p class="mt-3 text-sm text-red-600">{ message.clone() }</p>
                    }
                </Modal>
            }
        }
    };

    html! {
        <div class="p-4 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-sm">
            <div class="flex flex-wrap items-start justify-between gap-2">
                <div class="min-w-0">
                    <a
                        href={redirect_link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="font-mono text-blue-600 hover:underline break-all"
                        onmouseenter={on_enter}
                        onmousemove={on_move}
                        onmouseleave={on_leave}
                    >
                        { short_link.clone() }
                    </a>
                    <p class="text-sm text-gray-500 truncate" title={url.original_url.clone()}>
                        { url.original_url.clone() }
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    if let Some(tag) = url.tag() {
                        <span class="px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-700">{ tag.to_string() }</span>
                    }
                    <span class="text-sm text-gray-600 dark:text-gray-300">{ format!("{} clicks", url.click_count) }</span>
                </div>
            </div>

            if let Some(last_access) = &url.last_access {
                <p class="mt-1 text-xs text-gray-400">{ format!("Last accessed: {}", format_last_access(last_access)) }</p>
            }

            <div class="mt-3 flex flex-wrap gap-2">
                <CopyButton text={short_link.clone()} />
                <a href={redirect_link.clone()} target="_blank" rel="noopener noreferrer" class={button}>{"Visit"}</a>
                <button type="button" class={button} onclick={open(Dialog::Qr)}>{"QR Code"}</button>
                <button type="button" class={button} onclick={open(Dialog::Analytics)}>{"Analytics"}</button>
                <button type="button" class={button} onclick={open(Dialog::Share)}>{"Share"}</button>
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded border border-red-300 text-red-600 hover:bg-red-50 dark:hover:bg-gray-700"
                    onclick={open(Dialog::ConfirmDelete)}
                >
                    {"Delete"}
                </button>
            </div>

            if let Some(placement) = *placement {
                <UrlPreview state={(*preview).clone()} {placement} redirect_link={redirect_link} />
            }

            { dialog_view }
        </div>
    }
}
