use super::{LoadingSpinner, Modal};
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QrModalProps {
    pub short_id: AttrValue,
    pub short_link: AttrValue,
    pub on_close: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum QrState {
    Loading,
    Ready(String),
    Failed,
}

fn png_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}

/// QR code for a short link with a download button.
///
/// The image needs the bearer token, so it is fetched here and inlined
/// as a data URL rather than pointed at directly.
#[function_component(QrModal)]
pub fn qr_modal(props: &QrModalProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();
    let state = use_state(|| QrState::Loading);

    {
        let state = state.clone();
        let client = services.client.clone();
        use_effect_with(props.short_id.clone(), move |short_id| {
            let short_id = short_id.clone();
            state.set(QrState::Loading);
            spawn_local(async move {
                let result =
                    with_auth_error_handling(&auth, client.fetch_qr_code(&short_id)).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(bytes) => state.set(QrState::Ready(png_data_url(&bytes))),
                    Err(e) => {
                        tracing::warn!("Failed to load QR code for {short_id}: {e}");
                        state.set(QrState::Failed);
                    }
                }
            });
            || ()
        });
    }

    let footer = match &*state {
        QrState::Ready(data_url) => html! {
            <a
                href={data_url.clone()}
                download={format!("qrcode-{}.png", props.short_id)}
                class="px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700"
            >
                {"Download"}
            </a>
        },
        _ => Html::default(),
    };

    html! {
        <Modal title="QR Code" on_close={props.on_close.clone()} footer={footer}>
            <div class="flex flex-col items-center gap-3">
                {
                    match &*state {
                        QrState::Loading => html! { <LoadingSpinner text="Generating QR code..." /> },
                        QrState::Ready(data_url) => html! {
                            <img src={data_url.clone()} alt="QR Code" class="w-56 h-56" />
                        },
                        QrState::Failed => html! {
                            <p class="text-red-600 text-sm">{"Unable to load QR code."}</p>
                        },
                    }
                }
                <p class="text-sm text-gray-500">{"Scan to open"}</p>
                <p class="font-mono text-sm text-blue-600 break-all">{ props.short_link.clone() }</p>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_url() {
        assert_eq!(
            png_data_url(&[0x89, b'P', b'N', b'G']),
            "data:image/png;base64,iVBORw=="
        );
    }
}
