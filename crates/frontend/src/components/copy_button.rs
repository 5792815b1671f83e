use crate::clipboard::copy_to_clipboard;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COPIED_FEEDBACK_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Copies `text` and shows "Copied!" for a moment
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    let failed = use_state(|| false);

    let onclick = {
        let text = props.text.clone();
        let copied = copied.clone();
        let failed = failed.clone();
        Callback::from(move |_: MouseEvent| {
            let text = text.clone();
            let copied = copied.clone();
            let failed = failed.clone();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => {
                        failed.set(false);
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false)).forget();
                    }
                    Err(e) => {
                        tracing::warn!("Copy failed: {e}");
                        failed.set(true);
                    }
                }
            });
        })
    };

    let label = if *copied {
        AttrValue::Static("Copied!")
    } else if *failed {
        AttrValue::Static("Copy failed")
    } else {
        props.label.clone()
    };

    html! {
        <button
            type="button"
            class={classes!(
                "px-3", "py-1.5", "text-sm", "rounded", "border", "transition-colors",
                if *copied {
                    "border-green-500 bg-green-500 text-white"
                } else {
                    "border-blue-500 text-blue-600 hover:bg-blue-50 dark:hover:bg-gray-700"
                },
                props.class.clone()
            )}
            {onclick}
        >
            { label }
        </button>
    }
}
