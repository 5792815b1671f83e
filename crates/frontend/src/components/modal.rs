use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub wide: bool,
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = on_backdrop.clone();
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4" onclick={on_backdrop}>
            <div
                class={classes!(
                    "bg-white", "dark:bg-gray-800", "rounded-lg", "shadow-xl", "w-full", "max-h-[90vh]", "overflow-y-auto",
                    if props.wide { "max-w-4xl" } else { "max-w-md" }
                )}
                onclick={stop}
            >
                <div class="flex items-center justify-between px-5 py-3 border-b border-gray-200 dark:border-gray-700">
                    <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100">{ props.title.clone() }</h3>
                    <button
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 text-2xl leading-none"
                        onclick={on_close_button}
                        aria-label="Close"
                    >
                        {"×"}
                    </button>
                </div>
                <div class="p-5">
                    { props.children.clone() }
                </div>
                if let Some(footer) = &props.footer {
                    <div class="flex justify-end gap-2 px-5 py-3 border-t border-gray-200 dark:border-gray-700">
                        { footer.clone() }
                    </div>
                }
            </div>
        </div>
    }
}
