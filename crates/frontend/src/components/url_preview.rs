use yew::prelude::*;
use zaplink_core::preview::{Placement, PreviewContent};

/// Where a link's hover preview is in its lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Ready(PreviewContent),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct UrlPreviewProps {
    pub state: PreviewState,
    pub placement: Placement,
    pub redirect_link: AttrValue,
}

#[function_component(UrlPreview)]
pub fn url_preview(props: &UrlPreviewProps) -> Html {
    let body = match &props.state {
        PreviewState::Idle => return Html::default(),
        PreviewState::Loading => html! {
            <div class="flex items-center gap-2 text-sm text-gray-500">
                <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-blue-500"></div>
                {"Generating summary..."}
            </div>
        },
        PreviewState::Failed(message) => html! {
            <div class="text-sm text-red-600">
                <p>{"Unable to load preview"}</p>
                <p class="text-xs text-gray-500 mt-1">{ message.clone() }</p>
            </div>
        },
        PreviewState::Ready(content) => html! {
            <>
                if content.has_summary() {
                    { for content.paragraphs.iter().map(|p| html! {
                        <p class="text-sm text-gray-700 dark:text-gray-300 mb-2">{ p.clone() }</p>
                    }) }
                } else {
                    <p class="text-sm text-gray-500">{"No summary available for this page."}</p>
                }
                if !content.keywords.is_empty() {
                    <div class="flex flex-wrap gap-1 mt-2">
                        { for content.keywords.iter().map(|(keyword, color)| html! {
                            <span
                                class="px-2 py-0.5 rounded-full text-xs text-gray-800"
                                style={format!("background-color: {color};")}
                            >
                                { keyword.clone() }
                            </span>
                        }) }
                    </div>
                }
            </>
        },
    };

    html! {
        <div
            class="w-[350px] p-4 rounded-lg shadow-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 pointer-events-none"
            style={props.placement.to_style()}
        >
            { body }
            <p class="mt-2 text-xs text-gray-400 truncate">{ props.redirect_link.clone() }</p>
        </div>
    }
}
