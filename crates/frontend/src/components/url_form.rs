use super::UrlSuccessCard;
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::routes::Route;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use zaplink_core::links::validate_shorten;
use zaplink_core::{ShortUrl, ShortenResponse};

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    /// Called with the new link once the backend accepted it
    #[prop_or_default]
    pub on_success: Callback<ShortUrl>,
}

#[function_component(UrlForm)]
pub fn url_form(props: &UrlFormProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();

    let url = use_state(String::new);
    let alias = use_state(String::new);
    let tag = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let result = use_state(|| None::<ShortenResponse>);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onsubmit = {
        let url = url.clone();
        let alias = alias.clone();
        let tag = tag.clone();
        let loading = loading.clone();
        let error = error.clone();
        let result = result.clone();
        let on_success = props.on_success.clone();
        let client = services.client.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let request = match validate_shorten(&url, &alias, &tag) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let url = url.clone();
            let alias = alias.clone();
            let tag = tag.clone();
            let loading = loading.clone();
            let error = error.clone();
            let result = result.clone();
            let on_success = on_success.clone();
            let client = client.clone();
            let auth = auth.clone();
            let cancel = cancel.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);
                result.set(None);

                let response =
                    with_auth_error_handling(&auth, client.shorten(&request)).await;
                if cancel.is_cancelled() {
                    return;
                }

                match response {
                    Ok(response) => {
                        tracing::info!("Created short link {}", response.short_id);
                        on_success.emit(ShortUrl {
                            id: response.short_id.clone(),
                            original_url: request.url.clone(),
                            tag: request.tag.clone(),
                            click_count: 0,
                            last_access: None,
                            created_at: None,
                        });
                        result.set(Some(response));
                        url.set(String::new());
                        alias.set(String::new());
                        tag.set(String::new());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <div>
            <h2 class="text-2xl font-semibold mb-4 text-gray-900 dark:text-gray-100">{"Create Short URL"}</h2>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 rounded bg-red-50 border border-red-200 text-red-700 text-sm">{ message.clone() }</div>
            }

            if let Some(response) = &*result {
                <UrlSuccessCard response={response.clone()} />
            }

            <form {onsubmit} class="space-y-4">
                <div>
                    <label class="block text-sm font-medium mb-1">{"Original URL *"}</label>
                    <input
                        type="url"
                        class={input_class}
                        placeholder="https://example.com"
                        value={(*url).clone()}
                        oninput={bind(&url)}
                        required=true
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">{"Custom Alias (Optional)"}</label>
                    <input
                        type="text"
                        class={input_class}
                        placeholder="my-custom-url"
                        value={(*alias).clone()}
                        oninput={bind(&alias)}
                    />
                    <p class="text-xs text-gray-500 mt-1">{"Leave blank to auto-generate. If specified, must be unique."}</p>
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">{"Tag (Optional)"}</label>
                    <input
                        type="text"
                        class={input_class}
                        placeholder="e.g.: social, work, personal"
                        value={(*tag).clone()}
                        oninput={bind(&tag)}
                    />
                    <p class="text-xs text-gray-500 mt-1">{"Used to categorize and find your URLs"}</p>
                </div>
                <button
                    type="submit"
                    class="w-full py-2.5 rounded bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-60"
                    disabled={*loading}
                >
                    { if *loading { "Processing..." } else { "Generate Short URL" } }
                </button>
            </form>

            if !auth.is_authenticated() {
                <p class="mt-3 text-center text-sm text-gray-500">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Sign in"}</Link<Route>>
                    {" to save your short links and view click statistics."}
                </p>
            }
        </div>
    }
}
