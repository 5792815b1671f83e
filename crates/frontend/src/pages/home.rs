use crate::components::{BulkForm, UrlCard, UrlForm};
use yew::prelude::*;
use zaplink_core::ShortUrl;

const FEATURES: [(&str, &str); 3] = [
    (
        "Simple to Use",
        "Just paste your long URL and get a concise short link",
    ),
    ("Custom Aliases", "Create meaningful, easy-to-remember links"),
    (
        "Click Analytics",
        "Track how many times your links are clicked and when they were last accessed",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let recent = use_state(|| None::<ShortUrl>);

    let on_success = {
        let recent = recent.clone();
        Callback::from(move |url: ShortUrl| recent.set(Some(url)))
    };
    let on_delete = {
        let recent = recent.clone();
        Callback::from(move |_id: String| recent.set(None))
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-10">
            <section class="p-6 rounded-lg bg-white dark:bg-gray-800 shadow">
                <UrlForm {on_success} />
            </section>

            if let Some(url) = &*recent {
                <section>
                    <h4 class="text-lg font-medium mb-2">{"Recently Created Link"}</h4>
                    <UrlCard url={url.clone()} {on_delete} />
                </section>
            }

            <section class="p-6 rounded-lg bg-white dark:bg-gray-800 shadow">
                <BulkForm />
            </section>

            <section>
                <h3 class="text-xl font-semibold text-center mb-4">{"Why Use Our URL Shortening Service?"}</h3>
                <div class="grid gap-4 md:grid-cols-3">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <div class="p-4 rounded-lg bg-white dark:bg-gray-800 shadow text-center">
                            <h5 class="font-medium mb-1">{ *title }</h5>
                            <p class="text-sm text-gray-600 dark:text-gray-300">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
