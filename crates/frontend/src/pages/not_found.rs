use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center mt-16">
            <h1 class="text-5xl font-bold text-gray-300">{"404"}</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-300">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-4 inline-block text-blue-600 hover:underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
