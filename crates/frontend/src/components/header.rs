use crate::auth::use_auth;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let auth = auth.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let user_menu = match auth.profile() {
        Some(profile) if auth.is_authenticated() => html! {
            <div class="relative">
                <button class="flex items-center gap-2 text-gray-200 hover:text-white" onclick={toggle_menu}>
                    if let Some(picture) = &profile.picture_url {
                        <img src={picture.clone()} alt="" class="w-6 h-6 rounded-full" />
                    } else {
                        <span class="w-6 h-6 rounded-full bg-gray-500 text-white text-xs flex items-center justify-center">
                            { profile.initial() }
                        </span>
                    }
                    <span>{ profile.display_name().to_string() }</span>
                </button>
                if *menu_open {
                    <div class="absolute right-0 mt-2 w-40 bg-white dark:bg-gray-800 rounded shadow-lg py-1 z-40">
                        <span onclick={close_menu}>
                            <Link<Route> to={Route::Profile} classes="block px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700">
                                {"My Profile"}
                            </Link<Route>>
                        </span>
                        <hr class="my-1 border-gray-200 dark:border-gray-700" />
                        <button class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100 dark:hover:bg-gray-700" onclick={on_logout}>
                            {"Logout"}
                        </button>
                    </div>
                }
            </div>
        },
        _ => html! {
            <Link<Route> to={Route::Login} classes="text-gray-200 hover:text-white">{"Login"}</Link<Route>>
        },
    };

    html! {
        <nav class="bg-gray-900 mb-6">
            <div class="max-w-5xl mx-auto px-4 h-14 flex items-center justify-between">
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Home} classes="text-white font-bold text-lg">{"⚡ ZapLink"}</Link<Route>>
                    <Link<Route> to={Route::Home} classes="text-gray-300 hover:text-white text-sm">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::MyLinks} classes="text-gray-300 hover:text-white text-sm">{"My Links"}</Link<Route>>
                </div>
                { user_menu }
            </div>
        </nav>
    }
}
