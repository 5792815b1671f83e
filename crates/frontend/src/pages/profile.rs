use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use zaplink_core::links::format_last_access;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    // Served from the session cache when it is still fresh
    {
        let auth = auth.clone();
        use_effect_with((), move |()| {
            spawn_local(async move { auth.refresh().await });
        });
    }

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let Some(profile) = auth.profile() else {
        return html! { <LoadingSpinner text="Loading profile..." /> };
    };

    let row = |label: &'static str, value: String| {
        html! {
            <div class="flex justify-between py-2 border-b border-gray-100 dark:border-gray-700">
                <span class="text-gray-500">{ label }</span>
                <span class="capitalize">{ value }</span>
            </div>
        }
    };

    html! {
        <div class="max-w-lg mx-auto">
            <h2 class="text-2xl font-semibold mb-4">{"My Profile"}</h2>

            if let Some(error) = &auth.state().error {
                <div class="mb-4 p-3 rounded bg-red-50 border border-red-200 text-red-700 text-sm">{ error.clone() }</div>
            }

            <div class="p-6 rounded-lg bg-white dark:bg-gray-800 shadow">
                <div class="flex items-center gap-4 mb-4">
                    if let Some(picture) = &profile.picture_url {
                        <img src={picture.clone()} alt="Profile" class="w-16 h-16 rounded-full" />
                    } else {
                        <div class="w-16 h-16 rounded-full bg-blue-600 text-white flex items-center justify-center text-2xl">
                            { profile.initial() }
                        </div>
                    }
                    <div>
                        <h4 class="text-xl font-medium">{ profile.display_name().to_string() }</h4>
                        <p class="text-gray-500">{ profile.email.clone() }</p>
                    </div>
                </div>

                { row("Auth Provider:", profile.provider.clone()) }
                { row("Role:", profile.role.clone()) }
                { row(
                    "Last Login:",
                    profile.last_login.as_deref().map_or_else(|| "N/A".to_string(), format_last_access),
                ) }

                <button
                    type="button"
                    class="mt-6 w-full py-2 rounded border border-red-300 text-red-600 hover:bg-red-50 dark:hover:bg-gray-700"
                    onclick={on_logout}
                >
                    {"Sign Out"}
                </button>
            </div>
        </div>
    }
}
