use crate::auth::use_auth;
use crate::components::LoginButton;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Redirect;
use zaplink_core::OAuthProvider;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();

    if auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Profile} /> };
    }

    html! {
        <div class="max-w-sm mx-auto mt-12 p-6 rounded-lg bg-white dark:bg-gray-800 shadow text-center">
            <h2 class="text-2xl font-bold mb-1">{"ZapLink"}</h2>
            <p class="text-gray-500 mb-6">{"Sign in to manage your links"}</p>
            <div class="space-y-3">
                { for OAuthProvider::ALL.into_iter().map(|provider| html! {
                    <LoginButton {provider} />
                }) }
            </div>
            if let Some(error) = &auth.state().error {
                <p class="mt-4 text-sm text-red-600">{ error.clone() }</p>
            }
            <p class="mt-6 text-xs text-gray-400">
                {"By signing in you agree that we store your name and email to keep your links."}
            </p>
        </div>
    }
}
