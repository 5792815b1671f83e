use crate::auth::use_auth;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zaplink_core::{LoginRequest, OAuthProvider};

#[derive(Properties, PartialEq)]
pub struct LoginButtonProps {
    pub provider: OAuthProvider,
}

#[function_component(LoginButton)]
pub fn login_button(props: &LoginButtonProps) -> Html {
    let auth = use_auth();
    let provider = props.provider;

    let onclick = Callback::from(move |_: MouseEvent| {
        let auth = auth.clone();
        spawn_local(async move {
            if let Err(e) = auth.login(LoginRequest::Provider(provider)).await {
                tracing::error!("Login with {provider} failed: {e}");
            }
        });
    });

    let style = match provider {
        OAuthProvider::Google => "bg-white text-gray-800 border border-gray-300 hover:bg-gray-50",
        OAuthProvider::GitHub => "bg-gray-900 text-white hover:bg-gray-800",
    };

    html! {
        <button
            type="button"
            class={classes!("w-full", "py-2.5", "rounded-lg", "font-medium", "transition-colors", style)}
            {onclick}
        >
            { format!("Sign in with {}", provider.display_name()) }
        </button>
    }
}
