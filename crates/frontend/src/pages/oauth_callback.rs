use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::hooks::use_cancellation;
use crate::routes::Route;
use crate::services::use_services;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use zaplink_core::{LoginRequest, token_from_query};

#[derive(Clone, PartialEq)]
enum CallbackState {
    Processing,
    Succeeded,
    Failed(String),
}

/// Landing page of the OAuth redirect: stores the token and moves on to the profile
#[function_component(OAuthCallbackPage)]
pub fn oauth_callback_page() -> Html {
    let services = use_services();
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let cancel = use_cancellation();
    let state = use_state(|| CallbackState::Processing);

    {
        let state = state.clone();
        let query = location
            .map(|location| location.query_str().to_string())
            .unwrap_or_default();
        let delay_ms = services.config.callback_redirect_delay_ms;

        use_effect_with(query, move |query| {
            match token_from_query(query) {
                Ok(token) => {
                    spawn_local(async move {
                        if let Err(e) = auth.login(LoginRequest::Token(token)).await {
                            tracing::error!("Failed to complete sign-in: {e}");
                            if !cancel.is_cancelled() {
                                state.set(CallbackState::Failed(e.to_string()));
                            }
                            return;
                        }
                        if cancel.is_cancelled() {
                            return;
                        }
                        state.set(CallbackState::Succeeded);

                        TimeoutFuture::new(delay_ms).await;
                        if cancel.is_cancelled() {
                            return;
                        }
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Profile);
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("OAuth callback without a token");
                    state.set(CallbackState::Failed(e.to_string()));
                }
            }
            || ()
        });
    }

    let body = match &*state {
        CallbackState::Processing => html! {
            <LoadingSpinner text="Completing sign-in..." />
        },
        CallbackState::Succeeded => html! {
            <div>
                <h4 class="text-xl font-medium text-green-600">{"Authentication successful!"}</h4>
                <p class="text-gray-500 mt-1">{"You will be redirected to your profile shortly."}</p>
            </div>
        },
        CallbackState::Failed(message) => html! {
            <div class="p-4 rounded border border-red-200 bg-red-50 text-red-700">
                <h4 class="text-lg font-medium">{"Authentication Error"}</h4>
                <p class="mt-1">{ message.clone() }</p>
                <Link<Route> to={Route::Login} classes="mt-2 inline-block underline">
                    {"Return to login page"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <div class="max-w-md mx-auto mt-16 text-center">
            { body }
        </div>
    }
}
