//! Authentication guard component for protected routes

use super::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Redirect;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children only for a signed-in user; everyone else goes to the login page
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth();

    if auth.is_loading() {
        return html! {
            <LoadingSpinner text={"Checking authentication..."} />
        };
    }

    if !auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! { <>{ props.children.clone() }</> }
}
