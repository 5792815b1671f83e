//! Application routes

use crate::auth::ProtectedRoute;
use crate::pages::{
    HomePage, LoginPage, NotFoundPage, OAuthCallbackPage, ProfilePage, UrlListPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/oauth2/callback")]
    OAuthCallback,
    #[at("/urls")]
    MyLinks,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::OAuthCallback => html! { <OAuthCallbackPage /> },
        Route::MyLinks => html! {
            <ProtectedRoute>
                <UrlListPage />
            </ProtectedRoute>
        },
        Route::Profile => html! {
            <ProtectedRoute>
                <ProfilePage />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
