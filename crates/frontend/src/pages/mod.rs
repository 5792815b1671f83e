//! Top-level pages, one per route

mod home;
mod login;
mod not_found;
mod oauth_callback;
mod profile;
mod url_list;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use oauth_callback::OAuthCallbackPage;
pub use profile::ProfilePage;
pub use url_list::UrlListPage;
