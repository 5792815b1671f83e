//! API wrapper utilities for handling authentication errors

use crate::auth::AuthContext;
use zaplink_http::ClientError;

/// Sign out when the backend no longer accepts the token
pub fn handle_api_error(error: &ClientError, auth: &AuthContext) {
    if error.is_unauthorized() {
        auth.force_logout();
    }
}

/// Wrapper for API calls that handles auth errors
pub async fn with_auth_error_handling<T, F>(
    auth: &AuthContext,
    api_call: F,
) -> Result<T, ClientError>
where
    F: std::future::Future<Output = Result<T, ClientError>>,
{
    match api_call.await {
        Ok(result) => Ok(result),
        Err(error) => {
            handle_api_error(&error, auth);
            Err(error)
        }
    }
}
