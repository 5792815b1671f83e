//! Authentication context and route guard

mod context;
mod guard;

pub use context::{AuthContext, AuthContextData, AuthProvider, use_auth};
pub use guard::ProtectedRoute;
