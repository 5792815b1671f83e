//! Global authentication context and provider

use crate::hooks::use_cancellation;
use crate::services::{Services, use_services};
use std::rc::Rc;
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zaplink_core::{
    AuthAction, AuthState, CoreResult, LoginRequest, LoginStep, UserProfile,
};

/// Authentication context data
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthContextData {
    pub state: AuthState,
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            state: self.state.reduce(action),
        })
    }
}

/// Authentication context: current state plus the session operations
#[derive(Clone)]
pub struct AuthContext {
    data: UseReducerHandle<AuthContextData>,
    services: Services,
    cancel: CancellationToken,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.services == other.services
    }
}

impl AuthContext {
    pub fn state(&self) -> &AuthState {
        &self.data.state
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.data.state.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.data.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.state.is_authenticated()
    }

    /// Redirect to a provider, or accept a callback token and load the profile
    pub async fn login(&self, request: LoginRequest) -> CoreResult<()> {
        if matches!(request, LoginRequest::Token(_)) {
            self.data.dispatch(AuthAction::Begin);
        }

        match self.services.session.login(request, &self.cancel).await {
            Ok(LoginStep::Redirect(url)) => {
                if let Err(e) = gloo::utils::window().location().set_href(&url) {
                    tracing::error!("Failed to redirect to {url}: {e:?}");
                }
                Ok(())
            }
            Ok(LoginStep::Settled(action)) => {
                self.data.dispatch(action);
                Ok(())
            }
            Ok(LoginStep::Cancelled) => Ok(()),
            Err(e) => {
                self.data.dispatch(AuthAction::FetchFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Reload the profile through the session cache without entering the loading state
    pub async fn refresh(&self) {
        if let Some(action) = self.services.session.refresh(&self.cancel).await {
            self.data.dispatch(action);
        }
    }

    pub fn logout(&self) {
        let action = self.services.session.logout();
        self.data.dispatch(action);
    }

    /// Sign out after the backend rejected the token
    pub fn force_logout(&self) {
        let action = self.services.session.force_logout();
        self.data.dispatch(action);
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let services = use_services();
    let data = use_reducer(AuthContextData::default);
    let cancel = use_cancellation();

    // Resolve the stored token on mount
    {
        let data = data.clone();
        let session = Rc::clone(&services.session);
        let cancel = cancel.clone();
        use_effect_with((), move |()| {
            data.dispatch(AuthAction::Begin);
            spawn_local(async move {
                if let Some(action) = session.initialize(&cancel).await {
                    data.dispatch(action);
                }
            });
        });
    }

    let context = AuthContext {
        data,
        services,
        cancel,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

/// Hook to access auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
