use crate::auth::AuthProvider;
use crate::components::{Footer, Header};
use crate::routes::{Route, switch};
use crate::services::Services;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use zaplink_core::AppConfig;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let services = use_memo(Rc::clone(&props.config), |config| {
        Services::new(Rc::clone(config))
    });

    match &*services {
        Ok(services) => html! {
            <ContextProvider<Services> context={services.clone()}>
                <AuthProvider>
                    <BrowserRouter>
                        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
                            <Header />
                            <main class="flex-grow">
                                <Switch<Route> render={switch} />
                            </main>
                            <Footer />
                        </div>
                    </BrowserRouter>
                </AuthProvider>
            </ContextProvider<Services>>
        },
        Err(err) => {
            tracing::error!("Failed to start client: {err}");
            html! {
                <div class="min-h-screen flex items-center justify-center">
                    <div class="max-w-md p-6 bg-red-50 border border-red-200 rounded-lg text-red-800">
                        <h2 class="text-lg font-semibold mb-2">{"ZapLink could not start"}</h2>
                        <p class="text-sm">{err.user_message()}</p>
                    </div>
                </div>
            }
        }
    }
}
