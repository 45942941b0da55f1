use std::rc::Rc;

use portfolio_common::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorMessage, Layout};
use crate::pages::{CertificatesPage, ExperiencePage, Home};
use crate::routes::Route;

#[function_component(App)]
pub fn app() -> Html {
    let site = use_memo((), |_| SiteConfig::load().map(Rc::new));

    let content = match &*site {
        Ok(config) => html! {
            <ContextProvider<Rc<SiteConfig>> context={config.clone()}>
                <Switch<Route> render={switch} />
            </ContextProvider<Rc<SiteConfig>>>
        },
        Err(e) => {
            log::error!("Failed to load site data: {}", e);
            html! { <ErrorMessage message={e.to_string()} /> }
        }
    };

    html! {
        <BrowserRouter>
            <Layout>
                { content }
            </Layout>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes.page() {
        Route::Home => html! { <Home /> },
        Route::Experience => html! { <ExperiencePage /> },
        Route::Certificates => html! { <CertificatesPage /> },
        Route::NotFound => html! { <Home /> },
    }
}
