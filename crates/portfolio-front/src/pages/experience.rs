use std::rc::Rc;

use crate::components::{CardList, ErrorMessage};
use portfolio_common::SiteConfig;
use yew::prelude::*;

#[function_component(ExperiencePage)]
pub fn experience_page() -> Html {
    let Some(site) = use_context::<Rc<SiteConfig>>() else {
        return html! { <ErrorMessage message="Site data is not available" /> };
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Experience" }</h1>
            </div>
            <CardList
                entries={site.experience.clone()}
                empty_message="No projects yet."
            />
        </div>
    }
}
