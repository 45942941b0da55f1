use std::rc::Rc;

use crate::components::{CardList, ErrorMessage};
use portfolio_common::SiteConfig;
use yew::prelude::*;

#[function_component(CertificatesPage)]
pub fn certificates_page() -> Html {
    let site = use_context::<Rc<SiteConfig>>();
    let cards = use_memo(site.clone(), |site| {
        site.as_ref()
            .map(|s| s.certificate_cards())
            .unwrap_or_default()
    });

    if site.is_none() {
        return html! { <ErrorMessage message="Site data is not available" /> };
    }

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Certificates" }</h1>
            </div>
            <CardList
                entries={(*cards).clone()}
                empty_message="No certificates yet."
            />
        </div>
    }
}
