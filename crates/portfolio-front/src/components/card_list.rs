use crate::components::Card;
use portfolio_common::CardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardListProps {
    pub entries: Vec<CardEntry>,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

#[function_component(CardList)]
pub fn card_list(props: &CardListProps) -> Html {
    if props.entries.is_empty() {
        let message = props
            .empty_message
            .clone()
            .unwrap_or_else(|| AttrValue::from("Nothing here yet."));
        return html! {
            <div class="empty-state">
                <p>{ message }</p>
            </div>
        };
    }

    html! {
        <ul class="card-list">
            { for props.entries.iter().map(|entry| {
                html! { <Card key={entry.id} entry={entry.clone()} /> }
            })}
        </ul>
    }
}
