use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Something went wrong"))]
    pub title: AttrValue,
}

/// Inline error banner for data that failed to load.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="error-message" role="alert">
            <strong>{ format!("{}: ", props.title) }</strong>
            <span>{ &props.message }</span>
        </div>
    }
}
