use portfolio_common::{ClickTarget, ModalAction, ModalState};
use yew::prelude::*;

pub const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

#[derive(Properties, PartialEq)]
pub struct MediaModalProps {
    pub state: ModalState,
    /// Used for the image alt text and frame title.
    pub title: AttrValue,
    pub on_action: Callback<ModalAction>,
}

/// Full-screen overlay for an enlarged image or embedded page.
///
/// Clicks on the backdrop close it; clicks inside the content stop at the
/// content box and never reach the backdrop.
#[function_component(MediaModal)]
pub fn media_modal(props: &MediaModalProps) -> Html {
    let on_backdrop_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ModalAction::Click(ClickTarget::Backdrop));
        })
    };

    let on_content_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(ModalAction::Click(ClickTarget::Content));
        })
    };

    let on_close_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ModalAction::Close);
        })
    };

    let body = match &props.state {
        ModalState::Closed => return html! {},
        ModalState::OpenImage(url) => html! {
            <img class="modal-image" src={url.clone()} alt={props.title.clone()} />
        },
        ModalState::OpenEmbed(url) => html! {
            <iframe
                class="modal-frame"
                title={format!("{}-embed-full", props.title)}
                src={url.clone()}
                sandbox={FRAME_SANDBOX}
                allowfullscreen={true}
            />
        },
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_content_click}>
                { body }
                <button class="modal-close" aria-label="Close" onclick={on_close_click}>{ "×" }</button>
            </div>
        </div>
    }
}
