use std::rc::Rc;

use portfolio_common::{
    CardEntry, CardLayout, MediaConfig, MediaKind, ModalAction, ModalState, SiteConfig,
    VideoSource,
};
use yew::prelude::*;

use crate::components::{MediaModal, FRAME_SANDBOX};
use crate::hooks::use_close_key;

const STREAM_ALLOW: &str = "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub entry: CardEntry,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardModal(pub ModalState);

impl Reducible for CardModal {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            return self;
        }
        log::debug!(
            "Modal {:?} -> {:?} ({})",
            self.0.content_kind(),
            next.content_kind(),
            next.source_url()
        );
        Rc::new(CardModal(next))
    }
}

fn media_class(kind: &MediaKind) -> &'static str {
    match kind {
        MediaKind::Embed(_) => "card-embed",
        MediaKind::Video(_) => "card-video",
        MediaKind::Image(_) => "card-image",
        MediaKind::None => "card-text",
    }
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let entry = &props.entry;
    let modal = use_reducer_eq(CardModal::default);
    let site = use_context::<Rc<SiteConfig>>();

    let on_modal_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };
    use_close_key(entry.id, on_modal_action.clone());

    let default_media = MediaConfig::default();
    let media_config = site.as_ref().map(|s| &s.media).unwrap_or(&default_media);
    let kind = entry.media(&media_config.streaming_hosts);
    let layout = CardLayout::for_media(&kind);

    let on_open = kind.open_action().map(|action| {
        let on_modal_action = on_modal_action.clone();
        Callback::from(move |_: MouseEvent| on_modal_action.emit(action.clone()))
    });

    let media = match &kind {
        MediaKind::Embed(url) => html! {
            <div class="preview-wrapper">
                <iframe
                    class="preview-frame"
                    title={format!("{}-site", entry.name)}
                    src={url.clone()}
                    sandbox={FRAME_SANDBOX}
                />
                <button
                    class="preview-open"
                    aria-label={format!("Open {} full", entry.name)}
                    onclick={on_open.clone()}
                >
                    { "⤢" }
                </button>
            </div>
        },
        MediaKind::Video(VideoSource::Streaming(url)) => html! {
            <iframe
                class="stream-frame"
                title={format!("{}-embed", entry.name)}
                src={url.clone()}
                width="100%"
                height="100%"
                frameborder="0"
                allow={STREAM_ALLOW}
                allowfullscreen={true}
            />
        },
        MediaKind::Video(VideoSource::Native(url)) => html! {
            <video class="native-video" controls={true}>
                <source src={url.clone()} />
                { "Your browser does not support the video tag." }
            </video>
        },
        MediaKind::Image(url) => html! {
            <img class="media-image" src={url.clone()} alt={entry.name.clone()} onclick={on_open.clone()} />
        },
        MediaKind::None => html! {},
    };

    html! {
        <li class={classes!("card", media_class(&kind))} style={layout.card_style()}>
            <h2 class="card-title">{ &entry.name }</h2>

            if let Some(style) = layout.media_style() {
                <div class="card-media">
                    <div class="card-media-inner" {style}>
                        { media }
                    </div>
                </div>
            }

            <p class="card-description">{ &entry.description }</p>

            <div class="card-tags">
                { for entry.tags.iter().enumerate().map(|(i, tag)| html! {
                    <span key={i} class="card-tag">{ format!("#{}", tag) }</span>
                })}
            </div>

            <footer class="card-footer">
                <a
                    class="card-visit"
                    href={entry.demo_url().map(str::to_string)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "Visit" }
                </a>
                <a
                    class="card-source"
                    href={entry.github_url().map(str::to_string)}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Source"
                >
                    { "Source" }
                </a>
            </footer>

            <MediaModal
                state={modal.0.clone()}
                title={entry.name.clone()}
                on_action={on_modal_action}
            />
        </li>
    }
}
