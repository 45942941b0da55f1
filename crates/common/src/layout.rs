use crate::media::MediaKind;

/// Card width tokens, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardWidth {
    Narrow,
    Regular,
    Wide,
}

impl CardWidth {
    pub fn as_css(&self) -> &'static str {
        match self {
            CardWidth::Narrow => "16rem",
            CardWidth::Regular => "20rem",
            CardWidth::Wide => "30rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardHeight {
    Short,
    Tall,
}

impl CardHeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            CardHeight::Short => "40vh",
            CardHeight::Tall => "48vh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaHeight {
    /// Sized to the image's natural aspect ratio.
    Auto,
    Fixed,
    Preview,
}

impl MediaHeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            MediaHeight::Auto => "auto",
            MediaHeight::Fixed => "10rem",
            MediaHeight::Preview => "18rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardLayout {
    pub width: CardWidth,
    pub height: CardHeight,
    /// `None` when the card has no media region.
    pub media_height: Option<MediaHeight>,
}

impl CardLayout {
    pub fn for_media(kind: &MediaKind) -> Self {
        match kind {
            MediaKind::Embed(_) => Self {
                width: CardWidth::Wide,
                height: CardHeight::Tall,
                media_height: Some(MediaHeight::Preview),
            },
            MediaKind::Video(_) => Self {
                width: CardWidth::Regular,
                height: CardHeight::Tall,
                media_height: Some(MediaHeight::Fixed),
            },
            MediaKind::Image(_) => Self {
                width: CardWidth::Regular,
                height: CardHeight::Tall,
                media_height: Some(MediaHeight::Auto),
            },
            MediaKind::None => Self {
                width: CardWidth::Narrow,
                height: CardHeight::Short,
                media_height: None,
            },
        }
    }

    pub fn card_style(&self) -> String {
        format!(
            "width: {}; height: {};",
            self.width.as_css(),
            self.height.as_css()
        )
    }

    pub fn media_style(&self) -> Option<String> {
        self.media_height
            .map(|h| format!("height: {};", h.as_css()))
    }
}
