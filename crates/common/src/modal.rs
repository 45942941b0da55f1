//! Full-screen viewer state owned by a single card.
//!
//! The open variants always carry a non-empty URL, so an open modal can
//! never point at nothing. Closing drops the URL together with the kind.

pub const CLOSE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Image,
    Embed,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    OpenImage(String),
    OpenEmbed(String),
}

/// Where a pointer click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    OpenImage(String),
    OpenEmbed(String),
    Close,
    Click(ClickTarget),
    KeyDown(String),
}

impl ModalAction {
    /// Maps a keyboard `key` value to the action it triggers, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == CLOSE_KEY).then(|| ModalAction::KeyDown(key.to_string()))
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn content_kind(&self) -> ContentKind {
        match self {
            ModalState::Closed => ContentKind::None,
            ModalState::OpenImage(_) => ContentKind::Image,
            ModalState::OpenEmbed(_) => ContentKind::Embed,
        }
    }

    /// Empty while closed.
    pub fn source_url(&self) -> &str {
        match self {
            ModalState::Closed => "",
            ModalState::OpenImage(url) | ModalState::OpenEmbed(url) => url,
        }
    }

    pub fn open_image(&self, url: &str) -> Self {
        self.open_with(url, ModalState::OpenImage)
    }

    pub fn open_embed(&self, url: &str) -> Self {
        self.open_with(url, ModalState::OpenEmbed)
    }

    pub fn close(&self) -> Self {
        ModalState::Closed
    }

    // Opening only happens from Closed; a second open while one is showing
    // leaves the current content in place.
    fn open_with(&self, url: &str, make: fn(String) -> ModalState) -> Self {
        let url = url.trim();
        if self.is_open() || url.is_empty() {
            return self.clone();
        }
        make(url.to_string())
    }

    pub fn apply(&self, action: ModalAction) -> Self {
        match action {
            ModalAction::OpenImage(url) => self.open_image(&url),
            ModalAction::OpenEmbed(url) => self.open_embed(&url),
            ModalAction::Close => self.close(),
            ModalAction::Click(ClickTarget::Backdrop) => self.close(),
            ModalAction::Click(ClickTarget::Content) => self.clone(),
            ModalAction::KeyDown(key) if key == CLOSE_KEY && self.is_open() => self.close(),
            ModalAction::KeyDown(_) => self.clone(),
        }
    }
}
