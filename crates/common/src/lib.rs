pub mod card;
pub mod config;
pub mod error;
pub mod layout;
pub mod media;
pub mod modal;

pub use card::{CardEntry, Certificate};
pub use config::{MediaConfig, SiteConfig};
pub use error::DataError;
pub use layout::{CardHeight, CardLayout, CardWidth, MediaHeight};
pub use media::{MediaKind, VideoSource};
pub use modal::{ClickTarget, ContentKind, ModalAction, ModalState};
