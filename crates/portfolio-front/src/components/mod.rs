pub mod card;
pub mod card_list;
pub mod error_message;
pub mod layout;
pub mod media_modal;
pub mod navbar;

pub use card::*;
pub use card_list::*;
pub use error_message::*;
pub use layout::*;
pub use media_modal::*;
pub use navbar::*;
