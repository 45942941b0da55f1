pub mod certificates;
pub mod experience;
pub mod home;

pub use certificates::*;
pub use experience::*;
pub use home::*;
