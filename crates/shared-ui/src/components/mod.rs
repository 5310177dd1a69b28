// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod progress;
pub mod toast;

// Composites
pub mod stat_card;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
pub use toast::*;
