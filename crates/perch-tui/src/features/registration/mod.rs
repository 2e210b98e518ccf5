//! Registration screen feature slice.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{RegistrationField, RegistrationScreen};
pub use update::{handle_key, handle_sign_up_failure};
