//! Login screen feature slice.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{FieldFlags, LoginField, LoginScreen};
pub use update::{handle_key, handle_sign_in_failure, sign_in_error_message};
