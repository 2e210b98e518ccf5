//! Feature slices for the TUI (state/update/render per screen).

pub mod login;
pub mod posts;
pub mod registration;

use crate::effects::UiEffect;
use crate::nav::Destination;

/// Update returned by screen key handlers.
///
/// Effects go to the runtime; `nav` is applied by the reducer after the
/// handler returns (the handler can't swap the screen out from under
/// itself).
#[derive(Debug, Default)]
pub struct ScreenUpdate {
    pub effects: Vec<UiEffect>,
    pub nav: Option<Destination>,
}

impl ScreenUpdate {
    pub fn stay() -> Self {
        Self::default()
    }

    pub fn to(destination: Destination) -> Self {
        Self {
            effects: Vec::new(),
            nav: Some(destination),
        }
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}
