//! Screen navigation.
//!
//! The one way screens change: a handler returns a [`Destination`] and the
//! reducer applies it here. Navigation owns the mount/unmount bookkeeping -
//! form screens hold the focus subscription while mounted, and entering
//! the home screen kicks off the feed load.

use crate::effects::UiEffect;
use crate::features::login::LoginScreen;
use crate::features::posts::PostsScreen;
use crate::features::registration::RegistrationScreen;
use crate::state::{AppState, Screen};

/// Tabs of the home screen. The post feed is the only one today; the enum
/// keeps the destination shape the rest of the app addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeTab {
    Posts,
}

/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Registration,
    Home { tab: HomeTab },
}

/// Replaces the visible screen, returning the new screen's entry effects.
pub fn navigate(app: &mut AppState, destination: Destination) -> Vec<UiEffect> {
    unmount(app);

    match destination {
        Destination::Login => {
            app.tui.focus.subscribe();
            app.screen = Screen::Login(LoginScreen::new());
            vec![]
        }
        Destination::Registration => {
            app.tui.focus.subscribe();
            app.screen = Screen::Registration(RegistrationScreen::new());
            vec![]
        }
        Destination::Home { tab: HomeTab::Posts } => {
            app.screen = Screen::Posts(PostsScreen::loading());
            vec![UiEffect::LoadPosts { task: None }]
        }
    }
}

/// Releases whatever the outgoing screen was holding.
fn unmount(app: &mut AppState) {
    match &app.screen {
        Screen::Login(_) | Screen::Registration(_) => {
            app.tui.focus.unsubscribe();
        }
        Screen::Posts(_) => {}
    }
}
