//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them with `spawn_task` and sends the results to the inbox. They
//! perform I/O but never mutate state directly.

use perch_core::auth::{AuthClient, Session};
use perch_core::config::BackendConfig;
use perch_core::posts::PostsClient;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Signs in with the submitted credential pair.
pub async fn sign_in(backend: BackendConfig, email: String, password: String) -> UiEvent {
    let client = AuthClient::new(&backend);
    let result = client.sign_in(&email, &password).await;
    UiEvent::SignInResult { result }
}

/// Creates an account.
pub async fn sign_up(
    backend: BackendConfig,
    display_name: String,
    email: String,
    password: String,
) -> UiEvent {
    let client = AuthClient::new(&backend);
    let result = client.sign_up(&display_name, &email, &password).await;
    UiEvent::SignUpResult { result }
}

/// Loads the post feed. Cancellation resolves the task with an error the
/// reducer drops once the feed screen is gone.
pub async fn posts_load(
    backend: BackendConfig,
    session: Session,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let client = PostsClient::new(&backend);
    let fetch = client.fetch_posts(&session);

    let result = if let Some(token) = cancel {
        tokio::select! {
            () = token.cancelled() => Err("cancelled".to_string()),
            result = fetch => result.map_err(|error| format!("{error:#}")),
        }
    } else {
        fetch.await.map_err(|error| format!("{error:#}"))
    };

    UiEvent::PostsLoaded { result }
}
