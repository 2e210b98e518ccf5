//! Post feed state.

use perch_core::posts::Post;

/// Post feed screen state.
#[derive(Debug, Default)]
pub struct PostsScreen {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl PostsScreen {
    /// Fresh screen waiting for the feed load kicked off on mount.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Applies a resolved feed load.
    pub fn on_loaded(&mut self, result: Result<Vec<Post>, String>) {
        self.loading = false;
        match result {
            Ok(posts) => {
                self.error = None;
                self.posts = posts;
                if self.selected >= self.posts.len() {
                    self.selected = self.posts.len().saturating_sub(1);
                }
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.selected = (self.selected + 1).min(self.posts.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
