//! Post feed access through the backend document store.
//!
//! Posts live in the project's `posts` collection. The store's REST
//! surface wraps every value in a typed envelope
//! (`{"stringValue": ...}`, `{"integerValue": "3"}`), so decoding is a
//! small pile of field extractors rather than plain serde.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};

use crate::auth::Session;
use crate::config::BackendConfig;

/// A post in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Document id within the posts collection.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Display name of the author.
    pub author: String,
    /// Photo URL, when the post carries one.
    pub photo_url: Option<String>,
    /// Creation timestamp, when the document carries one.
    pub created_at: Option<DateTime<Utc>>,
    /// Like count.
    pub likes: u32,
}

/// Document store client for the post feed.
pub struct PostsClient {
    http: reqwest::Client,
    data_url: String,
    project_id: String,
}

impl PostsClient {
    /// Creates a client for the configured backend.
    pub fn new(backend: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            data_url: backend.data_url.trim_end_matches('/').to_string(),
            project_id: backend.project_id.clone(),
        }
    }

    /// Fetches the post feed, newest first.
    pub async fn fetch_posts(&self, session: &Session) -> Result<Vec<Post>> {
        let url = format!(
            "{}/v1/projects/{}/databases/(default)/documents/posts",
            self.data_url, self.project_id
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&session.id_token)
            .send()
            .await
            .context("Failed to request post feed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("post feed request failed (HTTP {status}): {body}"));
        }

        let listing: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse post feed response")?;

        let mut posts = parse_documents(&listing);
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

/// Decodes a document listing into posts. Documents missing a title are
/// skipped rather than failing the whole feed.
pub fn parse_documents(listing: &serde_json::Value) -> Vec<Post> {
    let Some(documents) = listing.get("documents").and_then(|d| d.as_array()) else {
        return Vec::new();
    };

    documents
        .iter()
        .filter_map(|document| {
            let name = document.get("name")?.as_str()?;
            let id = name.rsplit('/').next().unwrap_or(name).to_string();
            let fields = document.get("fields")?;

            let title = string_field(fields, "title")?;
            Some(Post {
                id,
                title,
                author: string_field(fields, "author").unwrap_or_default(),
                photo_url: string_field(fields, "photoUrl"),
                created_at: timestamp_field(fields, "createdAt"),
                likes: integer_field(fields, "likes").unwrap_or(0),
            })
        })
        .collect()
}

fn string_field(fields: &serde_json::Value, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

fn integer_field(fields: &serde_json::Value, key: &str) -> Option<u32> {
    // The store encodes integers as strings
    fields.get(key)?.get("integerValue")?.as_str()?.parse().ok()
}

fn timestamp_field(fields: &serde_json::Value, key: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(key)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> serde_json::Value {
        serde_json::json!({
            "documents": [
                {
                    "name": "projects/p/databases/(default)/documents/posts/post-1",
                    "fields": {
                        "title": { "stringValue": "Sunset" },
                        "author": { "stringValue": "Olena" },
                        "photoUrl": { "stringValue": "https://img.example/1.jpg" },
                        "likes": { "integerValue": "3" },
                        "createdAt": { "timestampValue": "2024-03-01T10:00:00Z" }
                    }
                },
                {
                    "name": "projects/p/databases/(default)/documents/posts/post-2",
                    "fields": {
                        "title": { "stringValue": "Forest" },
                        "createdAt": { "timestampValue": "2024-04-01T10:00:00Z" }
                    }
                },
                {
                    "name": "projects/p/databases/(default)/documents/posts/broken",
                    "fields": {
                        "author": { "stringValue": "no title" }
                    }
                }
            ]
        })
    }

    #[test]
    fn parses_documents_and_skips_broken_ones() {
        let posts = parse_documents(&listing());
        assert_eq!(posts.len(), 2);

        let sunset = &posts[0];
        assert_eq!(sunset.id, "post-1");
        assert_eq!(sunset.title, "Sunset");
        assert_eq!(sunset.author, "Olena");
        assert_eq!(sunset.likes, 3);
        assert!(sunset.photo_url.is_some());
        assert!(sunset.created_at.is_some());

        let forest = &posts[1];
        assert_eq!(forest.id, "post-2");
        assert_eq!(forest.author, "");
        assert_eq!(forest.likes, 0);
    }

    #[test]
    fn empty_listing_is_empty_feed() {
        assert!(parse_documents(&serde_json::json!({})).is_empty());
        assert!(parse_documents(&serde_json::json!({ "documents": [] })).is_empty());
    }
}
