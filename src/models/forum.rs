use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub published: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Author display name as the backend denormalizes it.
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn posted_on(&self) -> Option<String> {
        self.created_at.map(|at| at.format("%d/%m/%Y %H:%M").to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub topic_id: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub post_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_with_and_without_timestamp() {
        let dated: Post = serde_json::from_str(
            r#"{"id":1,"title":"Hỏi về Rust","content":"...","account":"An","createdAt":"2026-08-20T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(dated.posted_on().as_deref(), Some("20/08/2026 09:30"));

        let bare: Post =
            serde_json::from_str(r#"{"id":2,"title":"Chào","content":"..."}"#).unwrap();
        assert_eq!(bare.posted_on(), None);
        assert_eq!(bare.account, None);
    }
}
