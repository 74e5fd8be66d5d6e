//! API response type definitions.

use serde::Deserialize;

/// A post from the listing API.
///
/// The listing endpoint returns a bare JSON array of these; an empty array is
/// the feed-exhausted signal.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Free-text body. May be empty, plain text, HTML, or a mix of both.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// A provider-hosted file attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Provider-supplied display filename. May itself parse as an absolute
    /// URL, which the hi-res heuristic exploits.
    #[serde(default)]
    pub name: String,

    /// Storage path on the platform, e.g. `/data/ab/cd/file.jpg`.
    #[serde(default)]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_post_array() {
        let json = r#"[
            {"content": "<p>hello</p>", "attachments": [{"name": "a.jpg", "path": "/data/a.jpg"}]},
            {"content": "", "attachments": []}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].attachments[0].name, "a.jpg");
        assert!(posts[1].attachments.is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let json = r#"[{"id": "123", "title": "untitled"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts[0].content, "");
        assert!(posts[0].attachments.is_empty());
    }
}
