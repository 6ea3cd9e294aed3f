use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub type PostID = String;

pub const POST_ID_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostID,
    pub title: String,
    // free-form category tag, only ever matched exactly
    pub engine: String,
    // markdown
    pub content: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields submitted when creating a post. Nothing is validated; missing text
/// fields come through as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The fields an edit is allowed to touch. Anything else in a submission,
/// `id` included, is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub engine: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl Post {
    pub fn apply(&mut self, update: PostUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(engine) = update.engine {
            self.engine = engine;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
    }

    /// The image URL if one was actually given; an empty submission counts as none.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

pub fn get_random_hex_string<const LEN: usize>() -> String {
    let mut bytes = [0u8; LEN];
    rand_chacha::ChaCha20Rng::from_entropy().fill_bytes(&mut bytes);

    bytes.iter().fold(String::new(), |mut output, b| {
        let _ = write!(output, "{b:02x}");
        output
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "abc".into(),
            title: "A".into(),
            engine: "js".into(),
            content: "x".into(),
            image: Some("img".into()),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut post = post();
        post.apply(PostUpdate {
            engine: Some("go".into()),
            image: Some(String::new()),
            ..PostUpdate::default()
        });

        assert_eq!(post.title, "A");
        assert_eq!(post.engine, "go");
        assert_eq!(post.content, "x");
        assert_eq!(post.image.as_deref(), Some(""));
        assert_eq!(post.image_url(), None);
    }

    #[test]
    fn random_hex_string_has_two_chars_per_byte() {
        let id = get_random_hex_string::<POST_ID_BYTES>();

        assert_eq!(id.len(), POST_ID_BYTES * 2);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
