use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

use super::id::{AccountId, MediaId, StatusId};
use super::ModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    #[serde(default, deserialize_with = "lenient_reblog")]
    pub reblog: Option<Box<Status>>,
    pub account: Account,
    #[serde(default)]
    pub media_attachments: Vec<MediaAttachment>,
    #[serde(default)]
    pub pixiv_cards: Vec<PixivCard>,
    #[serde(default)]
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub reblogs_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
    #[serde(default)]
    pub replies_count: u64,
    #[serde(default)]
    pub reblogged: bool,
    #[serde(default)]
    pub favourited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    #[serde(default)]
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    pub url: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatar_static: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    Gifv,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub remote_url: String,
    #[serde(default)]
    pub text_url: String,
    #[serde(default)]
    pub url: String,
}

/// A pixiv link preview attached to a status. Rendered in place of the
/// regular media attachments whenever a status carries any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixivCard {
    pub url: String,
    pub image_url: String,
}

impl PixivCard {
    pub fn to_attachment(&self) -> MediaAttachment {
        MediaAttachment {
            id: self.stable_id(),
            kind: AttachmentType::Image,
            preview_url: self.image_url.clone(),
            remote_url: String::new(),
            text_url: self.url.clone(),
            url: self.image_url.clone(),
        }
    }

    // Derived from the image url so identical cards keep their id across renders.
    fn stable_id(&self) -> MediaId {
        let digest = Sha256::digest(self.image_url.as_bytes());
        let hex = hex::encode(digest);
        MediaId::new(format!("pixiv-{}", &hex[..16]))
    }
}

impl Account {
    /// Name shown in the "boosted" banner.
    pub fn name_for_banner(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

impl Status {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::Decode)
    }

    pub fn is_reblog(&self) -> bool {
        self.reblog.is_some()
    }

    /// The status a click on the body should open: the reblogged original
    /// if this is a reblog wrapper, otherwise the status itself.
    pub fn navigation_target(&self) -> &StatusId {
        self.reblog
            .as_deref()
            .map(|original| &original.id)
            .unwrap_or(&self.id)
    }

    pub fn effective_attachments(&self) -> Vec<MediaAttachment> {
        if self.pixiv_cards.is_empty() {
            self.media_attachments.clone()
        } else {
            self.pixiv_cards.iter().map(PixivCard::to_attachment).collect()
        }
    }
}

fn lenient_reblog<'de, D>(deserializer: D) -> Result<Option<Box<Status>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value @ serde_json::Value::Object(_)) => match serde_json::from_value::<Status>(value) {
            Ok(status) => Ok(Some(Box::new(status))),
            Err(e) => {
                log::warn!("Ignoring malformed reblog: {}", e);
                Ok(None)
            }
        },
        Some(other) => {
            log::warn!("Ignoring non-object reblog: {}", other);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_json(reblog: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "reblog": {reblog},
                "account": {{
                    "id": "1",
                    "username": "alice",
                    "display_name": "",
                    "url": "https://example.social/@alice"
                }},
                "created_at": "2017-04-20T10:00:00Z",
                "url": "https://example.social/@alice/7"
            }}"#
        )
    }

    #[test]
    fn test_decodes_original_status() {
        let status = Status::from_json(&status_json("null")).unwrap();
        assert_eq!(status.id.as_str(), "7");
        assert!(!status.is_reblog());
        assert!(status.media_attachments.is_empty());
        assert_eq!(status.navigation_target().as_str(), "7");
    }

    #[test]
    fn test_decodes_nested_reblog() {
        let inner = status_json("null").replace("\"id\": 7", "\"id\": \"42\"");
        let status = Status::from_json(&status_json(&inner)).unwrap();
        assert!(status.is_reblog());
        assert_eq!(status.navigation_target().as_str(), "42");
    }

    #[test]
    fn test_malformed_reblog_is_treated_as_original() {
        for reblog in ["true", "3", "\"42\"", "[]", "{\"id\": 1}"] {
            let status = Status::from_json(&status_json(reblog)).unwrap();
            assert!(status.reblog.is_none(), "reblog {} should be dropped", reblog);
        }
    }

    #[test]
    fn test_missing_account_is_an_error() {
        let err = Status::from_json(r#"{"id": 1, "created_at": "2017-04-20T10:00:00Z"}"#);
        assert!(matches!(err, Err(ModelError::Decode(_))));
    }

    #[test]
    fn test_unrecognized_media_type_decodes_as_unknown() {
        let media: MediaAttachment =
            serde_json::from_str(r#"{"id": 3, "type": "hologram"}"#).unwrap();
        assert_eq!(media.kind, AttachmentType::Unknown);
    }

    #[test]
    fn test_pixiv_cards_replace_media_attachments() {
        let mut status = Status::from_json(&status_json("null")).unwrap();
        status.media_attachments.push(MediaAttachment {
            id: MediaId::from("m1"),
            kind: AttachmentType::Video,
            preview_url: String::new(),
            remote_url: String::new(),
            text_url: String::new(),
            url: "https://example.social/video.mp4".to_string(),
        });
        status.pixiv_cards.push(PixivCard {
            url: "https://www.pixiv.net/artworks/1".to_string(),
            image_url: "https://i.pximg.net/1.png".to_string(),
        });

        let attachments = status.effective_attachments();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].kind, AttachmentType::Image);
        assert_eq!(attachments[0].text_url, "https://www.pixiv.net/artworks/1");
        assert_eq!(attachments[0].preview_url, "https://i.pximg.net/1.png");
        assert!(attachments[0].remote_url.is_empty());
    }

    #[test]
    fn test_pixiv_ids_are_stable() {
        let card = PixivCard {
            url: "https://www.pixiv.net/artworks/1".to_string(),
            image_url: "https://i.pximg.net/1.png".to_string(),
        };
        let first = card.to_attachment().id;
        assert_eq!(first, card.to_attachment().id);
        assert!(first.as_str().starts_with("pixiv-"));
        assert_eq!(first.as_str().len(), "pixiv-".len() + 16);
    }

    #[test]
    fn test_banner_name_falls_back_to_username() {
        let mut status = Status::from_json(&status_json("null")).unwrap();
        assert_eq!(status.account.name_for_banner(), "alice");
        status.account.display_name = "Alice".to_string();
        assert_eq!(status.account.name_for_banner(), "Alice");
    }
}
