pub mod id;
pub mod status;

pub use id::{AccountId, MediaId, StatusId};
pub use status::{Account, AttachmentType, MediaAttachment, PixivCard, Status};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Could not decode status: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not read status file: {0}")]
    Io(#[from] std::io::Error),
}

impl Status {
    pub fn load(path: &std::path::Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
