use crate::model::{AttachmentType, MediaAttachment, Status};

use super::types::{GalleryProps, Media, RenderContext, VideoProps};

const GALLERY_HEIGHT: u16 = 132;
const SQUARE_GALLERY_HEIGHT: u16 = 229;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaMode<'a> {
    None,
    Suppressed,
    SingleVideo(&'a MediaAttachment),
    Gallery(&'a [MediaAttachment]),
}

/// Picks how a status's media is shown. A single attachment of unknown
/// type hides the whole set, even when the first one is playable.
pub fn select_media(attachments: &[MediaAttachment], muted: bool) -> MediaMode<'_> {
    let Some(first) = attachments.first() else {
        return MediaMode::None;
    };
    if muted {
        return MediaMode::None;
    }
    if attachments
        .iter()
        .any(|item| item.kind == AttachmentType::Unknown)
    {
        return MediaMode::Suppressed;
    }
    if first.kind == AttachmentType::Video {
        MediaMode::SingleVideo(first)
    } else {
        MediaMode::Gallery(attachments)
    }
}

pub fn build_media(status: &Status, ctx: &RenderContext) -> Media {
    let attachments = status.effective_attachments();
    match select_media(&attachments, ctx.muted) {
        MediaMode::None => Media::None,
        MediaMode::Suppressed => {
            log::debug!("Hiding media of status {} with unsupported attachments", status.id);
            Media::Suppressed
        }
        MediaMode::SingleVideo(video) => Media::Video(VideoProps {
            media: video.clone(),
            sensitive: status.sensitive,
            on_open_video: ctx.handlers.on_open_video.clone(),
        }),
        MediaMode::Gallery(items) => Media::Gallery(GalleryProps {
            media: items.to_vec(),
            sensitive: status.sensitive,
            height: if ctx.square_media {
                SQUARE_GALLERY_HEIGHT
            } else {
                GALLERY_HEIGHT
            },
            on_open_media: ctx.handlers.on_open_media.clone(),
            autoplay_gif: ctx.autoplay_gif,
            expand_media: ctx.expand_media,
            square_media: ctx.square_media,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaId;

    fn media(id: &str, kind: AttachmentType) -> MediaAttachment {
        MediaAttachment {
            id: MediaId::from(id),
            kind,
            preview_url: format!("https://files.example/{}_small.png", id),
            remote_url: String::new(),
            text_url: String::new(),
            url: format!("https://files.example/{}.png", id),
        }
    }

    #[test]
    fn test_empty_or_muted_selects_nothing() {
        assert_eq!(select_media(&[], false), MediaMode::None);
        let items = vec![media("1", AttachmentType::Image)];
        assert_eq!(select_media(&items, true), MediaMode::None);
    }

    #[test]
    fn test_any_unknown_suppresses_everything() {
        let items = vec![
            media("1", AttachmentType::Video),
            media("2", AttachmentType::Image),
            media("3", AttachmentType::Unknown),
        ];
        assert_eq!(select_media(&items, false), MediaMode::Suppressed);

        let items = vec![media("1", AttachmentType::Unknown)];
        assert_eq!(select_media(&items, false), MediaMode::Suppressed);
    }

    #[test]
    fn test_leading_video_wins_over_the_rest() {
        let items = vec![
            media("1", AttachmentType::Video),
            media("2", AttachmentType::Image),
        ];
        match select_media(&items, false) {
            MediaMode::SingleVideo(video) => assert_eq!(video.id.as_str(), "1"),
            other => panic!("expected a video, got {:?}", other),
        }
    }

    #[test]
    fn test_otherwise_gallery_of_everything() {
        let items = vec![
            media("1", AttachmentType::Image),
            media("2", AttachmentType::Video),
            media("3", AttachmentType::Gifv),
        ];
        match select_media(&items, false) {
            MediaMode::Gallery(all) => assert_eq!(all.len(), 3),
            other => panic!("expected a gallery, got {:?}", other),
        }
    }
}
