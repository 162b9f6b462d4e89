use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::model::{AttachmentType, MediaAttachment};

use super::types::{Media, StatusComponent, StatusState};

// Galleries never show more than four tiles
const MAX_GALLERY_ITEMS: usize = 4;

pub struct StatusMedia<'a> {
    media: &'a Media,
}

impl<'a> StatusMedia<'a> {
    pub fn new(media: &'a Media) -> Self {
        Self { media }
    }

    fn icon(item: &MediaAttachment) -> &'static str {
        match item.kind {
            AttachmentType::Video => "▶",
            AttachmentType::Gifv => "⟲",
            AttachmentType::Audio => "♪",
            AttachmentType::Image | AttachmentType::Unknown => "▣",
        }
    }

    fn item_line(item: &MediaAttachment, sensitive: bool) -> Line<'static> {
        let url = if item.preview_url.is_empty() {
            item.url.clone()
        } else {
            item.preview_url.clone()
        };
        let mut spans = vec![Span::raw(format!("{} ", Self::icon(item)))];
        if sensitive {
            spans.push(Span::styled("[sensitive] ", Style::default().fg(Color::Red)));
        }
        spans.push(Span::styled(url, Style::default().fg(Color::Gray)));
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.media {
            Media::None | Media::Suppressed => Vec::new(),
            Media::Video(video) => vec![Self::item_line(&video.media, video.sensitive)],
            Media::Gallery(gallery) => gallery
                .media
                .iter()
                .take(MAX_GALLERY_ITEMS)
                .map(|item| Self::item_line(item, gallery.sensitive))
                .collect(),
        }
    }

    fn title(&self) -> &'static str {
        match self.media {
            Media::Video(_) => "Video",
            _ => "Media",
        }
    }
}

impl StatusComponent for StatusMedia<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, _state: &StatusState) {
        let lines = self.lines();
        if lines.is_empty() {
            return;
        }
        let block = Block::default().borders(Borders::ALL).title(self.title());
        let inner_area = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).render(inner_area, buf);
    }

    fn height(&self, _width: u16) -> u16 {
        match self.lines().len() {
            0 => 0,
            n => n as u16 + 2,
        }
    }
}
