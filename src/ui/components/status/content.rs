use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::text::plain_text;

use super::types::{ContentProps, StatusComponent, StatusState};

pub struct StatusContent {
    spoiler: Option<String>,
    text: String,
}

impl StatusContent {
    pub fn new(props: &ContentProps) -> Self {
        let status = &props.status;
        let spoiler = (!status.spoiler_text.is_empty()).then(|| status.spoiler_text.clone());
        Self {
            spoiler,
            text: plain_text(&status.content),
        }
    }

    fn calculate_height(&self, width: u16) -> u16 {
        let chars_per_line = (width as usize).max(1);
        let text_lines = if self.text.is_empty() {
            0
        } else {
            textwrap::wrap(&self.text, chars_per_line).len()
        };
        let spoiler_lines = self
            .spoiler
            .as_ref()
            .map(|spoiler| textwrap::wrap(&format!("CW: {}", spoiler), chars_per_line).len())
            .unwrap_or(0);

        u16::try_from(text_lines + spoiler_lines).unwrap_or(u16::MAX)
    }
}

impl StatusComponent for StatusContent {
    fn render(&self, area: Rect, buf: &mut Buffer, _state: &StatusState) {
        let mut text = Text::default();
        if let Some(spoiler) = &self.spoiler {
            text.lines.push(Line::styled(
                format!("CW: {}", spoiler),
                Style::default().fg(Color::Yellow),
            ));
        }
        text.lines.extend(Text::raw(self.text.clone()).lines);

        Paragraph::new(text).wrap(Wrap { trim: true }).render(area, buf);
    }

    fn height(&self, width: u16) -> u16 {
        self.calculate_height(width)
    }
}
