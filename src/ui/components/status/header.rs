use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::types::{LinkTarget, StatusCard, StatusComponent, StatusState};

pub struct StatusHeader {
    display_name: String,
    acct: String,
    relative_time: String,
    opens_externally: bool,
}

impl StatusHeader {
    pub fn new(card: &StatusCard) -> Self {
        let display_name = &card.author.display_name;
        Self {
            display_name: html_escape::decode_html_entities(&display_name.display_name_html)
                .into_owned(),
            acct: display_name.acct.clone(),
            relative_time: card.time.relative.clone(),
            opens_externally: matches!(card.author.link, LinkTarget::External { .. }),
        }
    }

    fn build_header_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let divider = Style::default().fg(Color::DarkGray);

        let name = if self.display_name.is_empty() {
            self.acct.clone()
        } else {
            self.display_name.clone()
        };
        spans.push(Span::styled(name, Style::default().add_modifier(Modifier::BOLD)));
        if !self.acct.is_empty() {
            spans.push(Span::raw(format!(" @{}", self.acct)));
        }
        if self.opens_externally {
            spans.push(Span::styled(" ↗", divider));
        }

        spans.push(Span::styled(" · ", divider));
        spans.push(Span::raw(self.relative_time.clone()));

        spans
    }
}

impl StatusComponent for StatusHeader {
    fn render(&self, area: Rect, buf: &mut Buffer, _state: &StatusState) {
        Paragraph::new(Line::from(self.build_header_spans()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn height(&self, _width: u16) -> u16 {
        1
    }
}
