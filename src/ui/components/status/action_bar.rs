use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::types::{ActionBarProps, StatusComponent, StatusState};

pub struct StatusActionBar {
    replies: u64,
    reblogs: u64,
    favourites: u64,
    reblogged: bool,
    favourited: bool,
}

impl StatusActionBar {
    pub fn new(props: &ActionBarProps) -> Self {
        let status = &props.status;
        Self {
            replies: status.replies_count,
            reblogs: status.reblogs_count,
            favourites: status.favourites_count,
            reblogged: status.reblogged,
            favourited: status.favourited,
        }
    }

    fn get_stats(&self) -> Line<'static> {
        let divider = Style::default().fg(Color::DarkGray);
        let count = Style::default().fg(Color::White);

        Line::from(vec![
            Span::styled("↩ ", Style::default()),
            Span::styled(self.replies.to_string(), count),
            Span::styled(" · ", divider),
            Span::styled(
                "🔁 ",
                if self.reblogged {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                },
            ),
            Span::styled(self.reblogs.to_string(), count),
            Span::styled(" · ", divider),
            Span::styled(if self.favourited { "★ " } else { "☆ " }, Style::default().fg(Color::Yellow)),
            Span::styled(self.favourites.to_string(), count),
        ])
    }
}

impl StatusComponent for StatusActionBar {
    fn render(&self, area: Rect, buf: &mut Buffer, _state: &StatusState) {
        self.get_stats().render(area, buf);
    }

    fn height(&self, _width: u16) -> u16 {
        1
    }
}
