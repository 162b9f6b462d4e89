use crate::ui::App;
use crate::ui::components::status::StatusWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    let status_line = app.update_status();
    let view = app.view();

    if view.card().is_some() {
        f.render_widget(StatusWidget::new(&view, true), chunks[0]);
    } else {
        f.render_widget(
            Paragraph::new("No status loaded").style(Style::default().fg(Color::DarkGray)),
            chunks[0],
        );
    }

    f.render_widget(Paragraph::new(status_line), chunks[1]);
}
