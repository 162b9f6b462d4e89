use std::{
    cell::RefCell,
    io::{self, Write},
    time::Duration,
};

use anyhow::Result;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, Terminal};

use crate::config::ViewerConfig;
use crate::model::Status;
use crate::ui::components::status::{
    render_status,
    types::{LinkTarget, StatusView},
    RenderContext, StatusHandlers,
};
use crate::ui::draw;
use crate::ui::navigation::{ClickEvent, Navigator};

/// Records every path it is asked to open instead of leaving the viewer.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: RefCell<Vec<String>>,
}

impl HistoryNavigator {
    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.borrow().is_empty()
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, path: &str) {
        log::info!("Navigating to {}", path);
        self.history.borrow_mut().push(path.to_string());
    }
}

pub struct App {
    pub status: Option<Status>,
    pub config: ViewerConfig,
    pub standalone: bool,
    pub muted: bool,
    pub status_line: String,
    pub navigator: HistoryNavigator,
}

impl App {
    pub fn new(status: Option<Status>, config: ViewerConfig) -> Self {
        Self {
            status,
            config,
            standalone: false,
            muted: false,
            status_line: String::new(),
            navigator: HistoryNavigator::default(),
        }
    }

    pub fn render_context(&self) -> RenderContext {
        let handlers = StatusHandlers::default()
            .on_reply(|status| log::info!("Reply to status {}", status.id))
            .on_favourite(|status| log::info!("Favourite status {}", status.id))
            .on_reblog(|status| log::info!("Reblog status {}", status.id))
            .on_open_media(|media, index| log::info!("Open media {} of {}", index + 1, media.len()))
            .on_open_video(|media, time| log::info!("Open video {} at {}s", media.id, time));

        RenderContext {
            standalone: self.standalone,
            muted: self.muted,
            handlers,
            ..RenderContext::from_config(&self.config)
        }
    }

    pub fn view(&self) -> StatusView {
        render_status(self.status.as_ref(), &self.render_context())
    }

    pub fn handle_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('s') => {
                self.standalone = !self.standalone;
                return;
            }
            KeyCode::Char('m') => {
                self.muted = !self.muted;
                return;
            }
            _ => {}
        }

        let view = self.view();
        let Some(card) = view.card() else {
            self.status_line = "Nothing to show".to_string();
            return;
        };

        match key {
            KeyCode::Char('v') | KeyCode::Enter => {
                card.content
                    .on_click
                    .dispatch(&mut ClickEvent::primary(), &self.navigator);
                self.status_line = self.navigator.last().unwrap_or_default();
            }
            KeyCode::Char('a') => match &card.author.link {
                LinkTarget::Internal { on_click } => {
                    on_click.dispatch(&mut ClickEvent::primary(), &self.navigator);
                    self.status_line = self.navigator.last().unwrap_or_default();
                }
                LinkTarget::External { href, .. } => {
                    self.status_line = format!("Opens {} in a new tab", href);
                }
            },
            KeyCode::Char('b') => match view.banners().first() {
                Some(banner) => {
                    banner
                        .link
                        .on_click
                        .dispatch(&mut ClickEvent::primary(), &self.navigator);
                    self.status_line = self.navigator.last().unwrap_or_default();
                }
                None => self.status_line = "Not a boost".to_string(),
            },
            KeyCode::Char('r') | KeyCode::Char('f') => {
                let Some(bar) = &card.action_bar else {
                    self.status_line = "No actions on a permalink page".to_string();
                    return;
                };
                let handler = if key == KeyCode::Char('r') {
                    &bar.handlers.on_reply
                } else {
                    &bar.handlers.on_favourite
                };
                if let Some(handler) = handler {
                    (handler.0)(&bar.status);
                }
            }
            _ => {}
        }
    }

    pub async fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        self.cleanup(&mut terminal)?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|f| draw(f, self))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('q') {
                        return Ok(());
                    }
                    self.handle_input(key.code);
                }
            }
        }
    }

    fn cleanup<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    pub fn update_status(&self) -> String {
        let mode = match (self.standalone, self.muted) {
            (true, true) => "permalink, muted",
            (true, false) => "permalink",
            (false, true) => "timeline, muted",
            (false, false) => "timeline",
        };
        let help = "q quit · v open · a author · b booster · r reply · f fav · s/m toggle";
        if self.status_line.is_empty() {
            format!("[{}] {}", mode, help)
        } else {
            format!("[{}] {} · {}", mode, self.status_line, help)
        }
    }
}
