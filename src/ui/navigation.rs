use std::fmt;

use ratatui::crossterm::event::MouseButton;

use crate::model::{AccountId, StatusId};

/// Client-side router. Implementations perform the actual navigation;
/// this crate only ever hands them a path.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn push(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Status(StatusId),
    Account(AccountId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Status(id) => write!(f, "/statuses/{}", id),
            Route::Account(id) => write!(f, "/accounts/{}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: MouseButton,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(button: MouseButton) -> Self {
        Self {
            button,
            default_prevented: false,
        }
    }

    pub fn primary() -> Self {
        Self::new(MouseButton::Left)
    }

    pub fn is_primary(&self) -> bool {
        self.button == MouseButton::Left
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Click handler bound to an element at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    OpenStatus(StatusId),
    OpenAccount(AccountId),
}

impl ClickAction {
    pub fn dispatch(&self, event: &mut ClickEvent, navigator: &dyn Navigator) {
        match self {
            ClickAction::OpenStatus(id) => open_status(id, event, navigator),
            ClickAction::OpenAccount(id) => open_account(id, event, navigator),
        }
    }
}

fn open_status(id: &StatusId, event: &ClickEvent, navigator: &dyn Navigator) {
    if !event.is_primary() {
        return;
    }
    let route = Route::Status(id.clone()).to_string();
    log::debug!("Opening status {}", route);
    navigator.push(&route);
}

fn open_account(id: &AccountId, event: &mut ClickEvent, navigator: &dyn Navigator) {
    if !event.is_primary() {
        return;
    }
    event.prevent_default();
    let route = Route::Account(id.clone()).to_string();
    log::debug!("Opening account {}", route);
    navigator.push(&route);
}
