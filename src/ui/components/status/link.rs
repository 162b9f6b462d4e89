use crate::model::Account;
use crate::ui::navigation::ClickAction;

use super::types::LinkTarget;

pub const DISPLAY_NAME_CLASS: &str = "status__display-name";

/// Where the author's name and avatar lead. On a permalink page the link
/// opens the remote profile in a new tab; in a timeline it goes through
/// the router instead.
pub fn resolve_author_link(account: &Account, standalone: bool) -> LinkTarget {
    if standalone {
        LinkTarget::External {
            href: account.url.clone(),
            class: DISPLAY_NAME_CLASS,
            target: "_blank",
        }
    } else {
        LinkTarget::Internal {
            on_click: ClickAction::OpenAccount(account.id.clone()),
        }
    }
}
