use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::model::Status;
use crate::ui::navigation::ClickAction;

use super::types::{BannerLink, RebloggedBy, RenderContext, StatusComponent, StatusState};

pub const REBLOGGED_BY_ID: &str = "status.reblogged_by";
pub const REBLOGGED_BY_DEFAULT: &str = "{name} boosted";

const BANNER_ICON: &str = "retweet";
const BANNER_LINK_CLASS: &str = "status__display-name muted";

/// "X boosted" line shown above a reblogged status. `status` is the
/// wrapper, so the link points at whoever reblogged it.
pub fn reblogged_by(status: &Status, ctx: &RenderContext) -> RebloggedBy {
    let account = &status.account;
    let template = ctx.messages.message(REBLOGGED_BY_ID, REBLOGGED_BY_DEFAULT);
    let (before, after) = template.split_at_placeholder("name");

    RebloggedBy {
        icon: BANNER_ICON,
        message_id: REBLOGGED_BY_ID,
        before,
        link: BannerLink {
            href: account.url.clone(),
            class: BANNER_LINK_CLASS,
            on_click: ClickAction::OpenAccount(account.id.clone()),
            name_html: ctx.text.safe_html(account.name_for_banner()),
        },
        after,
    }
}

/// Terminal rendering of the banner.
pub struct RebloggedByLine<'a> {
    banner: &'a RebloggedBy,
}

impl<'a> RebloggedByLine<'a> {
    pub fn new(banner: &'a RebloggedBy) -> Self {
        Self { banner }
    }

    fn line(&self) -> Line<'static> {
        let name = html_escape::decode_html_entities(&self.banner.link.name_html).into_owned();
        let muted = Style::default().fg(Color::DarkGray);
        Line::from(vec![
            Span::styled("🔁 ", muted),
            Span::styled(self.banner.before.clone(), muted),
            Span::styled(name, muted.add_modifier(Modifier::BOLD)),
            Span::styled(self.banner.after.clone(), muted),
        ])
    }
}

impl StatusComponent for RebloggedByLine<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, _state: &StatusState) {
        self.line().render(area, buf);
    }

    fn height(&self, _width: u16) -> u16 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, AccountId, StatusId};
    use crate::ui::text::Catalog;
    use chrono::Utc;
    use std::{collections::HashMap, sync::Arc};

    fn wrapper(display_name: &str) -> Status {
        Status {
            id: StatusId::from("7"),
            reblog: None,
            account: Account {
                id: AccountId::from("5"),
                username: "carol".to_string(),
                acct: "carol".to_string(),
                display_name: display_name.to_string(),
                url: "https://example.social/@carol".to_string(),
                avatar: String::new(),
                avatar_static: String::new(),
            },
            media_attachments: Vec::new(),
            pixiv_cards: Vec::new(),
            sensitive: false,
            created_at: Utc::now(),
            url: None,
            content: String::new(),
            spoiler_text: String::new(),
            reblogs_count: 0,
            favourites_count: 0,
            replies_count: 0,
            reblogged: false,
            favourited: false,
        }
    }

    #[test]
    fn test_banner_uses_display_name_when_present() {
        let banner = reblogged_by(&wrapper("Carol & co"), &RenderContext::default());
        assert_eq!(banner.link.name_html, "Carol &amp; co");
        assert_eq!(banner.link.class, "status__display-name muted");
        assert_eq!(banner.message_id, "status.reblogged_by");
    }

    #[test]
    fn test_banner_uses_translated_template() {
        let ctx = RenderContext {
            messages: Arc::new(Catalog::new(HashMap::from([(
                REBLOGGED_BY_ID.to_string(),
                "Geteilt von {name}".to_string(),
            )]))),
            ..RenderContext::default()
        };
        let banner = reblogged_by(&wrapper(""), &ctx);
        assert_eq!(banner.before, "Geteilt von ");
        assert_eq!(banner.link.name_html, "carol");
        assert_eq!(banner.after, "");
    }
}
