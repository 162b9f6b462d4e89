use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::model::Status;
use crate::ui::navigation::ClickAction;
use crate::ui::timestamp::relative_time;

use action_bar::StatusActionBar;
use attachments::build_media;
use content::StatusContent;
use header::StatusHeader;
use link::resolve_author_link;
use media::StatusMedia;
use reblog::{reblogged_by, RebloggedByLine};
use types::{
    ActionBarProps, AuthorBlock, AvatarProps, ContentProps, DisplayNameProps, StatusCard,
    StatusComponent, TimeLink,
};

pub use types::{RenderContext, StatusHandlers, StatusState, StatusView, MAX_REBLOG_DEPTH};

pub mod action_bar;
pub mod attachments;
pub mod content;
pub mod header;
pub mod link;
pub mod media;
pub mod reblog;
pub mod types;

const AVATAR_SIZE: u16 = 48;

/// Renders one status, or an empty view when there is none.
pub fn render_status(status: Option<&Status>, ctx: &RenderContext) -> StatusView {
    let Some(status) = status else {
        return StatusView::Empty;
    };

    if let Some(original) = status.reblog.as_deref() {
        if ctx.depth < MAX_REBLOG_DEPTH {
            return StatusView::Reblog {
                banner: reblogged_by(status, ctx),
                inner: Box::new(render_status(Some(original), &ctx.for_reblogged())),
            };
        }
        log::warn!(
            "Status {} reblogs {} below the nesting limit, rendering it as is",
            status.id,
            original.id
        );
    }

    StatusView::Status(Box::new(render_card(status, ctx)))
}

fn render_card(status: &Status, ctx: &RenderContext) -> StatusCard {
    let account = &status.account;

    StatusCard {
        id: status.id.clone(),
        class: if ctx.muted { "status muted" } else { "status" },
        wrapped: ctx.wrapped,
        standalone: ctx.standalone,
        time: TimeLink {
            href: status.url.clone(),
            target: "_blank",
            rel: "noopener",
            created_at: status.created_at,
            relative: relative_time(status.created_at, ctx.clock.now()),
        },
        author: AuthorBlock {
            link: resolve_author_link(account, ctx.standalone),
            avatar: AvatarProps {
                src: account.avatar.clone(),
                static_src: account.avatar_static.clone(),
                size: AVATAR_SIZE,
            },
            display_name: DisplayNameProps {
                display_name_html: ctx.text.safe_html(&account.display_name),
                acct: account.acct.clone(),
            },
        },
        content: ContentProps {
            status: status.clone(),
            on_click: ClickAction::OpenStatus(status.navigation_target().clone()),
        },
        media: build_media(status, ctx),
        action_bar: (!ctx.standalone).then(|| ActionBarProps {
            status: status.clone(),
            handlers: ctx.handlers.clone(),
        }),
    }
}

/// Draws a rendered status into a terminal buffer.
pub struct StatusWidget<'a> {
    view: &'a StatusView,
    state: StatusState,
}

impl<'a> StatusWidget<'a> {
    pub fn new(view: &'a StatusView, selected: bool) -> Self {
        Self {
            view,
            state: StatusState { selected },
        }
    }

    pub fn height(&self, width: u16) -> u16 {
        Self::view_height(self.view, width)
    }

    fn view_height(view: &StatusView, width: u16) -> u16 {
        match view {
            StatusView::Empty => 0,
            StatusView::Reblog { banner, inner } => RebloggedByLine::new(banner)
                .height(width)
                .saturating_add(Self::view_height(inner, width)),
            StatusView::Status(card) => {
                let inner_width = width.saturating_sub(2);
                Self::card_components(card)
                    .iter()
                    .map(|component| component.height(inner_width))
                    .fold(2u16, u16::saturating_add)
            }
        }
    }

    fn card_components(card: &StatusCard) -> Vec<Box<dyn StatusComponent + '_>> {
        let mut components: Vec<Box<dyn StatusComponent + '_>> = vec![
            Box::new(StatusHeader::new(card)),
            Box::new(StatusContent::new(&card.content)),
            Box::new(StatusMedia::new(&card.media)),
        ];
        if let Some(action_bar) = &card.action_bar {
            components.push(Box::new(StatusActionBar::new(action_bar)));
        }
        components
    }

    fn render_view(&self, view: &StatusView, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        match view {
            StatusView::Empty => {}
            StatusView::Reblog { banner, inner } => {
                let line = RebloggedByLine::new(banner);
                let line_height = line.height(area.width).min(area.height);
                line.render(Rect { height: line_height, ..area }, buf, &self.state);
                let rest = Rect {
                    y: area.y + line_height,
                    height: area.height - line_height,
                    ..area
                };
                self.render_view(inner, rest, buf);
            }
            StatusView::Status(card) => self.render_card(card, area, buf),
        }
    }

    fn render_card(&self, card: &StatusCard, area: Rect, buf: &mut Buffer) {
        let border = if self.state.selected {
            Color::Blue
        } else if card.class == "status muted" {
            Color::DarkGray
        } else {
            Color::White
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut current_y = inner_area.y;
        let max_y = inner_area.y + inner_area.height;

        for component in Self::card_components(card) {
            let remaining_height = max_y.saturating_sub(current_y);
            if remaining_height == 0 {
                return;
            }
            let height = component.height(inner_area.width).min(remaining_height);
            if height == 0 {
                continue;
            }
            let component_area = Rect {
                x: inner_area.x,
                y: current_y,
                width: inner_area.width,
                height,
            };
            component.render(component_area, buf, &self.state);
            current_y += height;
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_view(self.view, area, buf);
    }
}
