use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ViewerConfig;
use crate::model::{MediaAttachment, Status, StatusId};
use crate::ui::navigation::ClickAction;
use crate::ui::text::{Catalog, HtmlEmojiFilter, TextFilter, Translator};
use crate::ui::timestamp::{Clock, SystemClock};

/// Reblogs nest at most this deep; anything below renders as a plain status.
pub const MAX_REBLOG_DEPTH: u8 = 1;

pub struct Callback<F: ?Sized>(pub Arc<F>);

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

pub type StatusCallback = Callback<dyn Fn(&Status) + Send + Sync>;
pub type OpenMediaCallback = Callback<dyn Fn(&[MediaAttachment], usize) + Send + Sync>;
pub type OpenVideoCallback = Callback<dyn Fn(&MediaAttachment, f64) + Send + Sync>;

/// Everything the action bar and media widgets may call back into.
#[derive(Debug, Clone, Default)]
pub struct StatusHandlers {
    pub on_reply: Option<StatusCallback>,
    pub on_favourite: Option<StatusCallback>,
    pub on_reblog: Option<StatusCallback>,
    pub on_delete: Option<StatusCallback>,
    pub on_block: Option<StatusCallback>,
    pub on_open_media: Option<OpenMediaCallback>,
    pub on_open_video: Option<OpenVideoCallback>,
}

impl StatusHandlers {
    pub fn on_reply(mut self, f: impl Fn(&Status) + Send + Sync + 'static) -> Self {
        self.on_reply = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_favourite(mut self, f: impl Fn(&Status) + Send + Sync + 'static) -> Self {
        self.on_favourite = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_reblog(mut self, f: impl Fn(&Status) + Send + Sync + 'static) -> Self {
        self.on_reblog = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&Status) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_block(mut self, f: impl Fn(&Status) + Send + Sync + 'static) -> Self {
        self.on_block = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_open_media(
        mut self,
        f: impl Fn(&[MediaAttachment], usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_open_media = Some(Callback(Arc::new(f)));
        self
    }

    pub fn on_open_video(mut self, f: impl Fn(&MediaAttachment, f64) + Send + Sync + 'static) -> Self {
        self.on_open_video = Some(Callback(Arc::new(f)));
        self
    }
}

#[derive(Clone)]
pub struct RenderContext {
    pub standalone: bool,
    pub muted: bool,
    pub expand_media: bool,
    pub square_media: bool,
    pub autoplay_gif: bool,
    pub wrapped: bool,
    pub handlers: StatusHandlers,
    pub text: Arc<dyn TextFilter>,
    pub messages: Arc<dyn Translator>,
    pub clock: Arc<dyn Clock>,
    pub(crate) depth: u8,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            standalone: false,
            muted: false,
            expand_media: false,
            square_media: false,
            autoplay_gif: true,
            wrapped: false,
            handlers: StatusHandlers::default(),
            text: Arc::new(HtmlEmojiFilter),
            messages: Arc::new(Catalog::default()),
            clock: Arc::new(SystemClock),
            depth: 0,
        }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("standalone", &self.standalone)
            .field("muted", &self.muted)
            .field("expand_media", &self.expand_media)
            .field("square_media", &self.square_media)
            .field("autoplay_gif", &self.autoplay_gif)
            .field("wrapped", &self.wrapped)
            .field("handlers", &self.handlers)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl RenderContext {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            autoplay_gif: config.autoplay_gif,
            expand_media: config.expand_media,
            square_media: config.square_media,
            messages: Arc::new(Catalog::new(config.messages.clone())),
            ..Self::default()
        }
    }

    pub(crate) fn for_reblogged(&self) -> Self {
        Self {
            wrapped: true,
            depth: self.depth + 1,
            ..self.clone()
        }
    }
}

/// Output of a render pass.
#[derive(Debug, Clone)]
pub enum StatusView {
    Empty,
    Reblog {
        banner: RebloggedBy,
        inner: Box<StatusView>,
    },
    Status(Box<StatusCard>),
}

impl StatusView {
    /// The innermost rendered status, if any.
    pub fn card(&self) -> Option<&StatusCard> {
        match self {
            StatusView::Empty => None,
            StatusView::Reblog { inner, .. } => inner.card(),
            StatusView::Status(card) => Some(card),
        }
    }

    pub fn banners(&self) -> Vec<&RebloggedBy> {
        match self {
            StatusView::Reblog { banner, inner } => {
                let mut banners = vec![banner];
                banners.extend(inner.banners());
                banners
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RebloggedBy {
    pub icon: &'static str,
    pub message_id: &'static str,
    pub before: String,
    pub link: BannerLink,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerLink {
    pub href: String,
    pub class: &'static str,
    pub on_click: ClickAction,
    /// Escaped and emojified; safe to embed as markup.
    pub name_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Plain link that leaves the app.
    External {
        href: String,
        class: &'static str,
        target: &'static str,
    },
    /// Link handled by the in-app router. Carries no href.
    Internal { on_click: ClickAction },
}

#[derive(Debug, Clone)]
pub struct StatusCard {
    pub id: StatusId,
    pub class: &'static str,
    pub wrapped: bool,
    pub standalone: bool,
    pub time: TimeLink,
    pub author: AuthorBlock,
    pub content: ContentProps,
    pub media: Media,
    pub action_bar: Option<ActionBarProps>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeLink {
    pub href: Option<String>,
    pub target: &'static str,
    pub rel: &'static str,
    pub created_at: DateTime<Utc>,
    pub relative: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorBlock {
    pub link: LinkTarget,
    pub avatar: AvatarProps,
    pub display_name: DisplayNameProps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarProps {
    pub src: String,
    pub static_src: String,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNameProps {
    pub display_name_html: String,
    pub acct: String,
}

#[derive(Debug, Clone)]
pub struct ContentProps {
    pub status: Status,
    pub on_click: ClickAction,
}

#[derive(Debug, Clone)]
pub enum Media {
    None,
    /// Media present but hidden because some of it can't be shown.
    Suppressed,
    Video(VideoProps),
    Gallery(GalleryProps),
}

#[derive(Debug, Clone)]
pub struct VideoProps {
    pub media: MediaAttachment,
    pub sensitive: bool,
    pub on_open_video: Option<OpenVideoCallback>,
}

#[derive(Debug, Clone)]
pub struct GalleryProps {
    pub media: Vec<MediaAttachment>,
    pub sensitive: bool,
    pub height: u16,
    pub on_open_media: Option<OpenMediaCallback>,
    pub autoplay_gif: bool,
    pub expand_media: bool,
    pub square_media: bool,
}

#[derive(Debug, Clone)]
pub struct ActionBarProps {
    pub status: Status,
    pub handlers: StatusHandlers,
}

pub struct StatusState {
    pub selected: bool,
}

/// A piece of the terminal rendering of a status.
pub trait StatusComponent {
    fn render(&self, area: Rect, buf: &mut Buffer, state: &StatusState);
    fn height(&self, width: u16) -> u16;
}
