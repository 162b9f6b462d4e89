use std::collections::{HashMap, HashSet};

use ammonia::Builder as HtmlSanitizer;

/// Makes user supplied text safe to embed in rendered markup.
pub trait TextFilter: Send + Sync {
    fn escape(&self, text: &str) -> String;
    fn emojify(&self, text: &str) -> String;

    fn safe_html(&self, text: &str) -> String {
        self.emojify(&self.escape(text))
    }
}

const SHORTCODES: &[(&str, &str)] = &[
    (":heart:", "❤️"),
    (":smile:", "😄"),
    (":laughing:", "😆"),
    (":thumbsup:", "👍"),
    (":star:", "⭐"),
    (":sparkles:", "✨"),
    (":fire:", "🔥"),
    (":tada:", "🎉"),
    (":cat:", "🐱"),
    (":elephant:", "🐘"),
];

#[derive(Debug, Clone, Default)]
pub struct HtmlEmojiFilter;

impl TextFilter for HtmlEmojiFilter {
    fn escape(&self, text: &str) -> String {
        html_escape::encode_text(text).into_owned()
    }

    fn emojify(&self, text: &str) -> String {
        if !text.contains(':') {
            return text.to_string();
        }
        SHORTCODES
            .iter()
            .fold(text.to_string(), |acc, (code, emoji)| acc.replace(code, emoji))
    }
}

/// A localized message with `{placeholder}` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the template around `{name}`. Templates missing the
    /// placeholder keep their whole text before the slot.
    pub fn split_at_placeholder(&self, name: &str) -> (String, String) {
        let slot = format!("{{{}}}", name);
        match self.0.split_once(&slot) {
            Some((before, after)) => (before.to_string(), after.to_string()),
            None => (self.0.clone(), String::new()),
        }
    }
}

pub trait Translator: Send + Sync {
    fn message(&self, id: &str, default_message: &str) -> MessageTemplate;
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl Translator for Catalog {
    fn message(&self, id: &str, default_message: &str) -> MessageTemplate {
        let text = self
            .messages
            .get(id)
            .map(String::as_str)
            .unwrap_or(default_message);
        MessageTemplate::new(text)
    }
}

/// Flattens status HTML into plain text for the terminal.
///
/// Only `<p>` and `<br>` survive sanitizing, bare of attributes, so the
/// serialized output can be split on those exact tags.
pub fn plain_text(html: &str) -> String {
    let cleaned = HtmlSanitizer::empty()
        .tags(HashSet::from(["p", "br"]))
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(html)
        .to_string();

    let text = cleaned
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("<p>", "");

    html_escape::decode_html_entities(text.trim_end()).into_owned()
}
