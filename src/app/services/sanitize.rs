use std::collections::HashSet;

use ammonia::{Builder, UrlRelative};

/// Tags that may reach the preview. Everything else is stripped.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "ul", "ol", "li", "blockquote", "code", "pre",
    "em", "strong", "del", "img", "table", "thead", "tbody", "tr", "th", "td", "br", "hr",
    "input", "span",
];

/// Per-tag attribute allow-list.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title"]),
    ("img", &["src", "alt", "title"]),
    ("input", &["checked", "disabled"]),
    ("code", &["class"]),
    ("pre", &["class"]),
    ("span", &["class"]),
];

const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Tags removed together with their content.
const DROP_WITH_CONTENT: &[&str] = &["script", "style"];

/// HTML sanitizer with a fixed allow-list. The list is compiled in and there is
/// no way to widen it at runtime.
pub struct Sanitizer {
    cleaner: Builder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        let mut cleaner = Builder::empty();
        cleaner
            .add_tags(ALLOWED_TAGS.iter().copied())
            .url_schemes(URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(Some("noopener noreferrer"))
            .clean_content_tags(DROP_WITH_CONTENT.iter().copied().collect::<HashSet<_>>())
            .strip_comments(true);
        for (tag, attributes) in ALLOWED_ATTRIBUTES {
            cleaner.add_tag_attributes(*tag, attributes.iter().copied());
        }
        // Task-list checkboxes are the only form control that may appear
        cleaner.set_tag_attribute_value("input", "type", "checkbox");
        Self { cleaner }
    }

    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
