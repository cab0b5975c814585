// Markdown cleanup for digest post text
use regex::Regex;

lazy_static::lazy_static! {
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex");
    static ref PAREN_RE: Regex = Regex::new(r"\([^)]*\)").expect("valid paren regex");
    static ref URL_RE: Regex = Regex::new(r"https?://\S+").expect("valid url regex");
    static ref URL_TAIL_RE: Regex = Regex::new(r"//[^\s:)]+\)").expect("valid url tail regex");
}

/// `[text](url)` -> `text`
pub fn strip_links(text: &str) -> String {
    LINK_RE.replace_all(text, "$1").into_owned()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove links, bold/italic markers and non-breaking spaces, then collapse whitespace
pub fn clean_text(text: &str) -> String {
    let text = strip_links(text);
    let text = text.replace("**", "").replace('*', "").replace('\u{a0}', " ");
    collapse_whitespace(&text)
}

/// Value after the label colon of a `**Label:** value` line, with links,
/// parentheticals and stray URL fragments removed
pub fn field_value(line: &str) -> String {
    let line = strip_links(line);

    let value = match line.rsplit_once(":**") {
        Some((_, value)) => value,
        None => line.rsplit_once(':').map_or(line.as_str(), |(_, value)| value),
    };

    let value = value.trim().replace("**", "").replace('*', "");
    let value = PAREN_RE.replace_all(&value, "");
    let value = URL_RE.replace_all(value.trim(), "");
    let value = URL_TAIL_RE.replace_all(value.trim(), "");
    collapse_whitespace(&value)
}
