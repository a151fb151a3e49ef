//! Text helpers for labels, paths and delimited identifiers.
//!
//! Lengths and limits count characters, not bytes.

use regex::Regex;

// Drops `<...>` spans; a `<` without a closing `>` is kept as text.
fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        output.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }

    output.push_str(rest);
    output
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn head(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn tail(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((index, _)) => &text[index..],
        None => text,
    }
}

/// Shortens `text` to at most `limit` characters plus `ending`, cutting at
/// the last space inside the limit. Markup tags are removed first and do
/// not count towards the limit. Text that already fits is returned
/// untouched; a cut without any space keeps the first `limit` characters.
pub fn truncate(text: &str, limit: usize, ending: &str) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }

    let plain = strip_tags(text);
    if char_len(&plain) <= limit {
        return plain;
    }

    let cut = head(&plain, limit);
    let cut = match cut.rfind(' ') {
        Some(space) => &cut[..space],
        None => cut,
    };

    format!("{}{}", cut, ending)
}

/// Elides the middle of `text` so the result is about `limit` characters,
/// `more` included. The head runs on to the end of the word it stops in.
/// When `more` alone does not fit, the first `limit` characters are kept.
pub fn cut(text: &str, limit: usize, more: &str) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }

    if char_len(more) >= limit {
        return head(text, limit).to_string();
    }

    let side = limit.saturating_sub(char_len(more)) / 2;
    let start = head(text, side).len();
    let extra = text[start..]
        .find(' ')
        .map(|offset| char_len(&text[start..start + offset]) + 1)
        .unwrap_or(0);

    format!(
        "{}{}{}",
        head(text, side + extra),
        more,
        tail(text, side.saturating_sub(extra))
    )
}

// Drops the last, possibly partial, word.
fn drop_last_word(text: &str) -> &str {
    match text.rfind(' ') {
        Some(space) => &text[..space],
        None => "",
    }
}

/// Cuts `text` to `limit` characters, drops the word the cut lands in and
/// appends ` (...)`.
pub fn trim_text(text: &str, limit: usize) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }

    format!("{} (...)", drop_last_word(head(text, limit)))
}

// `<...>` spans in order of appearance.
fn tags(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        found.push(&rest[open..open + close + 1]);
        rest = &rest[open + close + 1..];
    }

    found
}

/// [`trim_text`] for markup: a tag cut in half is dropped, `marker` is
/// appended and every tag left open is closed again.
///
/// ```
/// use recordkit::strings::trim_html_text;
///
/// let text = "<p>Some <b>bold words</b> here</p>";
/// assert_eq!(trim_html_text(text, 18, "..."), "<p>Some <b>bold...</b></p>");
/// ```
pub fn trim_html_text(text: &str, limit: usize, marker: &str) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }

    let mut cut = head(text, limit);
    if let Some(open) = cut.rfind('<') {
        if cut.rfind('>').map_or(true, |close| close < open) {
            cut = &cut[..open];
        }
    }

    let mut output = format!("{}{}", drop_last_word(cut), marker);

    let mut open_tags: Vec<&str> = Vec::new();
    for tag in tags(&output) {
        let inner = tag[1..tag.len() - 1].trim();
        if inner.starts_with('/') {
            open_tags.pop();
        } else if !inner.ends_with('/') {
            open_tags.push(inner.split(' ').next().unwrap_or(inner));
        }
    }

    let closing: String = open_tags
        .iter()
        .rev()
        .map(|name| format!("</{}>", name))
        .collect();
    output.push_str(&closing);
    output
}

/// Joins two strings with `delimiter`, leaving the delimiter out when
/// either side is empty.
pub fn join(first: &str, second: &str, delimiter: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (false, false) => format!("{}{}{}", first, delimiter, second),
        (false, true) => first.to_string(),
        _ => second.to_string(),
    }
}

/// Where [`pad`] puts the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
    /// Split between both sides, the extra character going right.
    Both,
}

fn repeat_to(fill: &str, count: usize) -> String {
    fill.chars().cycle().take(count).collect()
}

/// Pads `text` with repetitions of `fill` until it is `width` characters
/// wide. Text that is already wide enough, or an empty `fill`, leaves
/// `text` unchanged.
pub fn pad(text: &str, width: usize, fill: &str, side: Side) -> String {
    let length = char_len(text);
    if fill.is_empty() || width <= length {
        return text.to_string();
    }

    let missing = width - length;
    match side {
        Side::Left => format!("{}{}", repeat_to(fill, missing), text),
        Side::Right => format!("{}{}", text, repeat_to(fill, missing)),
        Side::Both => format!(
            "{}{}{}",
            repeat_to(fill, missing / 2),
            text,
            repeat_to(fill, missing - missing / 2)
        ),
    }
}

fn upper_words(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut boundary = true;

    for character in text.chars() {
        if boundary {
            output.extend(character.to_uppercase());
        } else {
            output.push(character);
        }
        boundary = character.is_whitespace();
    }

    output
}

fn join_words(text: &str, ucfirst: bool) -> String {
    let joined: String = upper_words(text).chars().filter(|c| *c != ' ').collect();
    if ucfirst {
        return joined;
    }

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => joined,
    }
}

/// `my-long-name` becomes `myLongName` (or `MyLongName` with `ucfirst`).
pub fn dehyphenate(name: &str, ucfirst: bool) -> String {
    join_words(&name.replace('-', " "), ucfirst)
}

/// `hello big world` becomes `helloBigWorld` (or `HelloBigWorld`).
pub fn camelize(name: &str, ucfirst: bool) -> String {
    join_words(name, ucfirst)
}

fn nth_delimiter(text: &str, delimiter: &str, count: usize) -> Option<usize> {
    if delimiter.is_empty() {
        return None;
    }
    text.match_indices(delimiter)
        .nth(count - 1)
        .map(|(index, _)| index)
}

fn nth_delimiter_from_end(text: &str, delimiter: &str, count: usize) -> Option<usize> {
    if delimiter.is_empty() {
        return None;
    }
    text.rmatch_indices(delimiter)
        .nth(count - 1)
        .map(|(index, _)| index)
}

/// The first `count` segments of `text`: `("a/b/c", "/", 2)` gives `a/b`.
/// `None` when `text` has fewer than `count` delimiters.
pub fn first_segments<'a>(text: &'a str, delimiter: &str, count: usize) -> Option<&'a str> {
    if count == 0 {
        return Some("");
    }
    nth_delimiter(text, delimiter, count).map(|index| &text[..index])
}

/// The last `count` segments: `("a/b/c", "/", 1)` gives `c`.
pub fn last_segments<'a>(text: &'a str, delimiter: &str, count: usize) -> Option<&'a str> {
    if count == 0 {
        return Some("");
    }
    nth_delimiter_from_end(text, delimiter, count).map(|index| &text[index + delimiter.len()..])
}

/// `text` without its first `count` segments: `("a/b/c", "/", 1)` gives `b/c`.
pub fn strip_first_segments<'a>(text: &'a str, delimiter: &str, count: usize) -> Option<&'a str> {
    if count == 0 {
        return Some(text);
    }
    nth_delimiter(text, delimiter, count).map(|index| &text[index + delimiter.len()..])
}

/// `text` without its last `count` segments: `("a/b.txt", ".", 1)` gives `a/b`.
pub fn strip_last_segments<'a>(text: &'a str, delimiter: &str, count: usize) -> Option<&'a str> {
    if count == 0 {
        return Some(text);
    }
    nth_delimiter_from_end(text, delimiter, count).map(|index| &text[..index])
}

pub fn split_get_first<'a>(text: &'a str, delimiter: &str, count: usize) -> Vec<&'a str> {
    text.splitn(count + 1, delimiter).take(count).collect()
}

pub fn split_get_last<'a>(text: &'a str, delimiter: &str, count: usize) -> Vec<&'a str> {
    let segments: Vec<&str> = text.split(delimiter).collect();
    let skip = segments.len().saturating_sub(count);
    segments[skip..].to_vec()
}

pub fn split_strip_first<'a>(text: &'a str, delimiter: &str, count: usize) -> Vec<&'a str> {
    text.split(delimiter).skip(count).collect()
}

pub fn split_strip_last<'a>(text: &'a str, delimiter: &str, count: usize) -> Vec<&'a str> {
    let mut segments: Vec<&str> = text.split(delimiter).collect();
    segments.truncate(segments.len().saturating_sub(count));
    segments
}

/// Removes every match of `pattern` from `source` and returns the first
/// capture group of the last match, or an empty string.
pub fn extract(source: &mut String, pattern: &Regex) -> String {
    let mut found = String::new();
    for captures in pattern.captures_iter(source) {
        found = captures
            .get(1)
            .map(|group| group.as_str().to_string())
            .unwrap_or_default();
    }

    let stripped = pattern.replace_all(source, "").into_owned();
    *source = stripped;
    found
}

/// Splits `source` at the first `delimiter` that follows non-empty text.
/// Returns the leading segment and the remainder, either of which may be
/// empty.
pub fn extract_segment(source: &str, delimiter: &Regex) -> (String, String) {
    let mut start = 0;

    for found in delimiter.find_iter(source) {
        if found.start() > start {
            return (
                source[start..found.start()].to_string(),
                source[found.end()..].to_string(),
            );
        }
        start = found.end();
    }

    (source[start..].to_string(), String::new())
}
