//! Window bounding and word counting
//!
//! The classifier never decides how much text it looks at; the host picks a
//! window and reports the word count of that window alongside it.

/// Runs of alphanumeric characters; `'`, `’` and `-` stay inside a word when
/// both neighbours are alphanumeric ("don't", "well-known").
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() {
            if !in_word {
                count += 1;
                in_word = true;
            }
        } else if in_word && is_joiner(c) && chars.peek().is_some_and(|n| n.is_alphanumeric()) {
            continue;
        } else {
            in_word = false;
        }
    }
    count
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// How the host cuts a document into classification windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPolicy {
    /// The whole document is one window
    Whole,
    /// One window per blank-line separated paragraph
    Paragraphs,
    /// `radius` characters on both sides of the character index `point`
    Radius { point: usize, radius: usize },
}

/// A slice of the document handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the document
    pub offset: usize,
    pub word_count: usize,
}

impl<'a> Window<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            offset,
            word_count: count_words(text),
        }
    }
}

impl WindowPolicy {
    /// Cut `text` into windows. Always yields at least one window.
    pub fn windows<'a>(&self, text: &'a str) -> Vec<Window<'a>> {
        match *self {
            WindowPolicy::Whole => vec![Window::new(text, 0)],
            WindowPolicy::Paragraphs => {
                let windows = paragraphs(text);
                if windows.is_empty() {
                    vec![Window::new("", 0)]
                } else {
                    windows
                }
            }
            WindowPolicy::Radius { point, radius } => vec![around(text, point, radius)],
        }
    }
}

fn paragraphs(text: &str) -> Vec<Window<'_>> {
    let mut windows = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                windows.push(Window::new(&text[s..end], s));
            }
        } else {
            if start.is_none() {
                start = Some(offset + (line.len() - line.trim_start().len()));
            }
            end = offset + line.trim_end().len();
        }
        offset += line.len();
    }

    if let Some(s) = start {
        windows.push(Window::new(&text[s..end], s));
    }
    windows
}

fn around(text: &str, point: usize, radius: usize) -> Window<'_> {
    let mut start = byte_offset(text, point.saturating_sub(radius));
    let mut end = byte_offset(text, point.saturating_add(radius));

    // Drop words cut in half at either edge.
    if starts_mid_word(text, start) {
        start = text[start..end]
            .char_indices()
            .find(|(_, c)| !c.is_alphanumeric())
            .map_or(end, |(i, _)| start + i);
    }
    if ends_mid_word(text, end) {
        end = text[start..end]
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_alphanumeric())
            .map_or(start, |(i, c)| start + i + c.len_utf8());
    }

    Window::new(&text[start..end], start)
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

fn starts_mid_word(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back();
    let after = text[at..].chars().next();
    matches!((before, after), (Some(b), Some(a)) if b.is_alphanumeric() && a.is_alphanumeric())
}

fn ends_mid_word(text: &str, at: usize) -> bool {
    starts_mid_word(text, at)
}
