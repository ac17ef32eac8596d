use yidian_types::{Rect, WordCandidate};

/// A text insertion position produced by hit-testing: a run index and a
/// char offset within that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub run: usize,
    pub offset: usize,
}

/// Text hit-testing interface over the visible page content.
///
/// Offsets are char indices. `range_rect` returns the bounding box of the
/// half-open span `[start, end)` in viewport coordinates.
pub trait HitTester {
    fn caret_from_point(&self, x: f64, y: f64) -> Option<Caret>;
    fn run_text(&self, run: usize) -> Option<&str>;
    fn range_rect(&self, run: usize, start: usize, end: usize) -> Option<Rect>;
}

/// Word membership: ASCII letters only. Digits, punctuation, and non-Latin
/// scripts (including the translation target, Chinese) are boundaries.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Resolve the word under `(x, y)`, or None when the point hits no text,
/// sits on a non-word character, or the hit snapped to a span the point is
/// not actually inside.
pub fn resolve_word_at<T: HitTester>(page: &T, x: f64, y: f64) -> Option<WordCandidate> {
    let caret = page.caret_from_point(x, y)?;
    let text = page.run_text(caret.run)?;
    let chars: Vec<char> = text.chars().collect();
    if caret.offset > chars.len() {
        return None;
    }

    // Expand left and right from the hit offset, within this run only.
    let mut start = caret.offset;
    let mut end = caret.offset;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    // Hit landed between two non-word characters, e.g. on whitespace.
    if start == end {
        return None;
    }

    let anchor = page.range_rect(caret.run, start, end)?;

    // Caret hit-testing snaps to the nearest character; only accept spans
    // the pointer is actually over.
    if !anchor.contains(x, y) {
        tracing::trace!(x, y, "pointer outside resolved span, dropping");
        return None;
    }

    Some(WordCandidate {
        text: chars[start..end].iter().collect(),
        anchor,
    })
}
