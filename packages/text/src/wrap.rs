//! Greedy fixed-width line wrapping
//!
//! Words are packed left to right in a single pass. A word that does not fit
//! either starts a new line, is hyphenated across the break (when the current
//! line is still short), or, if it is wider than a whole line, is chopped
//! into `max_len - 1` character fragments each ending in `-`.
//!
//! Widths are counted in Unicode scalar values. Every produced line is at
//! most `max_len` characters.

use crate::{Result, TextError, WrapOptions};

/// Wrap `text` into lines of at most `max_len` characters
///
/// # Errors
///
/// Returns `TextError::InvalidWidth` when `max_len < 2` and
/// `TextError::InvalidThreshold` for a negative or non-finite threshold.
pub fn create_wrapped_text(text: &str, max_len: usize, options: &WrapOptions) -> Result<Vec<String>> {
    if max_len < 2 {
        return Err(TextError::InvalidWidth(max_len));
    }
    let hyphen_limit = options.hyphen_threshold.limit(max_len)?;

    let mut packer = LinePacker::new(max_len, hyphen_limit);
    for word in options.delimiter.split(text) {
        packer.push_word(word);
    }
    let lines = packer.finish();

    tracing::debug!(max_len, lines = lines.len(), "wrapped text");
    Ok(lines)
}

/// [`create_wrapped_text`] with default options
///
/// # Errors
///
/// Returns `TextError::InvalidWidth` when `max_len < 2`.
pub fn wrap_text(text: &str, max_len: usize) -> Result<Vec<String>> {
    create_wrapped_text(text, max_len, &WrapOptions::default())
}

struct LinePacker {
    max_len: usize,
    hyphen_limit: f64,
    line: String,
    // chars in `line`; zero iff no line is open
    line_len: usize,
    lines: Vec<String>,
}

impl LinePacker {
    fn new(max_len: usize, hyphen_limit: f64) -> Self {
        Self {
            max_len,
            hyphen_limit,
            line: String::new(),
            line_len: 0,
            lines: Vec::new(),
        }
    }

    fn push_word(&mut self, word: &str) {
        let mut word = word;
        loop {
            let word_len = word.chars().count();

            if self.line_len == 0 && word_len <= self.max_len {
                self.open_line(word, word_len);
                return;
            }

            if self.line_len > 0 && self.line_len + 1 + word_len < self.max_len {
                self.line.push(' ');
                self.line.push_str(word);
                self.line_len += 1 + word_len;
                return;
            }

            if word_len > self.max_len {
                self.flush();
                let (head, tail) = split_chars(word, self.max_len - 1);
                self.lines.push(format!("{head}-"));
                word = tail;
                continue;
            }

            // A line is open here: an empty line accepts any word that fits
            let room = self.max_len.saturating_sub(self.line_len);
            #[allow(clippy::cast_precision_loss)]
            let short_line = (self.line_len as f64) < self.hyphen_limit;
            if short_line && room > 2 {
                // one char for the joining space, one for the hyphen
                let take = room - 2;
                let (head, tail) = split_chars(word, take);
                self.line.push(' ');
                self.line.push_str(head);
                self.line.push('-');
                self.flush();
                self.open_line(tail, word_len - take);
                return;
            }

            self.flush();
            self.open_line(word, word_len);
            return;
        }
    }

    fn open_line(&mut self, word: &str, word_len: usize) {
        self.line.push_str(word);
        self.line_len = word_len;
    }

    fn flush(&mut self) {
        if self.line_len > 0 {
            self.lines.push(std::mem::take(&mut self.line));
            self.line_len = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}

/// Split after `n` chars
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}
