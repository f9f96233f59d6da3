use serde::{Deserialize, Serialize};

use crate::captions::caption::Caption;

/// One word's display unit inside a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Display text.
    pub text: String,
    /// Active window start (clip-relative ms, inclusive).
    pub from_ms: f64,
    /// Active window end (clip-relative ms, exclusive).
    pub to_ms: f64,
}

impl Token {
    /// Return `true` when `absolute_time_ms` is inside `[from_ms, to_ms)`.
    pub fn is_active(&self, absolute_time_ms: f64) -> bool {
        self.from_ms <= absolute_time_ms && self.to_ms > absolute_time_ms
    }
}

/// A group of tokens displayed together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Tokens joined by single spaces.
    pub text: String,
    /// First token's `from_ms`.
    pub start_ms: f64,
    /// Last token's `to_ms` minus `start_ms`.
    pub duration_ms: f64,
    /// Time-ordered tokens.
    pub tokens: Vec<Token>,
}

impl Page {
    /// Exclusive end of the page window in clip-relative ms.
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Index of the first token active at `absolute_time_ms`, if any.
    pub fn active_token(&self, absolute_time_ms: f64) -> Option<usize> {
        self.tokens
            .iter()
            .position(|t| t.is_active(absolute_time_ms))
    }

    fn from_tokens(tokens: Vec<Token>) -> Self {
        let start_ms = tokens.first().map_or(0.0, |t| t.from_ms);
        let end_ms = tokens.last().map_or(start_ms, |t| t.to_ms);
        let text = tokens
            .iter()
            .map(|t| t.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            start_ms,
            duration_ms: end_ms - start_ms,
            tokens,
        }
    }
}

/// Group captions into pages.
///
/// Captions are walked in order; a new page starts whenever the gap between the previous
/// caption's end and the current caption's start exceeds `combine_within_ms`. Concatenating the
/// tokens of all returned pages reproduces `captions` exactly.
#[tracing::instrument(skip(captions), fields(captions = captions.len()))]
pub fn create_pages(captions: &[Caption], combine_within_ms: f64) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut prev_end_ms: Option<f64> = None;

    for caption in captions {
        if let Some(prev_end) = prev_end_ms
            && caption.start_ms - prev_end > combine_within_ms
            && !current.is_empty()
        {
            pages.push(Page::from_tokens(std::mem::take(&mut current)));
        }
        current.push(Token {
            text: caption.text.clone(),
            from_ms: caption.start_ms,
            to_ms: caption.end_ms,
        });
        prev_end_ms = Some(caption.end_ms);
    }

    if !current.is_empty() {
        pages.push(Page::from_tokens(current));
    }

    tracing::debug!(pages = pages.len(), "grouped caption pages");
    pages
}

#[cfg(test)]
#[path = "../../tests/unit/captions/pages.rs"]
mod tests;
