//! Match enumeration over the original text.
//!
//! Offsets are byte offsets into the searched text, the same coordinates the
//! [`magic_string::MagicString`] edit operations take.

use regex::{Captures, Regex};

/// What [`crate::MagicStringExtra::replace`] looks for.
///
/// Rust regexes carry no `g` flag, so whether every occurrence is replaced is part of
/// the pattern: [`Pattern::regex`] acts on the first match, [`Pattern::global`] on all.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A literal string; only its first occurrence is matched.
    Fixed(String),
    /// A regular expression.
    Regex {
        /// The compiled expression.
        regex: Regex,
        /// Match every non-overlapping occurrence instead of the first one.
        global: bool,
    },
}

impl Pattern {
    /// A literal pattern. Regex metacharacters have no special meaning.
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::Fixed(text.into())
    }

    /// A regex pattern acting on its first match only.
    pub fn regex(regex: Regex) -> Self {
        Self::Regex {
            regex,
            global: false,
        }
    }

    /// A regex pattern acting on every non-overlapping match.
    pub fn global(regex: Regex) -> Self {
        Self::Regex {
            regex,
            global: true,
        }
    }

    /// Returns `true` if every match is acted on.
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Regex { global: true, .. })
    }

    /// Matches in `text`, in ascending order and never overlapping. At most one match
    /// unless the pattern is global. No match is an empty list.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        match self {
            Self::Fixed(needle) => text
                .find(needle.as_str())
                .map(|start| Match::literal(text, start, start + needle.len()))
                .into_iter()
                .collect(),
            Self::Regex {
                regex,
                global: false,
            } => regex.captures(text).map(Match::from).into_iter().collect(),
            Self::Regex {
                regex,
                global: true,
            } => regex.captures_iter(text).map(Match::from).collect(),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::fixed(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self::Fixed(text)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::regex(regex)
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Self::regex(regex.clone())
    }
}

/// One match in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    start: usize,
    end: usize,
    text: &'t str,
    groups: Vec<Option<&'t str>>,
}

impl<'t> Match<'t> {
    fn literal(haystack: &'t str, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: &haystack[start..end],
            groups: Vec::new(),
        }
    }

    /// Inclusive start byte offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end byte offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Number of capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group `index`, where `0` is the whole match. `None` for a group that did not
    /// participate in the match or does not exist.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        match index {
            0 => Some(self.text),
            _ => self.groups.get(index - 1).copied().flatten(),
        }
    }

    /// Capture groups `1..`, with `None` holes for unmatched groups.
    pub fn groups(&self) -> &[Option<&'t str>] {
        &self.groups
    }
}

impl<'t> From<Captures<'t>> for Match<'t> {
    fn from(captures: Captures<'t>) -> Self {
        let mut iter = captures.iter();
        // Group 0 always participates.
        let whole = iter.next().flatten();
        let (start, end, text) = whole.map_or((0, 0, ""), |m| (m.start(), m.end(), m.as_str()));
        Self {
            start,
            end,
            text,
            groups: iter.map(|group| group.map(|m| m.as_str())).collect(),
        }
    }
}
