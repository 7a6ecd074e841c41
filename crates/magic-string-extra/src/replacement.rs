//! Replacement text for a single match.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::Match;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\$|&|\d+)").expect("valid replacement token regex"));

/// How the text for each match is produced.
pub enum Replacement<'r> {
    /// A template. `$$` is a literal `$`, `$&` and `$0` are the whole match and `$N`
    /// is capture group `N` (empty when the group did not participate). A `$N` naming
    /// a group the pattern does not have, and any other `$`, is kept as written.
    Literal(Cow<'r, str>),
    /// Called once per match; its return value is used verbatim.
    Callback(Box<dyn Fn(&Match<'_>) -> String + 'r>),
}

impl<'r> Replacement<'r> {
    /// A template replacement.
    pub fn literal(template: impl Into<Cow<'r, str>>) -> Self {
        Self::Literal(template.into())
    }

    /// A callback replacement.
    pub fn callback(callback: impl Fn(&Match<'_>) -> String + 'r) -> Self {
        Self::Callback(Box::new(callback))
    }

    /// The text that replaces `m`.
    pub fn resolve(&self, m: &Match<'_>) -> String {
        match self {
            Self::Literal(template) => expand(template, m),
            Self::Callback(callback) => callback(m),
        }
    }
}

impl fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(template) => f.debug_tuple("Literal").field(template).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl<'r> From<&'r str> for Replacement<'r> {
    fn from(template: &'r str) -> Self {
        Self::Literal(Cow::Borrowed(template))
    }
}

impl<'r> From<&'r String> for Replacement<'r> {
    fn from(template: &'r String) -> Self {
        Self::Literal(Cow::Borrowed(template.as_str()))
    }
}

impl From<String> for Replacement<'_> {
    fn from(template: String) -> Self {
        Self::Literal(Cow::Owned(template))
    }
}

/// Substitute `$` tokens in `template` for match `m`.
fn expand(template: &str, m: &Match<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for captures in TOKEN.captures_iter(template) {
        let (Some(whole), Some(token)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match token.as_str() {
            "$" => out.push('$'),
            "&" => out.push_str(m.as_str()),
            digits => match digits.parse::<usize>() {
                Ok(index) if index <= m.group_count() => {
                    out.push_str(m.group(index).unwrap_or_default());
                }
                _ => out.push_str(whole.as_str()),
            },
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    fn first_match<'t>(pattern: &str, text: &'t str) -> Match<'t> {
        Pattern::regex(Regex::new(pattern).unwrap())
            .find_matches(text)
            .remove(0)
    }

    #[test]
    fn test_dollar_tokens() {
        let m = first_match(r"(\d)(\d)", "x12y");
        let resolve = |template: &str| Replacement::from(template).resolve(&m);
        assert_eq!(resolve("$$"), "$");
        assert_eq!(resolve("[$&]"), "[12]");
        assert_eq!(resolve("$0"), "12");
        assert_eq!(resolve("$2$1"), "21");
        assert_eq!(resolve("$3"), "$3");
        assert_eq!(resolve("$10"), "$10");
        assert_eq!(resolve("$$1"), "$1");
        assert_eq!(resolve("a$"), "a$");
        assert_eq!(resolve("$x"), "$x");
    }

    #[test]
    fn test_greedy_digit_run() {
        let m = first_match(r"(\d)", "7");
        assert_eq!(Replacement::from("xx$1$10").resolve(&m), "xx7$10");
        assert_eq!(Replacement::from("$01").resolve(&m), "7");
    }

    #[test]
    fn test_unmatched_group_renders_empty() {
        let m = first_match(r"(a)|(b)", "b");
        assert_eq!(Replacement::from("<$1|$2>").resolve(&m), "<|b>");
    }

    #[test]
    fn test_huge_group_number_is_literal() {
        let m = first_match(r"(a)", "a");
        let template = "$99999999999999999999999";
        assert_eq!(Replacement::from(template).resolve(&m), template);
    }

    #[test]
    fn test_callback_receives_match() {
        let m = first_match(r"(\w)(\w+)", "hello");
        let replacement = Replacement::callback(|m| {
            let head = m.group(1).unwrap_or_default().to_uppercase();
            format!("{head}{}", m.group(2).unwrap_or_default())
        });
        assert_eq!(replacement.resolve(&m), "Hello");
        assert_eq!(format!("{replacement:?}"), "Callback(..)");
    }
}
