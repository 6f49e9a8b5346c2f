//! Lexical pattern scanning.
//!
//! The scanner walks a document line by line and, for every rule in a fixed
//! ordered table, reports the leftmost literal occurrence of the rule's
//! trigger phrase. There is no regex, no case folding and no word-boundary
//! check: a phrase embedded in a longer word still matches.
//!
//! Columns are UTF-16 code unit offsets, which is what LSP positions use by
//! default.
//!
//! # Examples
//!
//! ```
//! use cclsp_core::scanner::{PatternScanner, Severity};
//!
//! let matches: Vec<_> = PatternScanner::default()
//!     .scan("I love Watching a Video and Coding Challenges")
//!     .collect();
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!((matches[0].start, matches[0].end), (7, 23));
//! assert_eq!(matches[0].severity, Severity::Information);
//! assert_eq!((matches[1].start, matches[1].end), (28, 45));
//! assert_eq!(matches[1].severity, Severity::Hint);
//! ```

/// Severity attached to a rule and to every match it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

/// A single lexical rule: a literal trigger phrase and what to report for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub phrase: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

/// Built-in rule table, in declaration order.
///
/// Declaration order is reporting order within a line.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        phrase: "Watching a Video",
        severity: Severity::Information,
        message: "It's much better to learn by doing! Try Coding Challenges instead.",
    },
    Rule {
        phrase: "Coding Challenges",
        severity: Severity::Hint,
        message: "This is the way!",
    },
];

/// One rule hit on one line.
///
/// `start..end` is a half-open column span in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub severity: Severity,
    pub message: &'static str,
}

/// Scans text against an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct PatternScanner {
    rules: &'static [Rule],
}

impl PatternScanner {
    /// Creates a scanner over a custom rule table.
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Returns the rule table this scanner applies.
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Lazily scans `text`.
    ///
    /// Matches come out line-ascending and, within a line, in rule order. Each
    /// rule reports at most once per line (its leftmost occurrence). Rules with
    /// an empty phrase never match.
    pub fn scan(self, text: &str) -> impl Iterator<Item = Match> + '_ {
        let rules = self.rules;
        lines(text).enumerate().flat_map(move |(line, content)| {
            rules
                .iter()
                .filter(|rule| !rule.phrase.is_empty())
                .filter_map(move |rule| {
                    let offset = content.find(rule.phrase)?;
                    let start = utf16_len(&content[..offset]);
                    Some(Match {
                        line,
                        start,
                        end: start + utf16_len(rule.phrase),
                        severity: rule.severity,
                        message: rule.message,
                    })
                })
        })
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

/// Scans `text` with the built-in rule table.
pub fn scan(text: &str) -> impl Iterator<Item = Match> + '_ {
    PatternScanner::default().scan(text)
}

/// Splits text on `\n`, `\r\n` and `\r`.
///
/// A single trailing terminator does not yield an extra empty line, so
/// `"a\n"` has one line and `""` has none.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\n', '\r']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") {
            2
        } else {
            1
        };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
