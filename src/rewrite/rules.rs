//! Rewrite rules
//!
//! A [`RewriteRule`] pairs a [`Matcher`] with a [`Replacement`]. Rules are
//! plain text-to-text transformations: no tokenizing, no word boundaries.
//! A rule that finds nothing to match leaves the text untouched and borrows
//! it back to the caller.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Surface idiom for reading the key register
pub const KEY_REGISTER_IDIOM: &str = "KEY[0]";

/// Host-side read of the key register
pub const KEY_READ_CALL: &str = "readKey()";

/// Single-word conditional continuation
pub const ELIF_KEYWORD: &str = "elif";

/// Two-word host form of [`ELIF_KEYWORD`]
pub const ELSE_IF: &str = "else if";

/// `DISPLAY` declared with a literal digit count
pub const DISPLAY_DECLARATION_PATTERN: &str = r"const DISPLAY = \d+;";

/// `DISPLAY` sized from the runtime library's digit count
pub const DISPLAY_DECLARATION: &str = "const DISPLAY = Array(NUM_DISPLAY_DIGITS + 1);";

/// What a rule looks for
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact substring, matched anywhere (including inside identifiers)
    Literal(&'static str),
    /// Regular expression over the whole text
    Pattern(Regex),
}

/// What a match is replaced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted verbatim, `$` included
    Literal(&'static str),
    /// Expanded against the match's capture groups (`$1`, `${name}`).
    /// Behaves like [`Replacement::Literal`] for literal matchers.
    Template(&'static str),
}

impl Replacement {
    fn text(self) -> &'static str {
        match self {
            Replacement::Literal(text) | Replacement::Template(text) => text,
        }
    }
}

/// How many matches a rule rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrences {
    All,
    First,
}

impl Occurrences {
    /// Limit in the form `Regex::replacen` expects (0 = unlimited)
    fn limit(self) -> usize {
        match self {
            Occurrences::All => 0,
            Occurrences::First => 1,
        }
    }
}

/// A single text-to-text transformation
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub replacement: Replacement,
    pub occurrences: Occurrences,
}

impl RewriteRule {
    /// Replace every occurrence of `needle` with `replacement`
    pub fn literal(name: &'static str, needle: &'static str, replacement: &'static str) -> Self {
        debug_assert!(!needle.is_empty(), "literal rule '{name}' has an empty needle");
        RewriteRule {
            name,
            matcher: Matcher::Literal(needle),
            replacement: Replacement::Literal(replacement),
            occurrences: Occurrences::All,
        }
    }

    /// Replace every match of `pattern` with `replacement`
    pub fn pattern(name: &'static str, pattern: Regex, replacement: Replacement) -> Self {
        RewriteRule {
            name,
            matcher: Matcher::Pattern(pattern),
            replacement,
            occurrences: Occurrences::All,
        }
    }

    /// Restrict the rule to its first match
    pub fn first_only(mut self) -> Self {
        self.occurrences = Occurrences::First;
        self
    }

    /// Number of matches [`RewriteRule::apply`] would rewrite in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        let found = match &self.matcher {
            Matcher::Literal(needle) => text.matches(needle).count(),
            Matcher::Pattern(regex) => regex.find_iter(text).count(),
        };
        match self.occurrences {
            Occurrences::All => found,
            Occurrences::First => found.min(1),
        }
    }

    /// Apply the rule. Returns the input borrowed when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Literal(needle) => {
                if !text.contains(needle) {
                    return Cow::Borrowed(text);
                }
                let replacement = self.replacement.text();
                match self.occurrences {
                    Occurrences::All => Cow::Owned(text.replace(needle, replacement)),
                    Occurrences::First => Cow::Owned(text.replacen(needle, replacement, 1)),
                }
            }
            Matcher::Pattern(regex) => {
                let limit = self.occurrences.limit();
                match self.replacement {
                    Replacement::Literal(replacement) => {
                        regex.replacen(text, limit, NoExpand(replacement))
                    }
                    Replacement::Template(template) => regex.replacen(text, limit, template),
                }
            }
        }
    }
}

fn display_declaration_regex() -> &'static Regex {
    static DISPLAY_DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();
    DISPLAY_DECLARATION_REGEX.get_or_init(|| {
        Regex::new(DISPLAY_DECLARATION_PATTERN).expect("DISPLAY declaration pattern is valid")
    })
}

/// The stu-to-host rules, in application order.
///
/// The key-register rule runs first so the `KEY[0]` form is gone before any
/// later rule sees the text. The `DISPLAY` rule runs last.
pub fn standard_rules() -> Vec<RewriteRule> {
    vec![
        RewriteRule::literal("key-register", KEY_REGISTER_IDIOM, KEY_READ_CALL),
        RewriteRule::literal("elif", ELIF_KEYWORD, ELSE_IF),
        RewriteRule::pattern(
            "display-declaration",
            display_declaration_regex().clone(),
            Replacement::Literal(DISPLAY_DECLARATION),
        ),
    ]
}
