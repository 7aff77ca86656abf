//! Text-level adaptation of stu source for the host runtime
//!
//! The [`Rewriter`] runs an ordered list of [`RewriteRule`]s over the
//! program text. There is no lexer and no validation: a rule that does not
//! match is a no-op, and the output of one rule is the input of the next.
//!
//! ```text
//! KEY[0]                 → readKey()
//! elif                   → else if
//! const DISPLAY = <n>;   → const DISPLAY = Array(NUM_DISPLAY_DIGITS + 1);
//! ```

pub mod rules;

use std::borrow::Cow;
use tracing::debug;

pub use rules::{Matcher, Occurrences, Replacement, RewriteRule};

/// How a single rule fared during a rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub matches: usize,
}

/// Ordered pipeline of rewrite rules
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<RewriteRule>,
}

impl Rewriter {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Rewriter { rules }
    }

    /// The stu-to-host rule set
    pub fn standard() -> Self {
        Rewriter::new(rules::standard_rules())
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Rewrite `source`, applying every rule in order
    pub fn rewrite(&self, source: &str) -> String {
        self.trace(source).0
    }

    /// Rewrite `source` and report how many matches each rule rewrote
    pub fn trace(&self, source: &str) -> (String, Vec<RuleOutcome>) {
        let mut text = source.to_owned();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let matches = rule.count_matches(&text);
            debug!(rule = rule.name, matches, "applied rewrite rule");
            outcomes.push(RuleOutcome {
                rule: rule.name,
                matches,
            });

            let rewritten = match rule.apply(&text) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            text = rewritten;
        }

        (text, outcomes)
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rewrite stu source with the standard rule set
pub fn rewrite(source: &str) -> String {
    Rewriter::standard().rewrite(source)
}
