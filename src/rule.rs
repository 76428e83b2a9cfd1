//! Substitution rules and ordered rule sets.
//!
//! A [`Rule`] is a single pattern → replacement step. Rules know nothing about
//! files; they take text in and hand text back together with the number of
//! replacements they made, so callers can tell "no match" apart from "replaced".

use regex::{Captures, NoExpand, Regex, RegexBuilder};
use serde::Serialize;

use crate::Result;

/// Builds replacement text from the captures of a single match.
pub type Render = fn(&Captures<'_>) -> String;

#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Regex match replaced by literal text. `$` in the replacement is not expanded.
    Regex { pattern: Regex, replacement: String },
    /// Regex match replaced by the output of a render function.
    Template { pattern: Regex, render: Render },
    /// Plain substring replace-all.
    Literal { needle: String, replacement: String },
    /// Substring replace-all, skipped entirely when `unless` is already present.
    Guarded {
        needle: String,
        replacement: String,
        unless: String,
    },
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
}

impl Rule {
    pub fn regex(
        name: &'static str,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Ok(Rule {
            name,
            kind: RuleKind::Regex {
                pattern: Regex::new(pattern)?,
                replacement: replacement.into(),
            },
        })
    }

    /// Like [`Rule::regex`], with `.` matching newlines.
    pub fn regex_dotall(
        name: &'static str,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Ok(Rule {
            name,
            kind: RuleKind::Regex {
                pattern: RegexBuilder::new(pattern).dot_matches_new_line(true).build()?,
                replacement: replacement.into(),
            },
        })
    }

    /// Case-insensitive, dot-matches-newline pattern rendered through `render`.
    pub fn template(name: &'static str, pattern: &str, render: Render) -> Result<Self> {
        Ok(Rule {
            name,
            kind: RuleKind::Template {
                pattern: RegexBuilder::new(pattern)
                    .dot_matches_new_line(true)
                    .case_insensitive(true)
                    .build()?,
                render,
            },
        })
    }

    pub fn literal(
        name: &'static str,
        needle: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Rule {
            name,
            kind: RuleKind::Literal {
                needle: needle.into(),
                replacement: replacement.into(),
            },
        }
    }

    pub fn guarded(
        name: &'static str,
        needle: impl Into<String>,
        replacement: impl Into<String>,
        unless: impl Into<String>,
    ) -> Self {
        Rule {
            name,
            kind: RuleKind::Guarded {
                needle: needle.into(),
                replacement: replacement.into(),
                unless: unless.into(),
            },
        }
    }

    /// Apply the rule, returning the rewritten text and the replacement count.
    pub fn apply(&self, text: &str) -> (String, usize) {
        match &self.kind {
            RuleKind::Regex {
                pattern,
                replacement,
            } => {
                let count = pattern.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                let out = pattern.replace_all(text, NoExpand(replacement.as_str()));
                (out.into_owned(), count)
            }
            RuleKind::Template { pattern, render } => {
                let mut count = 0;
                let out = pattern.replace_all(text, |caps: &Captures<'_>| {
                    count += 1;
                    render(caps)
                });
                (out.into_owned(), count)
            }
            RuleKind::Literal {
                needle,
                replacement,
            } => replace_literal(text, needle, replacement),
            RuleKind::Guarded {
                needle,
                replacement,
                unless,
            } => {
                if text.contains(unless.as_str()) {
                    (text.to_string(), 0)
                } else {
                    replace_literal(text, needle, replacement)
                }
            }
        }
    }
}

fn replace_literal(text: &str, needle: &str, replacement: &str) -> (String, usize) {
    let count = text.matches(needle).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(needle, replacement), count)
}

/// How many times one rule fired while rewriting a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Result of folding a [`RuleSet`] over some text.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub text: String,
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

/// A named, ordered list of rules. Later rules see the output of earlier ones.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: &'static str,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> Rewrite {
        let mut current = text.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            tracing::trace!(rule_set = self.name, rule = rule.name, count, "applied rule");
            hits.push(RuleHit {
                rule: rule.name.to_string(),
                count,
            });
            current = next;
        }
        Rewrite {
            text: current,
            hits,
        }
    }
}
