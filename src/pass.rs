use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::rule::RuleSet;

/// One file and the rules to run over it.
#[derive(Debug, Clone)]
pub struct Job<'a> {
    pub path: PathBuf,
    pub rules: &'a RuleSet,
}

/// A rewrite over a fixed set of site files. Each pass decides which files it
/// touches and which rule set applies to each; the runner does the I/O.
pub trait Pass {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Printed once every file of the pass has been written.
    fn completion_message(&self) -> &'static str;

    /// Files to rewrite, in the order they are processed.
    fn plan<'a>(&'a self, config: &SiteConfig) -> Vec<Job<'a>>;
}
