pub mod cli;
pub mod config;
pub mod errors;
pub mod pass;
pub mod passes;
pub mod report;
pub mod rule;
pub mod runner;

pub use config::SiteConfig;
pub use errors::{Result, SitefixError};
pub use pass::{Job, Pass};
pub use rule::{Rule, RuleSet};
pub use runner::{FileReport, PassReport, Runner};
