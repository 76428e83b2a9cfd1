use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    config::SiteConfig,
    errors::SitefixError,
    pass::Pass,
    rule::{RuleHit, RuleSet},
    Result,
};

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub changed: bool,
    pub hits: Vec<RuleHit>,
}

impl FileReport {
    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub pass: String,
    pub files: Vec<FileReport>,
}

impl PassReport {
    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(FileReport::total).sum()
    }

    pub fn changed_files(&self) -> usize {
        self.files.iter().filter(|f| f.changed).count()
    }
}

/// Line-ending style a file is written back with. Rules only ever see `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF anywhere in the file makes the whole file CRLF on write. Lone CRs
    /// are read as line breaks and come back as LF.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// Convert LF-only text to this style.
    pub fn apply(self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            LineEnding::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// Fold `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Runs passes against the files on disk, one file at a time.
#[derive(Debug, Default)]
pub struct Runner;

impl Runner {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite every file the pass plans, in order, overwriting each in place.
    /// The first read or write failure aborts the run; files already written
    /// keep their new contents.
    pub fn run(&self, pass: &dyn Pass, config: &SiteConfig) -> Result<PassReport> {
        tracing::info!(
            pass = pass.name(),
            description = pass.description(),
            root = %config.root.display(),
            "running pass"
        );

        let mut files = Vec::new();
        for job in pass.plan(config) {
            files.push(self.rewrite_file(&job.path, job.rules)?);
        }

        Ok(PassReport {
            pass: pass.name().to_string(),
            files,
        })
    }

    pub fn rewrite_file(&self, path: &Path, rules: &RuleSet) -> Result<FileReport> {
        let original = fs::read_to_string(path).map_err(|e| SitefixError::file(path, e))?;
        let ending = LineEnding::detect(&original);
        let rewrite = rules.apply(&normalize_newlines(&original));

        for hit in &rewrite.hits {
            tracing::debug!(
                file = %path.display(),
                rule = %hit.rule,
                count = hit.count,
                "rule result"
            );
        }

        // Written back unconditionally, even when nothing matched.
        let output = ending.apply(&rewrite.text);
        fs::write(path, &output).map_err(|e| SitefixError::file(path, e))?;

        let changed = output != original;
        if changed {
            tracing::info!(file = %path.display(), replacements = rewrite.total(), "rewrote file");
        } else {
            tracing::info!(file = %path.display(), "no rule matched");
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            changed,
            hits: rewrite.hits,
        })
    }
}
