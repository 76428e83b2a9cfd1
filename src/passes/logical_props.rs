//! Rewrites physical-direction CSS (`left`, `right`, `text-align: left`, ...)
//! into logical properties and drops the stylesheet's RTL section, which the
//! logical properties make redundant.

use crate::{
    config::SiteConfig,
    pass::{Job, Pass},
    rule::{Rule, RuleSet},
    Result,
};

const BANNER: &str = "/* ============================================";

pub struct LogicalPropsPass {
    pages: RuleSet,
    stylesheet: RuleSet,
}

impl LogicalPropsPass {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pages: page_rules()?,
            stylesheet: stylesheet_rules()?,
        })
    }

    pub fn page_rules(&self) -> &RuleSet {
        &self.pages
    }

    pub fn stylesheet_rules(&self) -> &RuleSet {
        &self.stylesheet
    }
}

/// Inline `<style>` blocks of the HTML pages. The paired `left`/`right` rule
/// must run before the bare `left: 0;` rule or the pair is never seen.
fn page_rules() -> Result<RuleSet> {
    Ok(RuleSet::new(
        "pages",
        vec![
            Rule::regex("inset-inline", r"left:\s*0;\s*\n\s*right:\s*0;", "inset-inline: 0;")?,
            Rule::regex("left-20", r"left:\s*20%;", "inset-inline-start: 20%;")?,
            Rule::regex("right-20", r"right:\s*20%;", "inset-inline-end: 20%;")?,
            Rule::regex("right-auto", r"right:\s*auto;", "inset-inline-end: auto;")?,
            Rule::regex("left-50", r"left:\s*50%;", "inset-inline-start: 50%;")?,
            Rule::regex("left-40px", r"left:\s*40px;", "inset-inline-start: 40px;")?,
            Rule::regex("left-0", r"left:\s*0;", "inset-inline-start: 0;")?,
            Rule::regex("border-left", r"border-left:", "border-inline-start:")?,
            Rule::regex("text-align-left", r"text-align:\s*left;", "text-align: start;")?,
            Rule::regex("text-align-right", r"text-align:\s*right;", "text-align: end;")?,
        ],
    ))
}

fn stylesheet_rules() -> Result<RuleSet> {
    let rtl_section = format!(
        r"{banner}\s*RTL \(Right-to-Left\) SUPPORT\s*============================================ \*/.*?{banner}\s*LANGUAGE-SPECIFIC TYPOGRAPHY",
        banner = regex::escape(BANNER),
    );
    Ok(RuleSet::new(
        "stylesheet",
        vec![
            Rule::regex("left-0", r"left:\s*0;", "inset-inline-start: 0;")?,
            Rule::regex("margin-right-16px", r"margin-right:\s*16px;", "margin-inline-end: 16px;")?,
            Rule::regex("margin-right-8px", r"margin-right:\s*8px;", "margin-inline-end: 8px;")?,
            Rule::regex_dotall(
                "rtl-section",
                &rtl_section,
                format!("{BANNER}\n   LANGUAGE-SPECIFIC TYPOGRAPHY"),
            )?,
        ],
    ))
}

impl Pass for LogicalPropsPass {
    fn name(&self) -> &'static str {
        "logical"
    }

    fn description(&self) -> &'static str {
        "Rewrite physical-direction CSS into logical properties"
    }

    fn completion_message(&self) -> &'static str {
        "Replacement complete."
    }

    fn plan<'a>(&'a self, config: &SiteConfig) -> Vec<Job<'a>> {
        let mut jobs: Vec<Job<'a>> = config
            .page_paths()
            .into_iter()
            .map(|path| Job {
                path,
                rules: &self.pages,
            })
            .collect();
        jobs.push(Job {
            path: config.stylesheet_path(),
            rules: &self.stylesheet,
        });
        jobs
    }
}
