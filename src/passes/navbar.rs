//! Splits the single-row `<nav>` of every page into brand, menu and actions
//! sections, adds the flex rules that lay those sections out, and points the
//! components script at the new actions container.

use regex::Captures;

use crate::{
    config::SiteConfig,
    pass::{Job, Pass},
    rule::{Rule, RuleSet},
    Result,
};

const NAV_PATTERN: &str = concat!(
    r#"(<nav[^>]*>\s*)"#,
    r#"(<div class="logo">.*?</div>)\s*"#,
    r#"<div class="nav-links">\s*"#,
    r#"(.*?)\s*"#,
    r#"(<a href="[^"]*#?donate.*?" class="btn"[^>]*>.*?</a>)\s*"#,
    r#"</div>\s*"#,
);

const CSS_ANCHOR: &str = "/* Floating Navbar */";

/// Present once the layout rules have been injected.
const CSS_MARKER: &str = ".navbar-brand {";

const NAVBAR_CSS: &str = concat!(
    "\n",
    "        .navbar-brand {\n",
    "            flex: 1;\n",
    "            display: flex;\n",
    "            justify-content: flex-start;\n",
    "        }\n",
    "\n",
    "        .navbar-menu {\n",
    "            flex: 2;\n",
    "            display: flex;\n",
    "            justify-content: center;\n",
    "        }\n",
    "\n",
    "        .navbar-actions {\n",
    "            flex: 1;\n",
    "            display: flex;\n",
    "            justify-content: flex-end;\n",
    "            align-items: center;\n",
    "            gap: 16px;\n",
    "        }\n",
    "        \n",
    "        @media (max-width: 768px) {\n",
    "            .navbar { padding: 0 24px; border-radius: 0; }\n",
    "            .navbar-menu, .navbar-actions, .static-header .nav-links { display: none; }\n",
    "            .navbar-brand { justify-content: flex-start; }\n",
    "        }\n",
    "    ",
);

/// Rebuilds the inside of a matched `<nav>`. The closing `</nav>` is not part
/// of the match and stays where it was.
pub fn render_nav(caps: &Captures<'_>) -> String {
    let group = |i| caps.get(i).map_or("", |m| m.as_str());
    format!(
        concat!(
            "{pre}\n",
            "            <div class=\"navbar-brand\">\n",
            "                {logo}\n",
            "            </div>\n",
            "            <div class=\"navbar-menu\">\n",
            "                <div class=\"nav-links\">\n",
            "{links}\n",
            "                </div>\n",
            "            </div>\n",
            "            <div class=\"navbar-actions\">\n",
            "                {donate}\n",
            "            </div>\n",
            "        ",
        ),
        pre = group(1),
        logo = group(2),
        links = group(3),
        donate = group(4),
    )
}

pub struct NavbarPass {
    pages: RuleSet,
    script: RuleSet,
}

impl NavbarPass {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pages: page_rules()?,
            script: script_rules(),
        })
    }

    pub fn page_rules(&self) -> &RuleSet {
        &self.pages
    }

    pub fn script_rules(&self) -> &RuleSet {
        &self.script
    }
}

fn page_rules() -> Result<RuleSet> {
    Ok(RuleSet::new(
        "pages",
        vec![
            Rule::template("nav-split", NAV_PATTERN, render_nav)?,
            Rule::guarded(
                "navbar-css",
                CSS_ANCHOR,
                format!("{NAVBAR_CSS}\n        {CSS_ANCHOR}"),
                CSS_MARKER,
            ),
        ],
    ))
}

fn script_rules() -> RuleSet {
    RuleSet::new(
        "components-script",
        vec![
            Rule::literal(
                "navbar-selector",
                "querySelectorAll('.navbar .nav-links')",
                "querySelectorAll('.navbar .navbar-actions')",
            ),
            Rule::literal(
                "static-header-selector",
                "querySelectorAll('.static-header .nav-links')",
                "querySelectorAll('.static-header .navbar-actions')",
            ),
        ],
    )
}

impl Pass for NavbarPass {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn description(&self) -> &'static str {
        "Restructure the navbar markup and patch components.js"
    }

    fn completion_message(&self) -> &'static str {
        "Navbar refactoring completed."
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
            path: config.components_script_path(),
            rules: &self.script,
        });
        jobs
    }
}
