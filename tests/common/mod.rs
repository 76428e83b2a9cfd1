#![allow(dead_code)]

use std::{
    error::Error,
    fs::{create_dir_all, write},
    path::Path,
};

pub const PAGES: [&str; 5] = [
    "index.html",
    "about.html",
    "impact.html",
    "contact.html",
    "transparency.html",
];

pub const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <style>
        .overlay {
            position: fixed;
            left: 0;
            right: 0;
        }

        .quote {
            border-left: 4px solid #333;
            text-align: left;
        }

        /* Floating Navbar */
        .navbar {
            position: sticky;
            left: 50%;
        }
    </style>
</head>
<body>
    <nav class="navbar">
        <div class="logo">SEVO&reg;</div>
        <div class="nav-links">
            <a href="index.html">Home</a>
            <a href="about.html">About</a>
            <a href="index.html#donate" class="btn">Donate</a>
        </div>
    </nav>
</body>
</html>
"##;

pub const COMPONENTS_JS: &str = r#"document.addEventListener('DOMContentLoaded', () => {
    const navs = document.querySelectorAll('.navbar .nav-links');
    const headers = document.querySelectorAll('.static-header .nav-links');
    mountLanguageSwitcher(navs, headers);
});
"#;

pub fn banner(title: &str) -> String {
    format!("/* {}\n   {}\n   {} */\n", "=".repeat(44), title, "=".repeat(44))
}

pub fn stylesheet() -> String {
    format!(
        ".lang-menu {{\n    left: 0;\n    margin-right: 16px;\n}}\n\n{}[dir=\"rtl\"] .lang-menu {{\n    right: 0;\n    margin-left: 8px;\n}}\n\n{}body {{ font-family: sans-serif; }}\n",
        banner("RTL (Right-to-Left) SUPPORT"),
        banner("LANGUAGE-SPECIFIC TYPOGRAPHY"),
    )
}

/// Lays out a complete site with every file both passes expect.
pub fn write_site(root: &Path) -> Result<(), Box<dyn Error>> {
    for page in PAGES {
        write(root.join(page), PAGE)?;
    }
    create_dir_all(root.join("css"))?;
    write(root.join("css").join("i18n.css"), stylesheet())?;
    create_dir_all(root.join("js"))?;
    write(root.join("js").join("components.js"), COMPONENTS_JS)?;
    Ok(())
}
