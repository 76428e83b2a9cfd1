use sitefix::config::{SiteConfig, CONFIG_FILE_NAME, DEFAULT_PAGES};
use sitefix::SitefixError;
use std::{error::Error, fs, path::PathBuf};
use tempfile::tempdir;
use validator::Validate;

#[test]
fn test_default_config_lists_site_files() {
    let config = SiteConfig::default();
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.pages, DEFAULT_PAGES.to_vec());
    assert_eq!(config.stylesheet, "css/i18n.css");
    assert_eq!(config.components_script, "js/components.js");
    assert!(config.validate().is_ok());
}

#[test]
fn test_paths_resolve_against_root() {
    let config = SiteConfig {
        root: PathBuf::from("/srv/site"),
        ..Default::default()
    };
    let pages = config.page_paths();
    assert_eq!(pages.len(), 5);
    assert_eq!(pages[1], PathBuf::from("/srv/site").join("about.html"));
    assert_eq!(
        config.stylesheet_path(),
        PathBuf::from("/srv/site").join("css/i18n.css")
    );
    assert_eq!(
        config.components_script_path(),
        PathBuf::from("/srv/site").join("js/components.js")
    );
}

#[test]
fn test_from_yaml_partial_keeps_defaults() {
    let config = SiteConfig::from_yaml("pages:\n  - home.html\n").unwrap();
    assert_eq!(config.pages, vec!["home.html".to_string()]);
    assert_eq!(config.stylesheet, "css/i18n.css");
}

#[test]
fn test_from_yaml_empty_is_default() {
    assert_eq!(SiteConfig::from_yaml("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn test_from_yaml_invalid() {
    let err = SiteConfig::from_yaml("pages: [unclosed").unwrap_err();
    assert!(matches!(err, SitefixError::YamlError(_)));
}

#[test]
fn test_validation_rejects_empty_page_list() {
    let config = SiteConfig {
        pages: vec![],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_blank_file_names() {
    let config = SiteConfig {
        pages: vec!["index.html".to_string(), " ".to_string()],
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = SiteConfig {
        stylesheet: String::new(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_load_without_config_file_uses_defaults() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    let config = SiteConfig::load(Some(temp.path()), None)?;
    assert_eq!(config.root, temp.path());
    assert_eq!(config.pages.len(), 5);
    Ok(())
}

#[test]
fn test_load_reads_config_from_root() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "root: /elsewhere\nstylesheet: styles/site.css\n",
    )?;
    let config = SiteConfig::load(Some(temp.path()), None)?;
    // The explicit root wins over the one in the file.
    assert_eq!(config.root, temp.path());
    assert_eq!(config.stylesheet, "styles/site.css");
    Ok(())
}

#[test]
fn test_load_explicit_config_path() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    let path = temp.path().join("custom.yaml");
    fs::write(&path, "root: site\ncomponents_script: scripts/nav.js\n")?;
    let config = SiteConfig::load(None, Some(&path))?;
    assert_eq!(config.root, PathBuf::from("site"));
    assert_eq!(config.components_script, "scripts/nav.js");
    Ok(())
}

#[test]
fn test_load_missing_explicit_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("missing.yaml");
    let err = SiteConfig::load(None, Some(&path)).unwrap_err();
    assert!(matches!(err, SitefixError::ConfigNotFound(p) if p == path));
}

#[test]
fn test_load_rejects_invalid_config() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join(CONFIG_FILE_NAME), "pages: []\n")?;
    let err = SiteConfig::load(Some(temp.path()), None).unwrap_err();
    assert!(matches!(err, SitefixError::ValidationError(_)));
    Ok(())
}

#[test]
fn test_json_schema_describes_fields() {
    let schema = SiteConfig::json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = value["properties"].as_object().unwrap();
    assert!(properties.contains_key("root"));
    assert!(properties.contains_key("pages"));
    assert!(properties.contains_key("stylesheet"));
    assert!(properties.contains_key("components_script"));
}
