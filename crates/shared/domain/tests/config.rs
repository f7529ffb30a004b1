use serde_json::json;
use skalable_domain::config::{AppConfig, LoggingConfig, PageConfig, RenderConfig};
use skalable_domain::constants::{LOGO_ALT, LOGO_SRC, ROOT_ELEMENT_ID};

#[test]
fn defaults_match_the_fixed_page() {
    let page = PageConfig::default();
    assert_eq!(page.root_id, ROOT_ELEMENT_ID);
    assert_eq!(page.logo.alt, "Skalable Logo");
    assert_eq!(page.logo.alt, LOGO_ALT);
    assert_eq!(page.logo.src, LOGO_SRC);
    assert!(page.logo.src.starts_with("https://"));
    assert!(page.logo.src.ends_with(".png"));

    assert_eq!(RenderConfig::default().output, std::path::PathBuf::from("dist/index.html"));

    let logging = LoggingConfig::default();
    assert_eq!(logging.filter, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn partial_config_keeps_defaults() {
    let raw = json!({
        "page": { "root_id": "app" },
        "logging": { "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.page.root_id, "app");
    assert_eq!(cfg.page.logo.alt, LOGO_ALT);
    assert!(cfg.logging.json);
    assert_eq!(cfg.render, RenderConfig::default());
}

#[test]
fn deref_mut_copies_on_write() {
    let original = AppConfig::default();
    let mut edited = original.clone();
    edited.page.title = "Preview".to_owned();

    assert_eq!(original.page.title, "Skalable");
    assert_eq!(edited.page.title, "Preview");
}
