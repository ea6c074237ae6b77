use super::*;
use crate::menu::NavEntry;

#[test]
fn default_config_uses_builtin_menu_and_brand() {
    let config = SiteConfig::default();
    assert_eq!(config.brand, "Logo");
    assert_eq!(config.menu, default_menu());
    assert_eq!(config.animate_script, None);
}

#[test]
fn embedded_json_round_trips_through_validation() {
    let config = SiteConfig {
        brand: "Acme".to_owned(),
        menu: NavMenu::new(vec![NavEntry::leaf("Overview", "/overview")]),
        animate_script: Some("/static/auto-animate.js".to_owned()),
    };
    let parsed = SiteConfig::from_embedded_json(&config.to_embedded_json().expect("config encodes")).expect("embedded config parses");
    assert_eq!(parsed, config);
}

#[test]
fn embedded_json_escapes_script_terminators() {
    let config = SiteConfig {
        brand: "</script><b>".to_owned(),
        menu: NavMenu::default(),
        animate_script: None,
    };
    let raw = config.to_embedded_json().expect("config encodes");
    assert!(!raw.contains('<'));
    let parsed = SiteConfig::from_embedded_json(&raw).expect("escaped config parses");
    assert_eq!(parsed.brand, "</script><b>");
}

#[test]
fn from_embedded_json_rejects_invalid_menu() {
    let raw = r#"{"brand": "Acme", "menu": [{"label": "", "link": "/"}]}"#;
    let err = SiteConfig::from_embedded_json(raw).unwrap_err();
    assert!(matches!(err, MenuError::EmptyLabel { entry: 0 }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_embedded_is_none_outside_browser() {
    assert_eq!(read_embedded(), None);
}

#[test]
fn embedded_config_carries_encoded_payload() {
    let config = SiteConfig { brand: "<Acme>".to_owned(), ..SiteConfig::default() };
    let site = EmbeddedConfig::new(config.clone()).expect("config encodes");

    assert_eq!(site.config(), &config);
    assert_eq!(site.json(), config.to_embedded_json().expect("config encodes"));
    assert!(!site.json().contains('<'));
    assert_eq!(SiteConfig::from_embedded_json(site.json()).expect("payload parses"), config);
}

#[test]
fn encode_failure_is_reported_not_replaced() {
    let source = serde_json::from_str::<u8>("x").expect_err("not a number");
    let err = MenuError::Encode(source);
    assert!(err.to_string().starts_with("config encode failed:"));
    assert!(std::error::Error::source(&err).is_some());
}
