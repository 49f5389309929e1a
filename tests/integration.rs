// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::content;
use iced_folio::i18n::fluent::I18n;
use iced_folio::lightbox::{KeyPress, Lightbox, Options, ScrollLock};
use tempfile::tempdir;

#[test]
fn test_browse_zoom_close_keeps_lock_paired() {
    let lock = ScrollLock::default();
    let mut viewer = Lightbox::with_lock(3, Options::default(), lock.clone());
    assert!(!lock.is_engaged());

    // 1. Open the first image: unzoomed, page scrolling suppressed
    viewer.open(0);
    assert_eq!(viewer.selected(), Some(0));
    assert!(!viewer.is_zoomed());
    assert!(lock.is_engaged());

    // 2. Page to the end; the extra press clamps at the last index
    assert!(viewer.handle_key(KeyPress::ArrowRight));
    assert!(viewer.handle_key(KeyPress::ArrowRight));
    assert!(viewer.handle_key(KeyPress::ArrowRight));
    assert_eq!(viewer.selected(), Some(2));
    assert!(viewer.at_last());
    assert!(lock.is_engaged());

    // 3. Zoom in, then leave with Escape
    assert!(viewer.handle_key(KeyPress::Space));
    assert!(viewer.is_zoomed());
    assert!(viewer.handle_key(KeyPress::Escape));
    assert_eq!(viewer.selected(), None);
    assert!(!lock.is_engaged());

    // 4. Keys are inert while closed
    assert!(!viewer.handle_key(KeyPress::ArrowRight));
    assert!(!lock.is_engaged());
}

#[test]
fn test_detail_options_ignore_paging_and_zoom() {
    let mut modal = Lightbox::new(1, Options::detail());
    modal.open(0);

    assert!(!modal.handle_key(KeyPress::ArrowRight));
    assert!(!modal.handle_key(KeyPress::Space));
    assert_eq!(modal.selected(), Some(0));
    assert!(!modal.is_zoomed());

    // Escape still closes
    assert!(modal.handle_key(KeyPress::Escape));
    assert!(!modal.is_open());
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("section-projects"), "Projets");
}

#[test]
fn test_content_file_replaces_embedded_profile() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let content_path = dir.path().join("portfolio.toml");

    std::fs::write(
        &content_path,
        r#"
[profile]
name = "Jane Doe"
title = "Systems Programmer"
summary = "I write firmware."

[[skill_groups]]
category = "Embedded"
skills = ["C", "Rust"]

[[gallery]]
source = "https://example.org/board.png"
alt_text = "A development board"
"#,
    )
    .expect("Failed to write content file");

    let loaded = content::load(Some(&content_path)).expect("Failed to load content from path");
    assert_eq!(loaded.profile.name, "Jane Doe");
    assert_eq!(loaded.skill_groups.len(), 1);
    assert_eq!(loaded.gallery.len(), 1);

    // Without a path the embedded defaults apply
    let embedded = content::load(None).expect("Embedded content should always load");
    assert_eq!(embedded.profile.name, "Alex Rivera");
    assert!(embedded.gallery.len() > 1);
}

#[test]
fn test_gallery_flags_flow_from_config() {
    let config = Config {
        gallery_navigation: Some(false),
        gallery_zoom: Some(false),
        gallery_captions: Some(true),
        ..Config::default()
    };

    let mut viewer = Lightbox::new(4, config.gallery_options());
    viewer.open(1);

    // Arrows and Space fall through to the page with navigation and zoom off
    assert!(!viewer.handle_key(KeyPress::ArrowLeft));
    assert!(!viewer.handle_key(KeyPress::Space));
    assert_eq!(viewer.selected(), Some(1));
    assert!(viewer.options().captions);
}
