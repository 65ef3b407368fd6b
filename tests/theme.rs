//! Theme loading tests

use wage_timer::theme::{
    from_file, Color, MotifAnchor, Theme, BUILTIN_THEMES, DEFAULT_THEME_ID,
};

#[test]
fn test_color_from_hex_rgb() {
    let color = Color::from_hex("#FFC0CB").unwrap();
    assert_eq!(color, Color::rgb(0xFF, 0xC0, 0xCB));
}

#[test]
fn test_color_from_hex_rgba() {
    let color = Color::from_hex("#FF69B480").unwrap();
    assert_eq!((color.r, color.g, color.b, color.a), (0xFF, 0x69, 0xB4, 0x80));
}

#[test]
fn test_color_from_hex_without_hash() {
    assert_eq!(
        Color::from_hex("FFFF00").unwrap(),
        Color::rgb(0xFF, 0xFF, 0x00)
    );
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("#FFF").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn test_color_to_argb_u32() {
    assert_eq!(Color::rgb(0xFF, 0xC0, 0xCB).to_argb_u32(), 0xFFFFC0CB);
}

#[test]
fn test_all_builtin_themes_parse() {
    for builtin in BUILTIN_THEMES {
        let theme = Theme::from_yaml(builtin.yaml);
        assert!(
            theme.is_ok(),
            "builtin theme '{}' failed: {:?}",
            builtin.id,
            theme.err()
        );
    }
}

#[test]
fn test_default_theme_is_builtin() {
    assert!(BUILTIN_THEMES.iter().any(|t| t.id == DEFAULT_THEME_ID));
}

#[test]
fn test_decorated_theme_colors() {
    let theme = Theme::from_builtin("decorated").unwrap();
    assert_eq!(theme.background, Color::rgb(0xFF, 0xC0, 0xCB));
    assert_eq!(theme.foreground, Color::rgb(0xFF, 0xFF, 0xFF));
    assert_eq!(theme.motifs.len(), 2);

    let hearts = &theme.motifs[0];
    assert_eq!(hearts.anchor, MotifAnchor::TopLeft);
    assert_eq!(hearts.color, Color::rgb(0xFF, 0x69, 0xB4));
    assert_eq!((hearts.count, hearts.size, hearts.spacing), (5, 6, 25));

    let stars = &theme.motifs[1];
    assert_eq!(stars.anchor, MotifAnchor::BottomRight);
    assert_eq!(stars.color, Color::rgb(0xFF, 0xFF, 0x00));
    assert_eq!((stars.offset_x, stars.offset_y), (10, 20));
}

#[test]
fn test_default_matches_decorated_builtin() {
    assert_eq!(Theme::default(), Theme::from_builtin("decorated").unwrap());
}

#[test]
fn test_plain_theme_has_no_motifs() {
    let theme = Theme::from_builtin("plain").unwrap();
    assert!(theme.motifs.is_empty());
    assert_eq!(theme.background, Color::rgb(0x1E, 0x1E, 0x1E));
}

#[test]
fn test_unknown_builtin_is_error() {
    let err = Theme::from_builtin("neon").unwrap_err();
    assert!(err.contains("neon"));
}

#[test]
fn test_missing_error_color_falls_back() {
    let yaml = r##"
version: 1
name: "Minimal"
background: "#000000"
foreground: "#FFFFFF"
"##;
    let theme = Theme::from_yaml(yaml).unwrap();
    assert_eq!(theme.error, Color::rgb(0xB0, 0x00, 0x20));
    assert!(theme.motifs.is_empty());
}

#[test]
fn test_bad_motif_color_is_error() {
    let yaml = r##"
version: 1
name: "Broken"
background: "#000000"
foreground: "#FFFFFF"
motifs:
  - anchor: top-left
    color: "nope"
    count: 1
    size: 4
    spacing: 10
"##;
    assert!(Theme::from_yaml(yaml).is_err());
}

#[test]
fn test_theme_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mine.yaml");
    std::fs::write(
        &path,
        r##"
version: 1
name: "Mine"
background: "#102030"
foreground: "#F0F0F0"
motifs:
  - anchor: bottom-right
    color: "#00FF00"
    count: 3
    size: 4
    spacing: 12
    offset_x: 5
    offset_y: 5
"##,
    )
    .unwrap();

    let theme = from_file(&path).unwrap();
    assert_eq!(theme.name, "Mine");
    assert_eq!(theme.motifs[0].anchor, MotifAnchor::BottomRight);
    assert_eq!(theme.motifs[0].count, 3);
}

#[test]
fn test_theme_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = from_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.starts_with("Failed to read theme file"));
}
