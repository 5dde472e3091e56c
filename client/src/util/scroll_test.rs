use super::*;

fn spans() -> Vec<SectionSpan> {
    vec![
        SectionSpan { id: "home".to_owned(), top: 0.0, height: 700.0 },
        SectionSpan { id: "about".to_owned(), top: 700.0, height: 600.0 },
        SectionSpan { id: "contact".to_owned(), top: 1300.0, height: 500.0 },
    ]
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_at_exact_lookahead_offset() {
    let spans = spans();
    assert_eq!(active_section(600.0, &spans), Some("about"));
    assert_eq!(active_section(1200.0, &spans), Some("contact"));
}

#[test]
fn active_section_inside_span() {
    let spans = spans();
    assert_eq!(active_section(100.0, &spans), Some("home"));
    assert_eq!(active_section(900.0, &spans), Some("about"));
}

#[test]
fn active_section_none_past_last_span() {
    let spans = spans();
    assert_eq!(active_section(5000.0, &spans), None);
    assert_eq!(active_section(0.0, &[]), None);
}

#[test]
fn active_section_prefers_later_overlap() {
    let spans = vec![
        SectionSpan { id: "a".to_owned(), top: 0.0, height: 1000.0 },
        SectionSpan { id: "b".to_owned(), top: 300.0, height: 200.0 },
    ];
    assert_eq!(active_section(250.0, &spans), Some("b"));
    assert_eq!(active_section(450.0, &spans), Some("a"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_skips_bare_hash() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
    assert_eq!(anchor_target("#about"), Some("about"));
}

#[test]
fn smooth_scroll_offset_subtracts_navbar() {
    assert!((smooth_scroll_offset(900.0, 70.0) - 830.0).abs() < f64::EPSILON);
}

#[test]
fn nav_href_prefixes_hash() {
    assert_eq!(nav_href("skills"), "#skills");
    assert_eq!(anchor_target(&nav_href("skills")), Some("skills"));
}

#[test]
fn dom_helpers_noop_without_browser() {
    assert!(section_spans().is_empty());
    assert!(!scroll_to_section("about"));
    assert!(scroll_y().abs() < f64::EPSILON);
}
