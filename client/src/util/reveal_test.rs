use super::*;

#[test]
fn selector_lists_every_class() {
    assert_eq!(
        reveal_selector(),
        ".skill-category, .project-card, .service-card, .about-text, .about-image, .contact-info, .contact-form-wrapper"
    );
}

#[test]
fn observer_options_match_reveal_rules() {
    assert!((REVEAL_THRESHOLD - 0.1).abs() < f64::EPSILON);
    assert_eq!(REVEAL_ROOT_MARGIN, "0px 0px -50px 0px");
}

#[test]
fn install_is_noop_without_browser() {
    install();
}
