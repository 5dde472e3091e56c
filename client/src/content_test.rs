use super::*;
use crate::util::scroll::SECTION_IDS;

#[test]
fn nav_items_cover_every_section_in_order() {
    let ids: Vec<_> = NAV_ITEMS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, SECTION_IDS);
}

#[test]
fn profile_photo_is_the_fallback_target() {
    assert_eq!(PROFILE.photo, "profile.jpg");
    assert_eq!(crate::util::image_fallback::initials(PROFILE.name), "ZA");
}

#[test]
fn every_card_list_is_populated() {
    assert!(!SKILLS.is_empty());
    assert!(!PROJECTS.is_empty());
    assert!(!SERVICES.is_empty());
}
