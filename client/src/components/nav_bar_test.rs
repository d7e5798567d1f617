use super::*;

#[test]
fn nav_link_class_marks_active_link() {
    assert_eq!(nav_link_class(true), "nav-bar__link nav-bar__link--active");
}

#[test]
fn nav_link_class_plain_when_inactive() {
    assert_eq!(nav_link_class(false), "nav-bar__link");
}
