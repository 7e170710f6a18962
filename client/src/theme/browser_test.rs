#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_defaults_to_light_in_non_hydrate_tests() {
    assert_eq!(load(), Theme::Light);
}

#[test]
fn toggle_flips_theme_value() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}
