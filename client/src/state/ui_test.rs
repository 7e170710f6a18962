use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}
