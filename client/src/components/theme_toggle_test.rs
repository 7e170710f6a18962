use super::*;

#[test]
fn glyph_offers_sun_while_dark() {
    assert_eq!(glyph(Theme::Dark), "☀");
}

#[test]
fn glyph_offers_moon_while_light() {
    assert_eq!(glyph(Theme::Light), "☾");
}
