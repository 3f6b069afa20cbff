// Host-side tests for constants and their relationships.

use echo_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_positive() {
    assert!(DEFAULT_MAX_DISTANCE > 0.0);
    assert!(DEFAULT_RADAR_RADIUS > 0.0);
    assert!(DEFAULT_NUMBER_OF_POINTS > 0);
    assert!(DEFAULT_VOLUME_EXTENT >= 0.0);
    assert!(RADAR_RING_SEGMENTS > 0);
}

#[test]
fn tier_fractions_increase_to_full_range() {
    for pair in TIER_FRACTIONS.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(TIER_FRACTIONS[TIER_FRACTIONS.len() - 1], 1.0);
}

#[test]
fn tier_colors_are_normalized() {
    for color in TIER_COLORS {
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn radar_fits_inside_its_panel() {
    // A dot on the outer ring must stay on the panel
    assert!(DEFAULT_RADAR_RADIUS + RADAR_DOT_SIZE / 2.0 <= RADAR_PANEL_SIZE / 2.0);
    assert!(RADAR_PANEL_BOTTOM_OFFSET >= RADAR_PANEL_SIZE);
}

#[test]
fn outline_box_sits_on_the_floor() {
    let offset = outline_offset_vec3();
    let scale = outline_scale_vec3();
    // Box is lifted by half its height so its base meets the target
    assert_eq!(offset.y, scale.y / 2.0);
    assert_eq!(offset.x, 0.0);
    assert_eq!(offset.z, 0.0);
}
