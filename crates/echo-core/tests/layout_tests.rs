// Host-side tests for radar overlay geometry.

use echo_core::*;
use glam::Vec2;

const SCREEN_HEIGHT: f32 = 600.0;

fn layout() -> RadarLayout {
    RadarLayout::new(SCREEN_HEIGHT, DEFAULT_RADAR_RADIUS)
}

fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn panel_sits_in_bottom_left_corner() {
    let l = layout();
    assert_eq!(l.panel_origin(), Vec2::new(10.0, 370.0));
    assert_eq!(l.center(), Vec2::new(120.0, 480.0));

    let bg = l.background();
    assert_eq!(bg.min, [10.0, 370.0]);
    assert_eq!(bg.size, [220.0, 220.0]);
    assert_eq!(bg.color, [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn rings_sample_each_tier_radius() {
    let l = layout();
    let rings = l.rings();
    assert_eq!(rings.len(), 4 * RADAR_RING_SEGMENTS);

    for (ring_index, tier) in ProximityTier::ALL.iter().enumerate() {
        let radius = DEFAULT_RADAR_RADIUS * tier.ring_fraction();
        let ring = &rings[ring_index * RADAR_RING_SEGMENTS..(ring_index + 1) * RADAR_RING_SEGMENTS];
        // First sample is at angle zero, straight below the center
        assert_vec_close(ring[0].center(), l.center() + Vec2::new(0.0, radius));
        for q in ring {
            assert!(((q.center() - l.center()).length() - radius).abs() < 1e-2);
            assert_eq!(q.color, tier.color_rgba());
            assert_eq!(q.size, [RADAR_RING_THICKNESS, RADAR_RING_THICKNESS]);
        }
    }
}

#[test]
fn cross_runs_through_center() {
    let [vertical, horizontal] = layout().cross();
    assert_eq!(vertical.min, [120.0, 370.0]);
    assert_eq!(vertical.size, [2.0, 220.0]);
    assert_eq!(horizontal.min, [10.0, 480.0]);
    assert_eq!(horizontal.size, [220.0, 2.0]);
    assert_eq!(vertical.color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn dot_is_centered_on_projection() {
    let l = layout();
    let dot = l.dot(RadarCoordinate::new(0.0, -25.0), ProximityTier::Near);
    assert_vec_close(dot.center(), Vec2::new(120.0, 455.0));
    assert_eq!(dot.size, [RADAR_DOT_SIZE, RADAR_DOT_SIZE]);
    assert_eq!(dot.color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn compose_draws_only_visible_dots_last() {
    let l = layout();
    let projections = [
        RadarProjection::Visible {
            coordinate: RadarCoordinate::new(30.0, 40.0),
            tier: ProximityTier::Mid,
        },
        RadarProjection::Skipped,
    ];
    let quads = l.compose(projections.iter());
    assert_eq!(quads.len(), 1 + 4 * RADAR_RING_SEGMENTS + 2 + 1);
    assert_eq!(quads[0], l.background());
    let last = quads[quads.len() - 1];
    assert_vec_close(last.center(), Vec2::new(150.0, 520.0));
    assert_eq!(last.color, ProximityTier::Mid.color_rgba());
}

#[test]
fn quad_layout_matches_vertex_attributes() {
    // Instance attributes read min at 0, size at 8 and color at 16
    assert_eq!(std::mem::size_of::<Quad>(), 32);
    let q = Quad::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [0.5; 4]);
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&q));
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 0.5, 0.5, 0.5, 0.5]);
}
