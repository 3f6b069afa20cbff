use glam::Vec3;

// Shared tuning constants for the sensing core and the radar overlay.

// Sensing defaults
pub const DEFAULT_MAX_DISTANCE: f32 = 8.0; // meters covered by the outer radar ring
pub const DEFAULT_RADAR_RADIUS: f32 = 100.0; // display units of the outer radar ring
pub const DEFAULT_NUMBER_OF_POINTS: usize = 10;
pub const DEFAULT_TARGET_HEIGHT: f32 = 0.5; // fixed spawn height for every target
pub const DEFAULT_VOLUME_EXTENT: f32 = 20.0; // width and depth of the default sensing area

// Upper edge of each tier band as a fraction of the full range (inclusive)
pub const TIER_FRACTIONS: [f32; 4] = [0.25, 0.50, 0.75, 1.0];

// Tier palette: Near, Mid, Far, Beyond
pub const TIER_COLORS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],     // white
    [0.0, 1.0, 0.0],     // green
    [1.0, 0.92, 0.016], // yellow
    [1.0, 0.0, 0.0],     // red
];

// Outline box placed over each person
pub const OUTLINE_OFFSET: [f32; 3] = [0.0, 1.0, 0.0];
pub const OUTLINE_SCALE: [f32; 3] = [1.0, 2.0, 1.0];

// Radar panel layout (screen pixels, origin top-left)
pub const RADAR_MARGIN_LEFT: f32 = 10.0;
pub const RADAR_PANEL_SIZE: f32 = 220.0;
pub const RADAR_PANEL_BOTTOM_OFFSET: f32 = 230.0; // panel top sits this far above the screen bottom
pub const RADAR_RING_THICKNESS: f32 = 2.0;
pub const RADAR_RING_SEGMENTS: usize = 360;
pub const RADAR_CROSS_THICKNESS: f32 = 2.0;
pub const RADAR_DOT_SIZE: f32 = 10.0;

#[inline]
pub fn outline_offset_vec3() -> Vec3 {
    Vec3::from(OUTLINE_OFFSET)
}

#[inline]
pub fn outline_scale_vec3() -> Vec3 {
    Vec3::from(OUTLINE_SCALE)
}
