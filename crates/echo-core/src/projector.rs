//! Head-relative radar projection.
//!
//! A target is mapped onto a disc of `radar_radius` display units where the
//! viewer sits at the center and its heading points up. Radar space follows
//! screen conventions: `+x` is right and `+y` is down, so a target straight
//! ahead lands at `(0, -scaled)`.
//!
//! The dot tier is taken from the world distance, the same comparison the
//! outline uses, so a drawn dot always carries its outline's color.
//!
//! Targets beyond `max_distance` are skipped entirely. The outline path in
//! [`crate::tier::classify_3d`] keeps classifying them as `Beyond`; the two
//! paths intentionally disagree past the sensing range.

use crate::config::DistanceMode;
use crate::error::{ensure_positive, Result};
use crate::sampler::TargetPoint;
use crate::tier::ProximityTier;
use crate::viewer::Viewer;
use glam::Vec2;

/// Offset from the radar center in display units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadarCoordinate {
    pub offset: Vec2,
}

impl RadarCoordinate {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
        }
    }

    /// Distance from the radar center in display units.
    pub fn radius(&self) -> f32 {
        self.offset.length()
    }

    /// Absolute position for a radar drawn around `center`.
    pub fn to_screen(&self, center: Vec2) -> Vec2 {
        center + self.offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadarProjection {
    Visible {
        coordinate: RadarCoordinate,
        tier: ProximityTier,
    },
    /// Target lies past the sensing range; nothing is drawn.
    Skipped,
}

impl RadarProjection {
    pub fn is_skipped(&self) -> bool {
        matches!(self, RadarProjection::Skipped)
    }

    pub fn tier(&self) -> Option<ProximityTier> {
        match self {
            RadarProjection::Visible { tier, .. } => Some(*tier),
            RadarProjection::Skipped => None,
        }
    }

    pub fn coordinate(&self) -> Option<RadarCoordinate> {
        match self {
            RadarProjection::Visible { coordinate, .. } => Some(*coordinate),
            RadarProjection::Skipped => None,
        }
    }
}

/// Project `target` onto the radar of `viewer` using the full 3D offset.
pub fn project(
    target: &TargetPoint,
    viewer: &Viewer,
    max_distance: f32,
    radar_radius: f32,
) -> Result<RadarProjection> {
    project_with_mode(
        target,
        viewer,
        max_distance,
        radar_radius,
        DistanceMode::Spatial,
    )
}

pub fn project_with_mode(
    target: &TargetPoint,
    viewer: &Viewer,
    max_distance: f32,
    radar_radius: f32,
    mode: DistanceMode,
) -> Result<RadarProjection> {
    ensure_positive("max_distance", max_distance)?;
    ensure_positive("radar_radius", radar_radius)?;
    Ok(project_unchecked(
        target,
        viewer,
        max_distance,
        radar_radius,
        mode,
    ))
}

/// Projection for parameters that were validated at setup.
pub(crate) fn project_unchecked(
    target: &TargetPoint,
    viewer: &Viewer,
    max_distance: f32,
    radar_radius: f32,
    mode: DistanceMode,
) -> RadarProjection {
    let direction = mode.direction(viewer.position, target.position);
    let distance = direction.length();
    if distance > max_distance {
        return RadarProjection::Skipped;
    }

    let scaled = (distance / max_distance) * radar_radius;
    let bearing = direction.x.atan2(direction.z).to_degrees() - viewer.yaw_degrees;
    let (sin, cos) = bearing.to_radians().sin_cos();

    RadarProjection::Visible {
        coordinate: RadarCoordinate::new(sin * scaled, -cos * scaled),
        tier: ProximityTier::within(distance, max_distance),
    }
}
