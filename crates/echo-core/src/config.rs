//! Setup-time configuration: the sensing volume and the radar parameters.
//!
//! Everything here is validated once, when a session is initialized, so the
//! per-frame paths can assume positive ranges and non-negative extents.

use crate::constants::*;
use crate::error::{ensure_positive, EchoError, Result};
use glam::Vec3;

/// Axis-aligned rectangle in the horizontal plane where targets are spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensingVolume {
    center: Vec3,
    width: f32,
    depth: f32,
}

impl SensingVolume {
    /// Build a volume centered on `center`, `width` along x and `depth` along z.
    pub fn new(center: Vec3, width: f32, depth: f32) -> Result<Self> {
        for (name, extent) in [("width", width), ("depth", depth)] {
            if !extent.is_finite() || extent < 0.0 {
                return Err(EchoError::InvalidConfiguration(format!(
                    "sensing volume {name} must be non-negative, got {extent}"
                )));
            }
        }
        if !center.is_finite() {
            return Err(EchoError::InvalidConfiguration(format!(
                "sensing volume center must be finite, got {center}"
            )));
        }
        Ok(Self {
            center,
            width,
            depth,
        })
    }

    /// Square spanning `±half_extent` around `center` on both axes.
    pub fn square_around(center: Vec3, half_extent: f32) -> Result<Self> {
        Self::new(center, half_extent * 2.0, half_extent * 2.0)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }

    /// Whether `point` lies within the horizontal footprint (height ignored).
    pub fn contains_xz(&self, point: Vec3) -> bool {
        (point.x - self.center.x).abs() <= self.half_width()
            && (point.z - self.center.z).abs() <= self.half_depth()
    }
}

impl Default for SensingVolume {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            width: DEFAULT_VOLUME_EXTENT,
            depth: DEFAULT_VOLUME_EXTENT,
        }
    }
}

/// How the viewer-to-target vector is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceMode {
    /// Full 3D vector, height difference included.
    #[default]
    Spatial,
    /// Height difference dropped; distance and bearing on the floor plane.
    Horizontal,
}

impl DistanceMode {
    /// Vector from `from` to `to` under this mode.
    #[inline]
    pub fn direction(self, from: Vec3, to: Vec3) -> Vec3 {
        let d = to - from;
        match self {
            DistanceMode::Spatial => d,
            DistanceMode::Horizontal => Vec3::new(d.x, 0.0, d.z),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EchoConfig {
    pub volume: SensingVolume,
    /// World distance (meters) mapped onto the outer radar ring.
    pub max_distance: f32,
    /// Display radius of the outer radar ring.
    pub radar_radius: f32,
    pub number_of_points: usize,
    pub target_height: f32,
    pub distance_mode: DistanceMode,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            volume: SensingVolume::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
            radar_radius: DEFAULT_RADAR_RADIUS,
            number_of_points: DEFAULT_NUMBER_OF_POINTS,
            target_height: DEFAULT_TARGET_HEIGHT,
            distance_mode: DistanceMode::default(),
        }
    }
}

impl EchoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("max_distance", self.max_distance)?;
        ensure_positive("radar_radius", self.radar_radius)?;
        if !self.target_height.is_finite() {
            return Err(EchoError::InvalidConfiguration(format!(
                "target_height must be finite, got {}",
                self.target_height
            )));
        }
        Ok(())
    }
}
