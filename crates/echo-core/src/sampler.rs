use crate::config::SensingVolume;
use glam::Vec3;
use rand::prelude::*;

/// A simulated person standing inside the sensing volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPoint {
    pub position: Vec3,
}

impl TargetPoint {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// Sample `count` independent targets uniformly over the volume footprint.
///
/// Every point shares `fixed_height` as its y coordinate. Overlapping points
/// are allowed. An axis with zero extent collapses to the center coordinate.
pub fn generate<R: Rng + ?Sized>(
    volume: &SensingVolume,
    count: usize,
    fixed_height: f32,
    rng: &mut R,
) -> Vec<TargetPoint> {
    let center = volume.center();
    (0..count)
        .map(|_| {
            let x = center.x + uniform_offset(rng, volume.half_width());
            let z = center.z + uniform_offset(rng, volume.half_depth());
            TargetPoint::new(Vec3::new(x, fixed_height, z))
        })
        .collect()
}

#[inline]
fn uniform_offset<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> f32 {
    if half_extent > 0.0 {
        rng.gen_range(-half_extent..=half_extent)
    } else {
        0.0
    }
}
