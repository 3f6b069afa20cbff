//! Screen-space geometry for the radar overlay.
//!
//! The overlay is a fixed 220 px panel in the bottom-left corner. Everything
//! is emitted as axis-aligned colored quads so a renderer can upload them as
//! instances without further processing. Coordinates are pixels with the
//! origin at the top-left of the screen.

use crate::constants::*;
use crate::projector::{RadarCoordinate, RadarProjection};
use crate::tier::ProximityTier;
use glam::Vec2;

/// One colored rectangle, `min` is its top-left corner.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quad {
    pub min: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl Quad {
    pub fn new(min: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            min: min.to_array(),
            size: size.to_array(),
            color,
        }
    }

    /// Square of side `side` centered on `center`.
    pub fn centered(center: Vec2, side: f32, color: [f32; 4]) -> Self {
        Self::new(center - Vec2::splat(side / 2.0), Vec2::splat(side), color)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::from(self.min) + Vec2::from(self.size) / 2.0
    }
}

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    pub screen_height: f32,
    pub radar_radius: f32,
}

impl RadarLayout {
    pub fn new(screen_height: f32, radar_radius: f32) -> Self {
        Self {
            screen_height,
            radar_radius,
        }
    }

    /// Top-left corner of the panel.
    pub fn panel_origin(&self) -> Vec2 {
        Vec2::new(
            RADAR_MARGIN_LEFT,
            self.screen_height - RADAR_PANEL_BOTTOM_OFFSET,
        )
    }

    pub fn center(&self) -> Vec2 {
        self.panel_origin() + Vec2::splat(RADAR_PANEL_SIZE / 2.0)
    }

    pub fn background(&self) -> Quad {
        Quad::new(
            self.panel_origin(),
            Vec2::splat(RADAR_PANEL_SIZE),
            BLACK,
        )
    }

    /// Sample squares for one ring of `radius` display units.
    pub fn ring(&self, radius: f32, color: [f32; 4]) -> Vec<Quad> {
        let center = self.center();
        (0..RADAR_RING_SEGMENTS)
            .map(|i| {
                let angle = (i as f32 * 360.0 / RADAR_RING_SEGMENTS as f32).to_radians();
                let p = center + Vec2::new(angle.sin(), angle.cos()) * radius;
                Quad::centered(p, RADAR_RING_THICKNESS, color)
            })
            .collect()
    }

    /// The four tier rings, innermost first.
    pub fn rings(&self) -> Vec<Quad> {
        ProximityTier::ALL
            .iter()
            .flat_map(|tier| {
                self.ring(
                    self.radar_radius * tier.ring_fraction(),
                    tier.color_rgba(),
                )
            })
            .collect()
    }

    /// Vertical then horizontal line through the panel center.
    pub fn cross(&self) -> [Quad; 2] {
        let origin = self.panel_origin();
        let center = self.center();
        [
            Quad::new(
                Vec2::new(center.x, origin.y),
                Vec2::new(RADAR_CROSS_THICKNESS, RADAR_PANEL_SIZE),
                WHITE,
            ),
            Quad::new(
                Vec2::new(origin.x, center.y),
                Vec2::new(RADAR_PANEL_SIZE, RADAR_CROSS_THICKNESS),
                WHITE,
            ),
        ]
    }

    pub fn dot(&self, coordinate: RadarCoordinate, tier: ProximityTier) -> Quad {
        Quad::centered(
            coordinate.to_screen(self.center()),
            RADAR_DOT_SIZE,
            tier.color_rgba(),
        )
    }

    /// Full overlay in draw order: background, rings, cross, then visible dots.
    pub fn compose<'a, I>(&self, projections: I) -> Vec<Quad>
    where
        I: IntoIterator<Item = &'a RadarProjection>,
    {
        let mut quads = vec![self.background()];
        quads.extend(self.rings());
        quads.extend(self.cross());
        quads.extend(projections.into_iter().filter_map(|p| match p {
            RadarProjection::Visible { coordinate, tier } => Some(self.dot(*coordinate, *tier)),
            RadarProjection::Skipped => None,
        }));
        quads
    }
}
