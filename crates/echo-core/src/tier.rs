use crate::constants::{TIER_COLORS, TIER_FRACTIONS};
use crate::error::{ensure_positive, Result};

/// Discrete distance band used to color outlines and radar dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProximityTier {
    Near,
    Mid,
    Far,
    Beyond,
}

impl ProximityTier {
    pub const ALL: [ProximityTier; 4] = [
        ProximityTier::Near,
        ProximityTier::Mid,
        ProximityTier::Far,
        ProximityTier::Beyond,
    ];

    /// Band for a distance expressed as a fraction of the full range.
    ///
    /// Upper edges are inclusive, so ties resolve to the tighter band.
    /// Fractions above 1.0 are still `Beyond`.
    pub fn from_fraction(fraction: f32) -> Self {
        Self::within(fraction, 1.0)
    }

    /// Band for `distance` against a positive `range`.
    #[inline]
    pub(crate) fn within(distance: f32, range: f32) -> Self {
        if distance <= range * TIER_FRACTIONS[0] {
            ProximityTier::Near
        } else if distance <= range * TIER_FRACTIONS[1] {
            ProximityTier::Mid
        } else if distance <= range * TIER_FRACTIONS[2] {
            ProximityTier::Far
        } else {
            ProximityTier::Beyond
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Ring fraction of `radar_radius` whose outer edge bounds this tier.
    pub fn ring_fraction(self) -> f32 {
        TIER_FRACTIONS[self.index()]
    }

    pub fn color_rgb(self) -> [f32; 3] {
        TIER_COLORS[self.index()]
    }

    pub fn color_rgba(self) -> [f32; 4] {
        let [r, g, b] = self.color_rgb();
        [r, g, b, 1.0]
    }

    pub fn color_name(self) -> &'static str {
        match self {
            ProximityTier::Near => "white",
            ProximityTier::Mid => "green",
            ProximityTier::Far => "yellow",
            ProximityTier::Beyond => "red",
        }
    }
}

/// Outline tier for a target at `distance` from the viewer.
///
/// Never clamps: anything past `max_distance` is `Beyond`.
pub fn classify_3d(distance: f32, max_distance: f32) -> Result<ProximityTier> {
    ensure_positive("max_distance", max_distance)?;
    Ok(ProximityTier::within(distance, max_distance))
}
