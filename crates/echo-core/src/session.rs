//! Per-run state owned by the host: validated config, sampled targets and
//! their outline visuals.
//!
//! The host drives everything explicitly. `initialize` replaces engine start
//! hooks, `evaluate_frame` replaces the per-frame update, and outlines go
//! through a two-step handshake (`create_visual` then `materialize_visual`)
//! so material assignment happens only once the host has render resources.

use crate::config::EchoConfig;
use crate::constants::{outline_offset_vec3, outline_scale_vec3};
use crate::error::{EchoError, Result};
use crate::layout::RadarLayout;
use crate::projector::{project_unchecked, RadarProjection};
use crate::sampler::{generate, TargetPoint};
use crate::tier::ProximityTier;
use crate::viewer::Viewer;
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;

/// Handle for an outline that exists but has no material yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PendingVisualId(u64);

/// Wireframe box drawn around a target.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineVisual {
    pub target_index: usize,
    pub center: Vec3,
    pub scale: Vec3,
    /// Tier from the most recent evaluated frame.
    pub tier: Option<ProximityTier>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetReport {
    pub target: TargetPoint,
    pub distance: f32,
    pub outline_tier: ProximityTier,
    pub radar: RadarProjection,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub targets: Vec<TargetReport>,
}

impl FrameReport {
    pub fn projections(&self) -> impl Iterator<Item = &RadarProjection> {
        self.targets.iter().map(|t| &t.radar)
    }

    pub fn visible_count(&self) -> usize {
        self.projections().filter(|p| !p.is_skipped()).count()
    }
}

pub struct EchoSession {
    config: EchoConfig,
    targets: Vec<TargetPoint>,
    outlines: Vec<Option<OutlineVisual>>,
    pending: FnvHashMap<PendingVisualId, usize>,
    next_visual_id: u64,
    skipped_frames: u64,
    rng: StdRng,
}

impl EchoSession {
    /// Validate `config`, sample targets and queue one outline per target.
    pub fn initialize(config: EchoConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            targets: Vec::new(),
            outlines: Vec::new(),
            pending: FnvHashMap::default(),
            next_visual_id: 0,
            skipped_frames: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        session.spawn_targets()?;
        Ok(session)
    }

    /// Resample every target from a fresh seed. Existing outlines are dropped
    /// and new pending ones are queued.
    pub fn retarget(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.spawn_targets()
    }

    fn spawn_targets(&mut self) -> Result<()> {
        self.targets = generate(
            &self.config.volume,
            self.config.number_of_points,
            self.config.target_height,
            &mut self.rng,
        );
        self.outlines = vec![None; self.targets.len()];
        self.pending.clear();
        for i in 0..self.targets.len() {
            log::debug!("created target {i} at {}", self.targets[i].position);
            self.create_visual(i)?;
        }
        Ok(())
    }

    /// Queue an outline for `target_index`. A target has at most one pending
    /// outline; asking again returns the id already queued.
    pub fn create_visual(&mut self, target_index: usize) -> Result<PendingVisualId> {
        if target_index >= self.targets.len() {
            return Err(EchoError::MissingInput(format!(
                "no target at index {target_index} ({} targets)",
                self.targets.len()
            )));
        }
        if let Some((id, _)) = self.pending.iter().find(|&(_, &t)| t == target_index) {
            return Ok(*id);
        }
        let id = PendingVisualId(self.next_visual_id);
        self.next_visual_id += 1;
        self.pending.insert(id, target_index);
        Ok(id)
    }

    /// Attach the outline once the host can render it. Each id works once.
    pub fn materialize_visual(&mut self, id: PendingVisualId) -> Result<&OutlineVisual> {
        let target_index = self
            .pending
            .remove(&id)
            .ok_or_else(|| EchoError::MissingInput(format!("no pending visual {id:?}")))?;
        let target = self.targets[target_index];
        let slot = &mut self.outlines[target_index];
        Ok(slot.insert(OutlineVisual {
            target_index,
            center: target.position + outline_offset_vec3(),
            scale: outline_scale_vec3(),
            tier: None,
        }))
    }

    /// Pending ids in creation order.
    pub fn pending_visuals(&self) -> Vec<PendingVisualId> {
        let mut ids: Vec<_> = self.pending.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Classify and project every target for this frame's head pose.
    ///
    /// Without a pose the frame is skipped: the skip is counted, logged and
    /// returned as `MissingInput`.
    pub fn evaluate_frame(&mut self, viewer: Option<&Viewer>) -> Result<FrameReport> {
        let Some(viewer) = viewer else {
            self.skipped_frames += 1;
            log::warn!(
                "no viewer pose this frame; skipped {} frame(s) so far",
                self.skipped_frames
            );
            return Err(EchoError::MissingInput("viewer pose".into()));
        };

        let max_distance = self.config.max_distance;
        let radar_radius = self.config.radar_radius;
        let mode = self.config.distance_mode;

        let mut report = FrameReport {
            targets: Vec::with_capacity(self.targets.len()),
        };
        for (target, outline) in self.targets.iter().zip(self.outlines.iter_mut()) {
            let distance = mode.direction(viewer.position, target.position).length();
            let outline_tier = ProximityTier::within(distance, max_distance);
            if let Some(outline) = outline {
                outline.tier = Some(outline_tier);
            }
            report.targets.push(TargetReport {
                target: *target,
                distance,
                outline_tier,
                radar: project_unchecked(target, viewer, max_distance, radar_radius, mode),
            });
        }
        Ok(report)
    }

    pub fn layout(&self, screen_height: f32) -> RadarLayout {
        RadarLayout::new(screen_height, self.config.radar_radius)
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    pub fn targets(&self) -> &[TargetPoint] {
        &self.targets
    }

    pub fn outline(&self, target_index: usize) -> Option<&OutlineVisual> {
        self.outlines.get(target_index).and_then(Option::as_ref)
    }

    pub fn outlines(&self) -> impl Iterator<Item = &OutlineVisual> {
        self.outlines.iter().flatten()
    }

    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }
}
