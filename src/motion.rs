//! Tick-driven motion cycle that turns a [`DrawPlan`] into incremental
//! robot-frame target positions.
//!
//! An external control loop owns the active stroke index and a
//! [`MotionState`], and calls [`MotionStateMachine::tick`] once per cycle
//! with the latest end-effector position. The machine runs each stroke
//! through approach → align → draw and reports completion; the driver
//! advances the index, which resets the phase for the next stroke. One
//! `MotionState` per concurrently running plan — nothing is shared.

use crate::layout::DrawPlan;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Phase of the active stroke's drawing cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPhase {
    /// Move to a standoff point in front of the stroke's start.
    #[default]
    Approach,
    /// Close in on the exact start point.
    Align,
    /// Interpolate along the stroke toward its end.
    Draw,
}

/// Per-plan cycle state, owned and passed in by the tick driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionState {
    /// Phase of the active stroke.
    pub phase: DrawPhase,
    /// Stroke index seen on the previous tick; a change forces the phase
    /// back to [`DrawPhase::Approach`].
    last_stroke: Option<usize>,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Configuration for the motion cycle.
#[derive(Clone, Copy, Debug)]
pub struct MotionConfig {
    /// Robot-frame position of the plan's local origin.
    pub origin: Vec3,

    /// Multiplier on the draw-phase interpolation fraction. Values above 1
    /// let the target reach the stroke's far end before the physical
    /// position does, so slow motion does not stall short of the
    /// completion threshold.
    pub draw_scale: f32,

    /// Standoff distance along the local x axis during approach.
    pub approach_clearance: f32,

    /// Distance to the start point that ends the approach phase.
    pub approach_threshold: f32,

    /// Distance to the start point that ends the align phase.
    pub align_threshold: f32,

    /// Distance to the end point that completes the stroke.
    pub finish_threshold: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            draw_scale: 1.5,
            approach_clearance: 0.05,
            approach_threshold: 0.05,
            align_threshold: 0.01,
            finish_threshold: 0.02,
        }
    }
}

/// Maps a point from the plan's local frame into the robot frame:
/// (x, y, z) → (−z, y, x). The caller's origin offset is added on top by
/// the state machine.
pub fn robot_frame(p: Vec3) -> Vec3 {
    Vec3::new(-p.z, p.y, p.x)
}

/// One tick's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeTick {
    /// Next robot-frame target, or `None` when there is nothing to do this
    /// tick (plan complete, or no live position available).
    pub target: Option<Vec3>,

    /// The active stroke reached its end point; the driver should advance
    /// the stroke index before the next tick.
    pub stroke_complete: bool,

    /// The active index is past the last stroke; the plan is done.
    pub plan_complete: bool,
}

impl StrokeTick {
    fn idle() -> Self {
        Self {
            target: None,
            stroke_complete: false,
            plan_complete: false,
        }
    }
}

/// Steps a draw plan one target position at a time.
pub struct MotionStateMachine {
    config: MotionConfig,
}

impl MotionStateMachine {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    fn to_robot(&self, p: Vec3) -> Vec3 {
        robot_frame(p) + self.config.origin
    }

    /// Computes the next target for the stroke at `stroke`, given the
    /// latest end-effector position.
    ///
    /// With no live position the tick is a no-op: no target, no state
    /// change. When the index is past the last stroke the plan is reported
    /// complete and `state` is reset so it can drive the next plan.
    pub fn tick(
        &self,
        plan: &DrawPlan,
        state: &mut MotionState,
        stroke: usize,
        ee_pos: Option<Vec3>,
    ) -> StrokeTick {
        if stroke >= plan.stroke_count() {
            *state = MotionState::default();
            return StrokeTick {
                target: None,
                stroke_complete: false,
                plan_complete: true,
            };
        }

        let Some(ee) = ee_pos else {
            return StrokeTick::idle();
        };

        if state.last_stroke != Some(stroke) {
            state.phase = DrawPhase::Approach;
            state.last_stroke = Some(stroke);
        }

        let seg = &plan.segments[stroke];
        let start = self.to_robot(seg.start);
        let end = self.to_robot(seg.end);
        let to_start = ee.distance(start);
        let to_end = ee.distance(end);

        match state.phase {
            DrawPhase::Approach => {
                let standoff = seg.start + Vec3::X * self.config.approach_clearance;
                if to_start <= self.config.approach_threshold {
                    tracing::debug!(stroke, "approach done, aligning");
                    state.phase = DrawPhase::Align;
                }
                StrokeTick {
                    target: Some(self.to_robot(standoff)),
                    ..StrokeTick::idle()
                }
            }
            DrawPhase::Align => {
                if to_start <= self.config.align_threshold {
                    tracing::debug!(stroke, "aligned, drawing");
                    state.phase = DrawPhase::Draw;
                }
                StrokeTick {
                    target: Some(start),
                    ..StrokeTick::idle()
                }
            }
            DrawPhase::Draw => {
                let span = seg.length();
                let fraction = if span <= f32::EPSILON {
                    // Degenerate dot stroke: jump straight to the end.
                    1.0
                } else {
                    ((to_start / span) * self.config.draw_scale).clamp(0.0, 1.0)
                };
                tracing::trace!(stroke, progress = fraction * 100.0, "drawing");

                let target = seg.start + (seg.end - seg.start) * fraction;
                StrokeTick {
                    target: Some(self.to_robot(target)),
                    stroke_complete: to_end <= self.config.finish_threshold,
                    plan_complete: false,
                }
            }
        }
    }
}
