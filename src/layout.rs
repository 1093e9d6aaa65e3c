//! Places each syllable's composed strokes into a grid cell and produces
//! the global ordered draw plan for a whole character string.

use crate::catalog::{GlyphCatalog, Segment};
use crate::composer::{PlanWarning, StrokeComposer};
use crate::error::{Result, ScribeError};
use crate::jamo;

/// Grid layout parameters.
///
/// Characters fill columns left to right, then wrap to the next row below.
/// Index 0 sits at offset (0, 0); column stride is `cell_size` along y, row
/// stride is `-cell_size` along z. After placement one uniform scale is
/// applied to every segment's y and z.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Width and height of one character cell.
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
    /// Uniform y/z scale applied to the finished plan.
    pub global_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 0.18,
            columns: 6,
            rows: 2,
            global_scale: 0.7,
        }
    }
}

impl LayoutConfig {
    /// Total characters the grid can hold.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// (y, z) translation for the character at `index`.
    fn cell_offset(&self, index: usize) -> (f32, f32) {
        let col = index % self.columns;
        let row = index / self.columns;
        (
            col as f32 * self.cell_size,
            -(row as f32) * self.cell_size,
        )
    }
}

/// The fully composed, laid-out, globally scaled stroke list for an input
/// string, in authoring order.
#[derive(Clone, Debug, Default)]
pub struct DrawPlan {
    /// Global ordered segment list; never reordered or deduplicated.
    pub segments: Vec<Segment>,

    /// Stroke count contributed by each input character, parallel to the
    /// input string. Used to detect when a syllable's strokes are
    /// exhausted.
    pub syllable_strokes: Vec<usize>,

    /// Non-fatal problems encountered during composition.
    pub warnings: Vec<PlanWarning>,
}

impl DrawPlan {
    /// Total number of strokes in the plan.
    pub fn stroke_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Lays out character strings against a glyph catalog.
pub struct StringLayoutEngine<'a> {
    composer: StrokeComposer<'a>,
    config: LayoutConfig,
}

impl<'a> StringLayoutEngine<'a> {
    /// Engine with the default grid (6x2 cells of 0.18, global scale 0.7).
    pub fn new(catalog: &'a GlyphCatalog) -> Self {
        Self::with_config(catalog, LayoutConfig::default())
    }

    pub fn with_config(catalog: &'a GlyphCatalog, config: LayoutConfig) -> Self {
        Self {
            composer: StrokeComposer::new(catalog),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Builds the draw plan for `text`.
    ///
    /// Strings longer than the grid capacity are rejected with
    /// [`ScribeError::GridCapacityExceeded`]. Characters that cannot be
    /// composed contribute zero strokes and a warning on the plan.
    pub fn plan(&self, text: &str) -> Result<DrawPlan> {
        let chars: Vec<char> = text.chars().collect();
        let capacity = self.config.capacity();
        if chars.len() > capacity {
            return Err(ScribeError::GridCapacityExceeded {
                index: capacity,
                capacity,
            });
        }

        let mut plan = DrawPlan::default();
        for (i, &c) in chars.iter().enumerate() {
            let composed = match jamo::decompose(c) {
                Some(syllable) => self.composer.compose(&syllable),
                None => {
                    let warning = PlanWarning::UnsupportedCharacter(c);
                    tracing::warn!("{warning}");
                    plan.warnings.push(warning);
                    plan.syllable_strokes.push(0);
                    continue;
                }
            };

            let (dy, dz) = self.config.cell_offset(i);
            plan.syllable_strokes.push(composed.strokes.len());
            plan.warnings.extend(composed.warnings);
            plan.segments.extend(composed.strokes.into_iter().map(|mut seg| {
                seg.start.y += dy;
                seg.start.z += dz;
                seg.end.y += dy;
                seg.end.z += dz;
                seg
            }));
        }

        let scale = self.config.global_scale;
        for seg in &mut plan.segments {
            seg.start.y *= scale;
            seg.start.z *= scale;
            seg.end.y *= scale;
            seg.end.z *= scale;
        }

        Ok(plan)
    }
}
