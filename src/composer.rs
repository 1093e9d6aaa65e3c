//! Composes one syllable's slots into an ordered stroke list.
//!
//! Slot geometry comes straight from the catalog; what this module owns is
//! the scale-and-offset each slot receives depending on the vowel's writing
//! axis, and the append order: scaled lead, then vowel, then (for 3-slot
//! syllables) the z-compressed upper block followed by the trailing
//! consonant. The constant pairs are defined once on [`SlotTransform`].

use crate::catalog::{GlyphCatalog, Segment, VowelOrientation};
use crate::jamo::Syllable;
use glam::Vec3;
use thiserror::Error;

/// Per-axis scale and offset applied to a slot's strokes.
///
/// The x axis is the pen-approach axis and is never scaled; glyphs are
/// authored in the y (horizontal) / z (vertical) writing plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub y_scale: f32,
    pub y_offset: f32,
    pub z_scale: f32,
    pub z_offset: f32,
}

impl SlotTransform {
    /// z-compression applied to the whole lead+vowel block when a trailing
    /// consonant follows. Empirically tuned against the reference catalog.
    pub const UPPER_SQUEEZE: Self = Self {
        y_scale: 1.0,
        y_offset: 0.0,
        z_scale: 0.65,
        z_offset: 0.07,
    };

    /// Trailing-consonant scaling, independent of vowel orientation.
    pub const TRAIL: Self = Self {
        y_scale: 0.8,
        y_offset: 0.02,
        z_scale: 0.35,
        z_offset: 0.0,
    };

    /// Lead-consonant scaling for the given vowel orientation.
    pub fn lead(orientation: VowelOrientation) -> Self {
        match orientation {
            // Vowel sits to the right: squeeze the lead horizontally.
            VowelOrientation::Horizontal => Self {
                y_scale: 0.6,
                y_offset: 0.0,
                z_scale: 0.8,
                z_offset: 0.02,
            },
            // Vowel sits below: squeeze the lead vertically, lift it up.
            VowelOrientation::Vertical => Self {
                y_scale: 0.8,
                y_offset: 0.02,
                z_scale: 0.6,
                z_offset: 0.06,
            },
        }
    }

    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x,
            p.y * self.y_scale + self.y_offset,
            p.z * self.z_scale + self.z_offset,
        )
    }

    pub fn apply(&self, seg: Segment) -> Segment {
        Segment::new(self.apply_point(seg.start), self.apply_point(seg.end))
    }
}

/// A non-fatal problem encountered while composing a plan. The affected
/// slot or syllable contributes zero strokes; composition continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlanWarning {
    /// The identifier has no catalog entry; that slot was skipped.
    #[error("glyph '{0}' not found in catalog, slot skipped")]
    UnknownGlyph(char),

    /// The vowel carries no usable orientation, so no scaling branch can be
    /// chosen; the whole syllable was skipped.
    #[error("vowel '{0}' has no orientation metadata, syllable skipped")]
    MissingOrientation(char),

    /// The input character is neither a precomposed syllable nor a bare
    /// jamo.
    #[error("character '{0}' is not a Hangul syllable or jamo, skipped")]
    UnsupportedCharacter(char),
}

/// One syllable's composed strokes plus any warnings raised along the way.
#[derive(Clone, Debug, Default)]
pub struct ComposedSyllable {
    /// Ordered strokes in the syllable's local frame.
    pub strokes: Vec<Segment>,
    pub warnings: Vec<PlanWarning>,
}

impl ComposedSyllable {
    fn warn(&mut self, warning: PlanWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Composes syllables against a glyph catalog.
pub struct StrokeComposer<'a> {
    catalog: &'a GlyphCatalog,
}

impl<'a> StrokeComposer<'a> {
    pub fn new(catalog: &'a GlyphCatalog) -> Self {
        Self { catalog }
    }

    /// Composes one syllable into its ordered stroke list.
    ///
    /// Missing glyphs never produce substitute geometry. A missing vowel
    /// glyph or orientation skips the whole syllable; a missing lead or
    /// trail glyph skips only that slot.
    pub fn compose(&self, syllable: &Syllable) -> ComposedSyllable {
        match *syllable {
            Syllable::Single(id) => self.compose_single(id),
            Syllable::Composed { lead, vowel, trail } => self.compose_block(lead, vowel, trail),
        }
    }

    fn compose_single(&self, id: char) -> ComposedSyllable {
        let mut out = ComposedSyllable::default();
        match self.catalog.get(id) {
            Some(glyph) => out.strokes.extend_from_slice(&glyph.strokes),
            None => out.warn(PlanWarning::UnknownGlyph(id)),
        }
        out
    }

    fn compose_block(&self, lead: char, vowel: char, trail: Option<char>) -> ComposedSyllable {
        let mut out = ComposedSyllable::default();

        let Some(vowel_glyph) = self.catalog.get(vowel) else {
            out.warn(PlanWarning::UnknownGlyph(vowel));
            return out;
        };
        let Some(orientation) = vowel_glyph.orientation else {
            out.warn(PlanWarning::MissingOrientation(vowel));
            return out;
        };

        let lead_transform = SlotTransform::lead(orientation);
        match self.catalog.get(lead) {
            Some(glyph) => out
                .strokes
                .extend(glyph.strokes.iter().map(|&s| lead_transform.apply(s))),
            None => out.warn(PlanWarning::UnknownGlyph(lead)),
        }

        // Vowel geometry is authored in final position; appended unscaled.
        out.strokes.extend_from_slice(&vowel_glyph.strokes);

        if let Some(trail_id) = trail {
            for seg in &mut out.strokes {
                *seg = SlotTransform::UPPER_SQUEEZE.apply(*seg);
            }
            match self.catalog.get(trail_id) {
                Some(glyph) => out.strokes.extend(
                    glyph
                        .strokes
                        .iter()
                        .map(|&s| SlotTransform::TRAIL.apply(s)),
                ),
                None => out.warn(PlanWarning::UnknownGlyph(trail_id)),
            }
        }

        out
    }
}
