//! Read-only glyph catalog: jamo identifier → canonical stroke geometry and
//! role metadata.
//!
//! The catalog is authored externally as a JSON document and loaded once:
//!
//! ```json
//! {
//!   "characters": [
//!     { "name": "ㄱ", "kind": "consonant",
//!       "path": [ { "start": [0.0, -0.05, 0.05], "end": [0.0, 0.05, 0.05] } ] },
//!     { "name": "ㅏ", "kind": "vowel", "orientation": 0,
//!       "path": [ { "start": [0.0, 0.02, 0.05], "end": [0.0, 0.02, -0.05] } ] }
//!   ]
//! }
//! ```
//!
//! Lookup never substitutes default geometry: a missing identifier is an
//! explicit `None` the caller must handle.

use crate::error::{Result, ScribeError};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A straight line-draw primitive: 3D start and end point in a glyph's
/// normalized local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Pen-down point.
    pub start: Vec3,
    /// Pen-up point.
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Length of the stroke.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Which syllable role a glyph can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphCategory {
    Consonant,
    Vowel,
}

/// The writing axis of a vowel, which selects the scale constants applied
/// to co-occurring consonants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VowelOrientation {
    /// Vowel stem runs along the horizontal (y) axis, e.g. ㅏ, ㅓ, ㅣ.
    Horizontal,
    /// Vowel stem runs along the vertical (z) axis, e.g. ㅗ, ㅜ, ㅡ.
    Vertical,
}

impl VowelOrientation {
    /// Maps the catalog's raw orientation index (0 = horizontal,
    /// 1 = vertical) to the enum. Any other value is `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Canonical stroke geometry and role metadata for one jamo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Ordered strokes in the glyph's normalized local frame.
    pub strokes: Vec<Segment>,

    /// Consonant or vowel.
    pub category: GlyphCategory,

    /// Writing axis, vowels only. `None` on consonants, and on vowels whose
    /// authored metadata is absent or out of range — composition skips such
    /// syllables rather than guessing.
    pub orientation: Option<VowelOrientation>,
}

impl Glyph {
    /// A consonant glyph.
    pub fn consonant(strokes: Vec<Segment>) -> Self {
        Self {
            strokes,
            category: GlyphCategory::Consonant,
            orientation: None,
        }
    }

    /// A vowel glyph with its writing axis.
    pub fn vowel(strokes: Vec<Segment>, orientation: VowelOrientation) -> Self {
        Self {
            strokes,
            category: GlyphCategory::Vowel,
            orientation: Some(orientation),
        }
    }
}

/// Immutable-after-load mapping from jamo identifier to [`Glyph`].
#[derive(Clone, Debug, Default)]
pub struct GlyphCatalog {
    glyphs: HashMap<char, Glyph>,
}

/// On-disk shape of the catalog document.
#[derive(Deserialize)]
struct CatalogDoc {
    characters: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    name: String,
    kind: GlyphCategory,
    #[serde(default)]
    orientation: Option<i64>,
    path: Vec<Segment>,
}

impl GlyphCatalog {
    /// Creates an empty catalog for programmatic authoring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from its JSON document.
    ///
    /// Entry names must be single characters and unique. An out-of-range
    /// orientation value is tolerated: the glyph is stored without an
    /// orientation and a warning is logged, so composition applies its
    /// skip policy instead of the whole load failing.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for entry in doc.characters {
            let mut chars = entry.name.chars();
            let id = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(ScribeError::InvalidGlyphName(entry.name)),
            };
            if catalog.glyphs.contains_key(&id) {
                return Err(ScribeError::DuplicateGlyph(id));
            }
            let orientation = match entry.orientation {
                None => None,
                Some(raw) => {
                    let mapped = VowelOrientation::from_index(raw);
                    if mapped.is_none() {
                        tracing::warn!("glyph '{id}': orientation {raw} out of range, ignored");
                    }
                    mapped
                }
            };
            catalog.insert(
                id,
                Glyph {
                    strokes: entry.path,
                    category: entry.kind,
                    orientation,
                },
            );
        }
        Ok(catalog)
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Adds or replaces a glyph. Intended for authoring; after load the
    /// catalog is treated as immutable for the process lifetime.
    pub fn insert(&mut self, id: char, glyph: Glyph) {
        self.glyphs.insert(id, glyph);
    }

    /// Looks up a glyph. `None` means the identifier is not in the catalog;
    /// callers must handle it — there is no default geometry.
    pub fn get(&self, id: char) -> Option<&Glyph> {
        self.glyphs.get(&id)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
