//! # hangul-scribe
//!
//! An engine-agnostic drawing layer that lets a robot arm write Hangul.
//!
//! It decouples the *text* (a character string) from the *motion* (a
//! position-controlled arm), producing a [`DrawPlan`] of ordered strokes
//! and stepping a tick-driven [`MotionStateMachine`] that any simulator,
//! ROS bridge, or physical controller can consume.
//!
//! The pipeline: [`jamo::decompose`] splits each syllable into its slots,
//! a [`StrokeComposer`] looks the slots up in a [`GlyphCatalog`] and
//! applies the role/orientation scale constants, a [`StringLayoutEngine`]
//! places syllables on a grid, and the state machine walks the plan one
//! approach/align/draw cycle per stroke against a live position feed.

pub mod catalog;
pub mod composer;
pub mod error;
pub mod jamo;
pub mod layout;
pub mod motion;

pub use catalog::*;
pub use composer::*;
pub use error::*;
pub use jamo::*;
pub use layout::*;
pub use motion::*;
