#![forbid(unsafe_code)]

//! Text measurement and drawing for the cwin candidate surface.
//!
//! # Role in cwin
//! Layout and painting never talk to a font engine directly. They go
//! through [`TextMeasurer`] for widths and [`Canvas`] for draw calls, and
//! through [`RunPainter`] whenever a string may need more than one typeface.
//!
//! # Primary responsibilities
//! - **Segmentation**: split strings into [`GlyphRun`]s by typeface.
//! - **Measurement**: sum run widths; cache them with [`CachedMeasurer`].
//! - **Drawing**: paint runs left to right, centered on an anchor.
//! - **Formatting**: expand theme `%s` templates.

pub mod cache;
pub mod canvas;
pub mod format;
pub mod measure;
pub mod run;
pub mod segment;

pub use cache::{CachedMeasurer, MeasureCacheStats};
pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use format::apply_template;
pub use measure::{CellMeasurer, FontMetrics, TextMeasurer};
pub use run::RunPainter;
pub use segment::{GlyphRun, GlyphRuns, resolve_font, segment};
