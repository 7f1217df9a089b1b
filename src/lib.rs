//! Placard renders short text strings onto solid-color canvases and exports
//! the result as a single PNG or, for a batch of strings, as a ZIP archive
//! of individually named PNGs.
//!
//! Pipeline:
//!
//! 1. **Rasterize**: `text + RenderConfig -> PNG bytes` ([`Rasterizer`],
//!    Parley layout drawn through `vello_cpu`)
//! 2. **Package**: derive a file name per item and either return the single
//!    image ([`render_one`]) or fold all surviving items into one archive
//!    ([`render_batch`]), isolating per-item render failures.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod naming;
pub mod package;
pub mod raster;
pub mod text_layout;

pub use config::{BatchRequest, FieldSnapshot, RenderConfig, Rgba8};
pub use error::{PlacardError, PlacardResult};
pub use naming::{FALLBACK_STEM, entry_name, single_file_name};
pub use package::{
    PackagedArchive, RasterResult, SingleExport, render_batch, render_one, split_nonblank_lines,
};
pub use raster::{Rasterizer, TextRenderer};
pub use text_layout::TextLayoutEngine;
