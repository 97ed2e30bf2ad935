//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod layer;
pub mod text_metrics;

pub use colors::BLACK;
pub use compress::compress_pdf;
pub use layer::LayerBuilder;
pub use text_metrics::BuiltinFontMeasurer;
