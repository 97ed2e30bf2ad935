//! PDF stream compression
//!
//! printpdf writes its content streams uncompressed; lopdf deflates them.

use std::io::Cursor;

use crate::error::RenderError;

/// Re-save a PDF with every stream deflated.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e)))?;

    Ok(output.into_inner())
}
