use std::fs;
use std::path::Path;

use printpdf::{Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::TemplateSet;

use super::engine::{LaidOutDocument, LaidOutPage, LayoutEngine};
use super::helpers::colors::DEBUG_FRAME_COLOR;
use super::helpers::compress::compress_pdf;
use super::helpers::layer::LayerBuilder;
use super::story::Story;

/// Turns laid-out pages into a PDF
pub struct DocumentRenderer<'a> {
    templates: &'a TemplateSet,
    settings: &'a Settings,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(templates: &'a TemplateSet, settings: &'a Settings) -> Self {
        Self {
            templates,
            settings,
        }
    }

    /// Lay out `story` and render it in one step
    pub fn compose(&self, story: Story) -> Result<Vec<u8>, RenderError> {
        let laid_out = LayoutEngine::new(self.templates).build(story)?;
        self.render(&laid_out)
    }

    /// Generate the PDF bytes for a laid-out document
    pub fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut doc = PdfDocument::new(&self.settings.title);
        let page = self.templates.page_rect();

        let pages: Vec<PdfPage> = document
            .pages
            .iter()
            .map(|laid_out| {
                let mut layer = LayerBuilder::new();
                self.render_page(&mut layer, laid_out);
                PdfPage::new(Mm(page.width), Mm(page.height), layer.into_ops())
            })
            .collect();

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warning(s)", warnings.len());
        }

        if !self.settings.compress_streams {
            return Ok(bytes);
        }

        match compress_pdf(&bytes) {
            Ok(compressed) => {
                log::debug!("Compressed PDF from {} to {} bytes", bytes.len(), compressed.len());
                Ok(compressed)
            }
            Err(e) => {
                log::warn!("{}; writing uncompressed output", e);
                Ok(bytes)
            }
        }
    }

    /// Render and write to `path`
    pub fn write(&self, document: &LaidOutDocument, path: &Path) -> Result<(), RenderError> {
        let bytes = self.render(document)?;
        fs::write(path, bytes)?;
        log::info!("Wrote {} page(s) to {}", document.page_count(), path.display());
        Ok(())
    }

    fn render_page(&self, layer: &mut LayerBuilder, page: &LaidOutPage) {
        let template = self.templates.get(page.template);

        for region in &template.backgrounds {
            layer.set_fill_color(region.color.clone());
            layer.add_rect(&region.rect, PaintMode::Fill);
        }

        for placement in &page.placements {
            placement.flowable.render(layer, &placement.rect);
        }

        if self.settings.debug_frames {
            layer.save_graphics_state();
            layer.set_outline_color(DEBUG_FRAME_COLOR);
            layer.set_outline_thickness(0.5);
            for frame in &template.frames {
                layer.add_rect(&frame.rect, PaintMode::Stroke);
            }
            layer.restore_graphics_state();
        }
    }
}
