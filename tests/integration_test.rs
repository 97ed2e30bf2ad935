use std::fs;
use std::path::{Path, PathBuf};

use cv_composer::compress::{default_output_path, GhostscriptCompressor};
use cv_composer::config::Settings;
use cv_composer::error::{CompressError, ConfigError, RenderError};
use cv_composer::model::ResumeContent;
use cv_composer::parser::parse_content;
use cv_composer::render::layouts::resume_templates;
use cv_composer::render::{DocumentRenderer, LayoutEngine, Story};
use cv_composer::{render_resume, TemplateKind};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture() -> ResumeContent {
    let text = fs::read_to_string(fixtures_path().join("resume.txt"))
        .expect("Failed to read content fixture");
    parse_content(&text).expect("Failed to parse content fixture")
}

fn page_count(pdf_bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(pdf_bytes).expect("Generated PDF should load");
    doc.get_pages().len()
}

#[test]
fn test_empty_story_renders_one_page() {
    let settings = Settings::default();
    let templates = resume_templates(&settings).unwrap();

    let laid_out = LayoutEngine::new(&templates).build(Story::new()).unwrap();
    assert_eq!(laid_out.page_count(), 1);
    assert_eq!(laid_out.placements().count(), 0);

    let pdf_bytes = DocumentRenderer::new(&templates, &settings)
        .render(&laid_out)
        .expect("Failed to render empty story");
    assert!(pdf_bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&pdf_bytes), 1);
}

#[test]
fn test_fixture_renders_to_single_page() {
    let content = load_fixture();
    assert_eq!(content.sections.len(), 3);
    assert_eq!(content.sidebar.len(), 2);

    let settings = Settings::default().with_title(content.name.clone());
    let pdf_bytes = render_resume(&content, &settings).expect("Failed to render résumé");

    assert!(pdf_bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&pdf_bytes), 1);
}

#[test]
fn test_stream_compression_keeps_pages() {
    let content = load_fixture();
    let compressed = render_resume(&content, &Settings::default()).unwrap();
    let plain = render_resume(
        &content,
        &Settings {
            compress_streams: false,
            ..Settings::default()
        },
    )
    .unwrap();

    assert!(plain.starts_with(b"%PDF"));
    assert_eq!(page_count(&plain), page_count(&compressed));
}

#[test]
fn test_banded_template_renders() {
    let settings = Settings::default().with_template(TemplateKind::Banded);
    let pdf_bytes = render_resume(&load_fixture(), &settings).unwrap();
    assert!(pdf_bytes.starts_with(b"%PDF"));
    assert!(page_count(&pdf_bytes) >= 1);
}

#[test]
fn test_default_content_with_debug_frames() {
    let settings = Settings {
        debug_frames: true,
        ..Settings::default()
    };
    let pdf_bytes = render_resume(&ResumeContent::default(), &settings).unwrap();
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_page_break_to_undefined_template_fails() {
    let settings = Settings::default();
    let templates = resume_templates(&settings).unwrap();

    let mut story = Story::new();
    story.page_break_with("cover-letter");

    let err = LayoutEngine::new(&templates).build(story).unwrap_err();
    assert!(matches!(err, RenderError::UndefinedTemplate(ref id) if id == "cover-letter"));
}

#[test]
fn test_write_resume_to_disk() {
    let content = load_fixture();
    let renderer = cv_composer::ResumeRenderer::new(Settings::default());
    let output = Path::new(env!("CARGO_TARGET_TMPDIR")).join("fixture-resume.pdf");

    renderer.write(&content, &output).expect("Failed to write résumé");

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_compressed_output_name() {
    assert_eq!(
        default_output_path(Path::new("report.pdf")),
        PathBuf::from("report_compressed.pdf")
    );
}

#[test]
fn test_invalid_quality_fails_without_running_ghostscript() {
    let input = Path::new(env!("CARGO_TARGET_TMPDIR")).join("quality-input.pdf");
    fs::write(&input, b"%PDF-1.4\n").unwrap();

    let compressor = GhostscriptCompressor::new("/nonexistent/gs");
    let err = compressor
        .compress_with_preset(&input, None, "best")
        .unwrap_err();
    assert!(matches!(
        err,
        CompressError::Config(ConfigError::InvalidQuality(_))
    ));
    assert!(!default_output_path(&input).exists());
}
