use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use cv_composer::cli::Args;
use cv_composer::config::Settings;
use cv_composer::model::ResumeContent;
use cv_composer::parser::parse_content;
use cv_composer::render::ResumeRenderer;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read content, falling back to the built-in placeholder résumé
    let content = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            parse_content(&text)
                .with_context(|| format!("Failed to parse content file: {}", path.display()))?
        }
        None => {
            log::info!("No content file given; using built-in content");
            ResumeContent::default()
        }
    };

    log::info!(
        "Composing résumé for {} ({} sections)",
        content.name,
        content.sections.len()
    );

    let settings = Settings::from_args(&args).with_title(content.name.clone());
    let output_path = args.output_path();

    let renderer = ResumeRenderer::new(settings);
    let pdf_data = renderer
        .render(&content)
        .with_context(|| "Failed to generate résumé PDF")?;

    // Write output
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}
