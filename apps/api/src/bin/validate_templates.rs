//! Standalone check that every catalog template asset carries the full
//! placeholder contract. Reads assets from a local directory (deployments run
//! this before uploading assets to object storage) and exits nonzero if any
//! template is unusable.
//!
//! Usage: `validate_templates` with `TEMPLATES_DIR` pointing at the directory
//! holding `modern.docx`, `classic.docx`, and `executive.docx`
//! (default `./templates`).

use std::path::PathBuf;
use std::process::ExitCode;

use api::docx::validate::{validate_template, TemplateReport};
use api::templates::RESUME_TEMPLATES;

fn main() -> ExitCode {
    let dir = PathBuf::from(
        std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "./templates".to_string()),
    );

    println!("Validating template assets in {}\n", dir.display());

    let mut all_valid = true;
    for info in &RESUME_TEMPLATES {
        let filename = format!("{}.docx", info.id.as_str());
        let path = dir.join(&filename);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                println!("✗ {filename}: cannot read ({e})");
                all_valid = false;
                continue;
            }
        };

        match validate_template(info.id.as_str(), &bytes) {
            Ok(report) => {
                print_report(&report);
                all_valid &= report.valid;
            }
            Err(e) => {
                println!("✗ {filename}: {e}");
                all_valid = false;
            }
        }
    }

    if all_valid {
        println!("\nAll templates valid.");
        ExitCode::SUCCESS
    } else {
        println!("\nValidation failed.");
        ExitCode::FAILURE
    }
}

fn print_report(report: &TemplateReport) {
    if report.valid {
        println!("✓ {}: all required tags present", report.template);
    } else {
        println!("✗ {}:", report.template);
        for tag in &report.missing_single_tags {
            println!("    missing tag {{{{{tag}}}}}");
        }
        for block in &report.incomplete_blocks {
            let mut problems = Vec::new();
            if !block.has_open {
                problems.push("no opening tag");
            }
            if !block.has_close {
                problems.push("no closing tag");
            }
            if !block.has_item_tag {
                problems.push("no {{.}} item tag");
            }
            println!("    incomplete block '{}': {}", block.tag, problems.join(", "));
        }
    }
    for block in &report.optional_blocks_present {
        println!("    optional block {{{{#{block}}}}} present");
    }
}
