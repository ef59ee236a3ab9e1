/// One-shot catalog artifact generator
///
/// Scans a recipes directory and writes the JSON artifact consumed by the
/// gallery, so the wall can start from a precomputed catalog instead of a
/// live scan.
///
/// Usage: generate_catalog [source-dir] [output-file]

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;

use recipe_wall::catalog::{self, artifact, scan};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(catalog::default_recipes_dir);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| source.join(artifact::ARTIFACT_FILE_NAME));

    // Unlike the in-app loader, a missing source directory is an error here
    if !source.is_dir() {
        eprintln!("❌ Recipes directory not found: {}", source.display());
        return ExitCode::FAILURE;
    }

    let catalog = scan::scan_dir(&source);

    if let Err(e) = artifact::write_artifact(&output, &catalog) {
        eprintln!("❌ Failed to write artifact: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "✅ Generated {} recipes → {} ({})",
        catalog.len(),
        output.display(),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
    );
    ExitCode::SUCCESS
}
