//! End-to-end smoke tests for the Spinweb CLI pipeline.

use std::fs;

use tempfile::tempdir;

use spinweb_cli::Args;

/// Input selecting a level for every parameter of the default taxonomy.
const COMPLETE_INPUT: &str = r#"
title = "Mijn Spiderweb"

[niveaus]
"kennis jongerenparticipatie" = "start"
"participatief proces" = "basis"
"samenwerken jongeren" = "gevorderd"
"governance" = "expert"
"cultuur" = "basis"
"werkprocessen" = "start"
"netwerk" = "gevorderd"
"afspraken & randvoorwaarden" = "basis"
"kwaliteit werk" = "expert"
"verbinding" = "start"
"diverse manieren" = "basis"
"in staat stellen" = "gevorderd"
"#;

/// Reads the pixel dimensions from a PNG IHDR chunk.
fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG file");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

fn args(input: &str, output: &str, svg: Option<String>) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        svg,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_complete_input_produces_png_at_canvas_size() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.toml");
    let output_path = temp_dir.path().join("spiderweb.png");
    fs::write(&input_path, COMPLETE_INPUT).expect("Failed to write input");

    let args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        None,
    );
    spinweb_cli::run(&args).expect("Pipeline should succeed on complete input");

    let bytes = fs::read(&output_path).expect("PNG output should exist");
    assert_eq!(png_dimensions(&bytes), (1200, 800));
}

#[test]
fn e2e_svg_and_png_both_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.toml");
    let png_path = temp_dir.path().join("out.png");
    let svg_path = temp_dir.path().join("out.svg");
    fs::write(&input_path, COMPLETE_INPUT).expect("Failed to write input");

    let args = args(
        &input_path.to_string_lossy(),
        &png_path.to_string_lossy(),
        Some(svg_path.to_string_lossy().to_string()),
    );
    spinweb_cli::run(&args).expect("Pipeline should succeed");

    let svg = fs::read_to_string(&svg_path).expect("SVG output should exist");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Mijn Spiderweb"));
    assert!(png_path.exists());
}

#[test]
fn e2e_incomplete_input_fails_with_missing_parameters() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.toml");
    let output_path = temp_dir.path().join("spiderweb.png");
    fs::write(&input_path, "[niveaus]\n\"governance\" = \"basis\"\n")
        .expect("Failed to write input");

    let args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        None,
    );
    let result = spinweb_cli::run(&args);

    let err = result.expect_err("Gated mode must block incomplete input");
    assert!(err.to_string().contains("missing level"));
    assert!(!output_path.exists());
}

#[test]
fn e2e_unknown_level_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.toml");
    fs::write(&input_path, "[niveaus]\n\"governance\" = \"legendarisch\"\n")
        .expect("Failed to write input");

    let args = args(&input_path.to_string_lossy(), "unused.png", None);
    let result = spinweb_cli::run(&args);
    assert!(result.is_err());
}

#[test]
fn e2e_missing_input_file_fails() {
    let args = args("does-not-exist.toml", "unused.png", None);
    assert!(spinweb_cli::run(&args).is_err());
}
