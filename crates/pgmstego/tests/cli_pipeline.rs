#![cfg(all(unix, feature = "cli"))]

use std::path::{Path, PathBuf};
use std::process::Command;

use pgmstego::pgm::{read_image, read_image_binary, write_image_ascii, Dimensions, GrayImage};
use pgmstego::Stage;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/pgmstego-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn pgmstego() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pgmstego"));
    for var in [
        "PGMSTEGO_CONFIG",
        "PGMSTEGO_COVER",
        "PGMSTEGO_SECRET",
        "PGMSTEGO_STEGO",
        "PGMSTEGO_EXTRACTED",
        "PGMSTEGO_WIDTH",
        "PGMSTEGO_HEIGHT",
    ] {
        cmd.env_remove(var);
    }
    cmd.arg("--log-level").arg("error");
    cmd
}

fn write_uniform(path: &Path, width: u32, height: u32, value: u8) {
    let image = GrayImage::filled(Dimensions::new(width, height), value)
        .expect("image should allocate");
    write_image_ascii(path, &image).expect("fixture should be writable");
}

/// Exit status as observed by the parent: the low 8 bits of the code.
fn observed(stage: Stage) -> Option<i32> {
    Some(stage.exit_code() & 0xFF)
}

fn run_in(dir: &Path, width: u32, height: u32) -> Command {
    let mut cmd = pgmstego();
    cmd.arg("--format")
        .arg("json")
        .arg("run")
        .arg("--cover")
        .arg(dir.join("cover.pgm"))
        .arg("--secret")
        .arg(dir.join("secret.pgm"))
        .arg("--stego")
        .arg(dir.join("stego.pgm"))
        .arg("--extracted")
        .arg(dir.join("extracted.pgm"))
        .arg("--width")
        .arg(width.to_string())
        .arg("--height")
        .arg(height.to_string());
    cmd
}

#[test]
fn run_embeds_and_extracts() {
    let dir = unique_temp_dir("run");
    write_uniform(&dir.join("cover.pgm"), 6, 5, 0xAB);
    write_uniform(&dir.join("secret.pgm"), 6, 5, 0xCD);

    let output = run_in(&dir, 6, 5).output().expect("run should start");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("run should emit json");
    assert_eq!(report["status"], "ok");
    assert_eq!(report["width"], 6);

    let stego_bytes = std::fs::read(dir.join("stego.pgm")).expect("stego should exist");
    assert!(stego_bytes.starts_with(b"P5\n# Created by LSB Steganography\n6 5\n255\n"));
    let stego = read_image_binary(dir.join("stego.pgm"), 6, 5).expect("stego should parse");
    assert!(stego.samples().iter().all(|&s| s == 0xAC));

    let extracted = read_image(dir.join("extracted.pgm"), 6, 5).expect("extracted should parse");
    assert!(extracted.samples().iter().all(|&s| s == 0xC0));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn oversized_cover_exits_with_allocate_cover_code() {
    let dir = unique_temp_dir("hugecover");

    let output = run_in(&dir, u32::MAX, u32::MAX).output().expect("run should start");

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(output.status.code(), observed(Stage::AllocateCover));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("allocating cover image failed"));
    assert!(!dir.join("stego.pgm").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn oversized_secret_exits_with_allocate_secret_code() {
    let dir = unique_temp_dir("hugesecret");
    write_uniform(&dir.join("cover.pgm"), 2, 2, 1);

    let output = run_in(&dir, 2, 2)
        .arg("--secret-width")
        .arg(u32::MAX.to_string())
        .arg("--secret-height")
        .arg(u32::MAX.to_string())
        .output()
        .expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::AllocateSecret));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_cover_exits_with_read_cover_code() {
    let dir = unique_temp_dir("nocover");

    let output = run_in(&dir, 4, 4).output().expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::ReadCover));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading cover image failed"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cover_dimension_mismatch_exits_with_read_cover_code() {
    let dir = unique_temp_dir("mismatch");
    write_uniform(&dir.join("cover.pgm"), 2, 2, 1);
    write_uniform(&dir.join("secret.pgm"), 4, 4, 1);

    let output = run_in(&dir, 4, 4).output().expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::ReadCover));
    assert!(String::from_utf8_lossy(&output.stderr).contains("dimensions mismatch"));
    assert!(!dir.join("stego.pgm").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn truncated_secret_exits_with_read_secret_code() {
    let dir = unique_temp_dir("truncated");
    write_uniform(&dir.join("cover.pgm"), 2, 2, 1);
    std::fs::write(dir.join("secret.pgm"), "P2\n2 2\n255\n1 2 3\n").expect("fixture");

    let output = run_in(&dir, 2, 2).output().expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::ReadSecret));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn secret_size_override_exits_with_verify_code() {
    let dir = unique_temp_dir("verify");
    write_uniform(&dir.join("cover.pgm"), 4, 4, 1);
    write_uniform(&dir.join("secret.pgm"), 2, 2, 1);

    let output = run_in(&dir, 4, 4)
        .arg("--secret-width")
        .arg("2")
        .arg("--secret-height")
        .arg("2")
        .output()
        .expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::VerifyDimensions));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_stego_exits_with_write_stego_code() {
    let dir = unique_temp_dir("nowrite");
    write_uniform(&dir.join("cover.pgm"), 2, 2, 1);
    write_uniform(&dir.join("secret.pgm"), 2, 2, 1);

    let output = run_in(&dir, 2, 2)
        .arg("--stego")
        .arg(dir.join("missing").join("stego.pgm"))
        .output()
        .expect("run should start");

    assert_eq!(output.status.code(), observed(Stage::WriteStego));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_file_drives_run() {
    let dir = unique_temp_dir("config");
    write_uniform(&dir.join("c.pgm"), 3, 3, 0x12);
    write_uniform(&dir.join("s.pgm"), 3, 3, 0x9F);
    let config = serde_json::json!({
        "cover_path": dir.join("c.pgm"),
        "secret_path": dir.join("s.pgm"),
        "stego_path": dir.join("st.pgm"),
        "extracted_path": dir.join("ex.pgm"),
        "width": 3,
        "height": 3,
    });
    let config_path = dir.join("pgmstego.json");
    std::fs::write(&config_path, config.to_string()).expect("config should be writable");

    let output = pgmstego()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("run should start");

    assert!(output.status.success());
    let extracted = read_image(dir.join("ex.pgm"), 3, 3).expect("extracted should parse");
    assert!(extracted.samples().iter().all(|&s| s == 0x90));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_config_is_usage_error() {
    let dir = unique_temp_dir("badconfig");
    let config_path = dir.join("pgmstego.json");
    std::fs::write(&config_path, "{ not json").expect("config should be writable");

    let output = pgmstego()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("run should start");

    assert_eq!(output.status.code(), Some(64));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn embed_then_extract_subcommands() {
    let dir = unique_temp_dir("split");
    write_uniform(&dir.join("cover.pgm"), 4, 2, 0x00);
    write_uniform(&dir.join("secret.pgm"), 4, 2, 0x70);

    let status = pgmstego()
        .arg("--format")
        .arg("pretty")
        .arg("embed")
        .arg(dir.join("cover.pgm"))
        .arg(dir.join("secret.pgm"))
        .arg(dir.join("stego.pgm"))
        .arg("--width")
        .arg("4")
        .arg("--height")
        .arg("2")
        .status()
        .expect("embed should start");
    assert!(status.success());

    let status = pgmstego()
        .arg("--format")
        .arg("pretty")
        .arg("extract")
        .arg(dir.join("stego.pgm"))
        .arg(dir.join("out.pgm"))
        .arg("--width")
        .arg("4")
        .arg("--height")
        .arg("2")
        .status()
        .expect("extract should start");
    assert!(status.success());

    let out = std::fs::read_to_string(dir.join("out.pgm")).expect("output should exist");
    assert_eq!(
        out,
        "P2\n# Created by LSB Steganography\n4 2\n255\n112 112 112 112\n112 112 112 112\n"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn extract_missing_stego_exits_with_read_stego_code() {
    let dir = unique_temp_dir("nostego");

    let output = pgmstego()
        .arg("extract")
        .arg(dir.join("stego.pgm"))
        .arg(dir.join("out.pgm"))
        .output()
        .expect("extract should start");

    assert_eq!(output.status.code(), observed(Stage::ReadStego));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn info_reports_header_as_json() {
    let dir = unique_temp_dir("info");
    write_uniform(&dir.join("img.pgm"), 7, 3, 5);

    let output = pgmstego()
        .arg("--format")
        .arg("json")
        .arg("info")
        .arg(dir.join("img.pgm"))
        .output()
        .expect("info should run");

    assert!(output.status.success());
    let header: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("info should emit json");
    assert_eq!(header["tag"], "P2");
    assert_eq!(header["width"], 7);
    assert_eq!(header["height"], 3);
    assert_eq!(header["maxval"], 255);
    assert_eq!(header["comment"], "Created by LSB Steganography");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_reports_package_version() {
    let output = pgmstego()
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("pgmstego {}", env!("CARGO_PKG_VERSION"))
    );
}
