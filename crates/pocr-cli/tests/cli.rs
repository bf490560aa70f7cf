use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn pocr(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocr").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("TESSERACT_CMD", "/nonexistent/tesseract");
    cmd
}

fn write_png(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("passport.png");
    image::GrayImage::from_pixel(20, 10, image::Luma([230]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_no_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    pocr(home.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: pocr <image_path>"));
}

#[test]
fn test_two_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    pocr(home.path())
        .args(["a.jpg", "b.jpg"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: pocr <image_path>"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    pocr(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("passport"));
}

#[test]
fn test_unreadable_image_yields_empty_envelope() {
    let home = TempDir::new().unwrap();
    let image = home.path().join("scan.jpg");
    std::fs::write(&image, b"not an image").unwrap();

    let output = pocr(home.path()).arg(&image).assert().success().get_output().stdout.clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["status_code"], 200);
    assert_eq!(json["message"], "");
    assert_eq!(json["success"], true);

    let data = json["data"].as_object().unwrap();
    assert_eq!(data.len(), 23);
    assert!(data.values().all(|v| v == ""));
}

#[test]
fn test_output_is_indented() {
    let home = TempDir::new().unwrap();
    let image = home.path().join("missing.jpg");

    pocr(home.path())
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"data\": {\n    \"doe\": \"\""));
}

#[test]
fn test_output_file() {
    let home = TempDir::new().unwrap();
    let image = home.path().join("missing.jpg");
    let out = home.path().join("result.json");

    pocr(home.path())
        .arg(&image)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["success"], true);
}

#[test]
fn test_missing_ocr_binary_fails() {
    let home = TempDir::new().unwrap();
    let image = write_png(home.path());

    pocr(home.path()).arg(&image).assert().failure();
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.json");
    std::fs::write(&config, "{ not json").unwrap();

    pocr(home.path())
        .arg("missing.jpg")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn test_fake_engine_output_is_extracted() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let image = write_png(home.path());

    let script = home.path().join("fake-tesseract");
    std::fs::write(
        &script,
        "#!/bin/sh\n\
         cat > /dev/null\n\
         echo 'P<INDSMITH<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<'\n\
         echo 'A1234567<8IND9001017M3001015<<<<<<<<<<<<<<04'\n\
         echo \"Father's Name: ROBERT SMITH\"\n",
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = pocr(home.path())
        .env("TESSERACT_CMD", &script)
        .arg(&image)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["data"]["surname"], "SMITH");
    assert_eq!(json["data"]["given_name"], "JOHN");
    assert_eq!(json["data"]["passport_num"], "A1234567");
    assert_eq!(json["data"]["dob"], "1990-01-01");
    assert_eq!(json["data"]["doe"], "2030-01-01");
    assert_eq!(json["data"]["gender"], "MALE");
    assert_eq!(json["data"]["nationality"], "INDIAN");
}
