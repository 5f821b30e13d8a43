//! Runs the command line tool end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const DEJAVU_SANS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/DejaVuSans.ttf");

fn textcard(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("textcard").unwrap();
    cmd.env("RUST_LOG", "info").arg("--config").arg(config);
    cmd
}

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("textcard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fontpath"))
        .stdout(predicate::str::contains("--bgimg"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--text"));
}

#[test]
fn test_missing_font_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let output = dir.path().join("out.png");

    textcard(&config)
        .arg("--text")
        .arg("hello")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Success").not())
        .stderr(predicate::str::contains("font must be configured"));

    assert!(!output.exists());
}

#[test]
fn test_unreadable_font_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let output = dir.path().join("out.png");

    textcard(&config)
        .arg("--fontpath")
        .arg(dir.path().join("nope.ttf"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.ttf"));

    assert!(!output.exists());
}

#[test]
fn test_bad_color_flag_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    textcard(&config)
        .arg("--text-color")
        .arg("#ff00")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_bad_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[canvas\nwidth = ").unwrap();

    textcard(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings"));
}

#[test]
fn test_color_flags_override_bad_file_colors() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[canvas]\nbackground_color = \"nope\"\ntext_color = \"#12\"\n",
    )
    .unwrap();

    // Without a font the run now fails on the font, not on the file colors
    textcard(&config)
        .arg("--bg-color")
        .arg("#000")
        .arg("--text-color")
        .arg("#fff")
        .assert()
        .failure()
        .stderr(predicate::str::contains("font must be configured"))
        .stderr(predicate::str::contains("invalid hex color").not());

    let output = dir.path().join("out.png");
    textcard(&config)
        .arg("--fontpath")
        .arg(DEJAVU_SANS)
        .arg("--bg-color")
        .arg("#000")
        .arg("--text-color")
        .arg("#fff")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    assert!(output.exists());
}

#[test]
fn test_bad_file_color_fails_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[canvas]\nbackground_color = \"nope\"\n").unwrap();

    textcard(&config)
        .arg("--fontpath")
        .arg(DEJAVU_SANS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_renders_jpeg_with_real_font() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[canvas]\nwidth = 600\nheight = 315\n").unwrap();
    let output = dir.path().join("card.jpg");

    textcard(&config)
        .arg("--fontpath")
        .arg(DEJAVU_SANS)
        .arg("--text")
        .arg("hello")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success"));

    let image = image::open(&output).unwrap();
    assert_eq!((image.width(), image.height()), (600, 315));
}
