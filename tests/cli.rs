use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn img2svg() -> Command {
    Command::cargo_bin("img2svg").unwrap()
}

#[test]
fn outputs_version() {
    img2svg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("img2svg "));
}

#[test]
fn help_flags_exit_zero() {
    for flag in ["-h", "-?", "--help"] {
        img2svg()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("--fill-opacity"));
    }
}

#[test]
fn no_arguments_prints_help() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--conf"));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn writes_default_outfile() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("out.svg"));

    let svg = fs::read_to_string(dir.path().join("out.svg")).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 240 160""#));
    assert!(!svg.contains("<a "));
}

#[test]
fn writes_regions_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plan.svg");

    img2svg()
        .arg(fixture("floorplan.png"))
        .arg("-c")
        .arg(fixture("regions.txt"))
        .arg("-o")
        .arg(&out)
        .args(["-C", "#00ff00", "-P", "0.6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regions.txt"))
        .stdout(predicate::str::contains("plan.svg"));

    let svg = fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<a ").count(), 5);
    assert!(svg.contains(r##"fill="#00ff00""##));
    assert!(svg.contains("= 0.6;"));
}

#[test]
fn flags_override_style_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plan.svg");

    img2svg()
        .arg(fixture("floorplan.png"))
        .arg("--conf")
        .arg(fixture("regions.txt"))
        .arg("--outfile")
        .arg(&out)
        .arg("--style")
        .arg(fixture("style.toml"))
        .args(["--fill-color", "navy"])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"fill="navy""#));
    assert!(svg.contains(r#"target="_blank""#));
    assert!(svg.contains("= 0.5;"));
}

#[test]
fn verbose_prints_records() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .arg("-c")
        .arg(fixture("regions.txt"))
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen"));
}

#[test]
fn missing_conf_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .args(["-c", "no_such_regions.txt"])
        .assert()
        .success();
    assert!(dir.path().join("out.svg").exists());
}

#[test]
fn missing_image_exits_3() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg("missing.png")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.png"));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn undecodable_image_exits_4() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg(fixture("not_an_image.png"))
        .assert()
        .code(4);
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn malformed_conf_exits_5() {
    let dir = tempfile::tempdir().unwrap();
    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .arg("-c")
        .arg(fixture("short_line.txt"))
        .assert()
        .code(5)
        .stderr(predicate::str::contains("expected 6 fields"));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn non_utf8_conf_exits_5() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("regions.txt");
    fs::write(&conf, b"0\t0\t10\t10\tDoor\thttp://a\n\xff\xfe\t1\n").unwrap();

    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .arg("-c")
        .arg(&conf)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("regions.txt:2"))
        .stderr(predicate::str::contains("not valid UTF-8"));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn malformed_conf_after_non_ascii_line_shows_context() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("regions.txt");
    fs::write(
        &conf,
        "0\t0\t1\t1\tÜbersicht über Küche …\thttp://x/ü\n1\t2\t3\t4\tonly five\n",
    )
    .unwrap();

    img2svg()
        .current_dir(dir.path())
        .arg(fixture("floorplan.png"))
        .arg("-c")
        .arg(&conf)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("regions.txt"))
        .stderr(predicate::str::contains("only five"))
        .stderr(predicate::str::contains("expected 6 fields"));
}

#[test]
fn unwritable_outfile_exits_6() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing_dir/out.svg");
    img2svg()
        .arg(fixture("floorplan.png"))
        .arg("-o")
        .arg(&out)
        .assert()
        .code(6);
}

#[test]
fn invalid_opacity_is_usage_error() {
    img2svg()
        .arg(fixture("floorplan.png"))
        .args(["-P", "2.5"])
        .assert()
        .code(2);
}
