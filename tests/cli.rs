use std::fs;
use std::path::Path;

use anonymat::{Colour, PixelBuffer};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Directory with a 10x10 image (left half red, right half blue) and an order file.
fn workspace(order: &str) -> TempDir {
    let dir = tempdir().unwrap();

    let mut image = PixelBuffer::filled(10, 10, Colour::RED).unwrap();
    for x in 5..10 {
        for y in 0..10 {
            image.set_pixel(x, y, Colour::BLUE).unwrap();
        }
    }
    image.save(&dir.path().join("in.png")).unwrap();

    fs::write(dir.path().join("order.json"), order).unwrap();
    dir
}

fn anonymat() -> Command {
    Command::cargo_bin("anonymat").unwrap()
}

const ORDER: &str = r#"{
  "in": "in.png",
  "out": "out.png",
  "shapes": [
    {"type": "rectangle", "c1x": 3, "c1y": 0, "c2x": 7, "c2y": 10}
  ]
}"#;

fn pixel(path: &Path, x: u32, y: u32) -> Colour {
    PixelBuffer::read(path).unwrap().get_pixel(x, y).unwrap()
}

#[test]
fn outputs_tool_name() {
    anonymat()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("anonymat "));
}

#[test]
fn run_positional_order() {
    let dir = workspace(ORDER);

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved"));

    let out = dir.path().join("out.png");
    assert_eq!(pixel(&out, 3, 0), Colour::rgb(127, 0, 127));
    assert_eq!(pixel(&out, 2, 0), Colour::RED);
    assert_eq!(pixel(&out, 7, 9), Colour::BLUE);
}

#[test]
fn run_subcommand_with_json_summary() {
    let dir = workspace(ORDER);

    anonymat()
        .args(["run", "--json"])
        .arg(dir.path().join("order.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"applied\": 1"))
        .stdout(predicate::str::contains("\"skipped\": 0"));
}

#[test]
fn quiet_run_prints_nothing() {
    let dir = workspace(ORDER);

    anonymat()
        .arg("--quiet")
        .arg(dir.path().join("order.json"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("out.png").exists());
}

#[test]
fn order_path_from_stdin() {
    let dir = workspace(ORDER);
    let order = dir.path().join("order.json");

    anonymat()
        .write_stdin(format!("{}\n", order.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Order file:"));

    assert!(dir.path().join("out.png").exists());
}

#[test]
fn missing_shapes_fails_without_output() {
    let dir = workspace(r#"{"in": "in.png", "out": "out.png"}"#);

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("anonymat::order"));

    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn extraneous_key_on_known_shape_fails() {
    let dir = workspace(
        r#"{"in": "in.png", "out": "out.png",
            "shapes": [{"type": "circle", "x": 1, "y": 1, "r": 1, "z": 0}]}"#,
    );

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1);

    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn unknown_shape_and_key_are_warnings() {
    let dir = workspace(
        r#"{"in": "in.png", "out": "out.png", "note": "x",
            "shapes": [
              {"type": "star", "points": 5},
              {"type": "circle", "x": 2, "y": 2, "r": 1}
            ]}"#,
    );

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown-key"))
        .stderr(predicate::str::contains("unknown-shape"))
        .stderr(predicate::str::contains("Skipped"));

    // trace lines go away with -q, the parser warnings stay
    anonymat()
        .arg("-q")
        .arg(dir.path().join("order.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown-shape"))
        .stderr(predicate::str::contains("Skipped").not());

    assert!(dir.path().join("out.png").exists());
}

#[test]
fn warnings_printed_before_fatal_error() {
    let dir = workspace(
        r#"{"note": 1, "in": "in.png", "out": "out.png",
            "shapes": [{"type": "star"}, {"type": "circle", "x": 1}]}"#,
    );

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown-key"))
        .stderr(predicate::str::contains("Unknown key 'note'"))
        .stderr(predicate::str::contains("Unknown shape 'star' (shape #1)"))
        .stderr(predicate::str::contains("must be a number (shape #2)"));

    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn check_prints_warnings_of_failed_order() {
    let dir = workspace(r#"{"note": 1, "in": "in.png", "shapes": []}"#);

    anonymat()
        .arg("check")
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed"))
        .stderr(predicate::str::contains("Unknown key 'note'"));
}

#[test]
fn missing_input_image_fails() {
    let dir = workspace(r#"{"in": "nope.png", "out": "out.png", "shapes": []}"#);

    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("anonymat::image::read"));
}

#[test]
fn runs_are_bit_identical() {
    let dir = workspace(
        r#"{"in": "in.png", "out": "out.png",
            "shapes": [
              {"type": "ellipse", "x": 5, "y": 5, "a": 4, "b": 2.5},
              {"type": "circle", "x": 4.5, "y": 7, "r": 2.2}
            ]}"#,
    );
    let order = dir.path().join("order.json");
    let out = dir.path().join("out.png");

    anonymat().arg(&order).assert().success();
    let first = fs::read(&out).unwrap();
    anonymat().arg(&order).assert().success();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn check_directory() {
    let dir = workspace(ORDER);
    fs::write(dir.path().join("other.yaml"), "in: a.png\nout: b.png\nshapes: []\n").unwrap();

    anonymat()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Checked"));

    // check never touches images
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn check_malformed_fails() {
    let dir = workspace(r#"{"in": "in.png", "shapes": []}"#);

    anonymat()
        .arg("check")
        .arg(dir.path().join("order.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed"));
}

#[test]
fn compare_identical_images() {
    let dir = workspace(ORDER);
    let image = dir.path().join("in.png");

    anonymat()
        .arg("compare")
        .arg(&image)
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("Similarity: 1.000000"))
        .stdout(predicate::str::contains("Identical: yes"));
}

#[test]
fn compare_output_with_input() {
    let dir = workspace(ORDER);
    anonymat()
        .arg(dir.path().join("order.json"))
        .assert()
        .success();

    anonymat()
        .args(["compare", "--json"])
        .arg(dir.path().join("in.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identical\": false"))
        .stdout(predicate::str::contains("\"differing_pixels\": 40"));
}

#[test]
fn completions_bash() {
    anonymat()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anonymat"));
}
