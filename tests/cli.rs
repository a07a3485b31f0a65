use assert_cmd::Command;
use image::{GenericImageView, ImageBuffer, Rgb};
use predicates::prelude::*;

fn comphy() -> Command {
    let mut cmd = Command::cargo_bin("comphy").unwrap();
    cmd.env_remove("COMPHY_UI_BIN")
        .env_remove("COMPHY_GENERATOR_BIN")
        .env_remove("COMPHY_SETTINGS")
        .env_remove("COMPHY_LOG");
    cmd
}

#[test]
fn dry_run_prints_forwarded_commands() {
    let cases: &[(&[&str], &str)] = &[
        (&["start-ui"], "comphy-ui start\n"),
        (&["start-ui", "--gpu"], "comphy-ui start\n"),
        (&["start-ui", "--cpu"], "comphy-ui start --cpu\n"),
        (&["stop-ui"], "comphy-ui stop\n"),
        (&["status-ui"], "comphy-ui status\n"),
        (&["load-model", "sd15.ckpt"], "comphy-ui load_model sd15.ckpt\n"),
        (&["load-workflow", "flow.json"], "comphy-ui load_workflow flow.json\n"),
        (&["refresh-component", "vae"], "comphy-ui refresh vae\n"),
        (&["load-from-image", "shot.png"], "comphy-ui load_from_image shot.png\n"),
        (&["save-workflow", "saved.json"], "comphy-ui save_workflow saved.json\n"),
        (&["set-config", "paths.yaml"], "comphy-ui set_config paths.yaml\n"),
    ];
    for (args, expected) in cases {
        comphy()
            .arg("--dry-run")
            .args(*args)
            .assert()
            .success()
            .stdout(*expected);
    }
}

#[test]
fn gpu_and_cpu_flags_conflict() {
    comphy()
        .args(["--dry-run", "start-ui", "--gpu", "--cpu"])
        .assert()
        .failure();
}

#[test]
fn ui_program_can_be_overridden() {
    comphy()
        .args(["--dry-run", "--ui-bin", "/opt/comphy/comphy-ui", "status-ui"])
        .assert()
        .success()
        .stdout("/opt/comphy/comphy-ui status\n");

    comphy()
        .env("COMPHY_UI_BIN", "cui")
        .args(["--dry-run", "stop-ui"])
        .assert()
        .success()
        .stdout("cui stop\n");
}

#[test]
fn settings_file_supplies_programs() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("comphy.json");
    std::fs::write(&settings, r#"{ "generator_program": "sdgen" }"#).unwrap();

    comphy()
        .arg("--settings")
        .arg(&settings)
        .args(["--dry-run", "generate-image", "red fox", "640x480", "fox.png"])
        .assert()
        .success()
        .stdout(
            "sdgen generate --prompt \"red fox\" --width 640 --height 480 --output fox.png\n",
        );
}

#[test]
fn malformed_resolution_is_rejected() {
    comphy()
        .args(["--dry-run", "generate-image", "fox", "640by480", "fox.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}

#[test]
fn run_custom_accepts_a_single_string_or_tokens() {
    comphy()
        .args(["--dry-run", "run-custom", "comphy-ui queue --clear"])
        .assert()
        .success()
        .stdout("comphy-ui queue --clear\n");

    comphy()
        .args(["--dry-run", "run-custom", "comphy-ui", "queue", "--clear"])
        .assert()
        .success()
        .stdout("comphy-ui queue --clear\n");
}

#[cfg(unix)]
#[test]
fn relays_child_stdout_verbatim() {
    comphy()
        .args(["run-custom", "printf", "ready\\n"])
        .assert()
        .success()
        .stdout("ready\n");
}

#[cfg(unix)]
#[test]
fn failing_child_stderr_is_relayed_with_its_exit_code() {
    comphy()
        .args(["run-custom", "sh", "-c", "echo 'workflow missing' >&2; exit 4"])
        .assert()
        .code(4)
        .stdout("")
        .stderr("Error: workflow missing\n");
}

#[test]
fn missing_ui_binary_is_reported() {
    comphy()
        .args(["--ui-bin", "comphy-ui-not-installed-anywhere", "status-ui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to launch comphy-ui-not-installed-anywhere"));
}

#[test]
fn resize_image_writes_target_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tall.png");
    let output = dir.path().join("square.png");
    ImageBuffer::from_pixel(100, 200, Rgb([10u8, 20, 30]))
        .save(&input)
        .unwrap();

    comphy()
        .arg("resize-image")
        .arg(&input)
        .arg("1.0")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("200x200"));
    assert_eq!(image::open(&output).unwrap().dimensions(), (200, 200));
}

#[test]
fn resize_image_accepts_colon_ratios() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frame.png");
    let output = dir.path().join("frame.jpg");
    ImageBuffer::from_pixel(160, 160, Rgb([255u8, 255, 255]))
        .save(&input)
        .unwrap();

    comphy()
        .arg("resize-image")
        .arg(&input)
        .arg("16:9")
        .arg(&output)
        .assert()
        .success();
    assert_eq!(image::open(&output).unwrap().dimensions(), (284, 160));
}

#[test]
fn resize_image_rejects_non_positive_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    ImageBuffer::from_pixel(10, 10, Rgb([0u8, 0, 0]))
        .save(&input)
        .unwrap();

    comphy()
        .arg("resize-image")
        .arg(&input)
        .arg("-1")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("aspect ratio must be a positive number"));
    assert!(!output.exists());
}

#[test]
fn resize_image_reports_unreadable_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    comphy()
        .arg("resize-image")
        .arg(dir.path().join("missing.png"))
        .arg("1.5")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode image"));
    assert!(!output.exists());
}

#[test]
fn broken_settings_only_affect_dispatching_commands() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("broken.json");
    std::fs::write(&settings, "{ ui_program: ").unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    ImageBuffer::from_pixel(20, 10, Rgb([1u8, 2, 3]))
        .save(&input)
        .unwrap();

    comphy()
        .env("COMPHY_SETTINGS", &settings)
        .arg("resize-image")
        .arg(&input)
        .arg("1.0")
        .arg(&output)
        .assert()
        .success();
    assert_eq!(image::open(&output).unwrap().dimensions(), (20, 20));

    comphy()
        .env("COMPHY_SETTINGS", &settings)
        .args(["--dry-run", "status-ui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

#[cfg(unix)]
#[test]
fn relayed_failure_is_newline_terminated() {
    comphy()
        .args(["run-custom", "sh", "-c", "printf 'queue busy' >&2; exit 7"])
        .assert()
        .code(7)
        .stderr("Error: queue busy\n");
}

#[test]
fn resize_image_rejects_oversized_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    ImageBuffer::from_pixel(100, 100, Rgb([0u8, 0, 0]))
        .save(&input)
        .unwrap();

    comphy()
        .arg("resize-image")
        .arg(&input)
        .arg("2000000")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit"));
    assert!(!output.exists());
}
