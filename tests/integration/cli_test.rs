//! Integration tests for the jestsay binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{empty_xdg_home, fixtures_dir, load_fixture_str, visible};

/// Build a jestsay command isolated from the user's config and data dirs.
fn jestsay(xdg_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jestsay"));
    cmd.env("XDG_CONFIG_HOME", xdg_home.join("config"))
        .env("XDG_DATA_HOME", xdg_home.join("data"))
        .env_remove("JESTSAY_LOG");
    cmd
}

fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

/// The fixture with "hi" painted at the start of its second line.
fn expected_hi_on_second_line() -> String {
    let original = load_fixture_str("jester.ans");
    let mut lines: Vec<String> = original.split('\n').map(str::to_string).collect();
    lines[1] = "\x1b[1;38;2;1;2;3;48;2;20;20;20mhi\
                \x1b[1;38;2;200;0;0;48;2;20;20;20m####\
                \x1b[39;48;2;20;20;20m  \x1b[0m"
        .to_string();
    lines.join("\n")
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_options() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overlay witty quips"))
        .stdout(predicate::str::contains("--jester"))
        .stdout(predicate::str::contains("--no-bold"));
}

#[test]
fn version_reports_the_package_version() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jestsay"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn piped_quip_is_painted_onto_the_art() {
    let home = empty_xdg_home();
    let output = jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--x-offset", "0", "--y-offset", "1"])
        .args(["--width", "4", "--height", "1", "--align", "left"])
        .args(["--color", "#010203"])
        .write_stdin("hi\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        visible(&stdout),
        visible(&expected_hi_on_second_line())
    );
}

#[test]
fn offsets_are_clamped_into_the_image() {
    let home = empty_xdg_home();
    let output = jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--x-offset", "-7", "--y-offset", "1"])
        .args(["--width", "4", "--height", "1", "--align", "left"])
        .args(["--color", "#010203"])
        .write_stdin("hi")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        visible(&String::from_utf8(output).unwrap()),
        visible(&expected_hi_on_second_line())
    );
}

#[test]
fn random_quip_comes_from_quips_file_when_stdin_is_empty() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--x-offset", "0", "--y-offset", "0", "--width", "8"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("yo"));
}

#[test]
fn config_file_supplies_settings() {
    let home = empty_xdg_home();
    let config_dir = home.path().join("config").join("jestsay");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "jester = {:?}\nquips = {:?}\nx-offset = 0\ny-offset = 1\n\
             width = 4\nheight = 1\nalign = \"left\"\ncolor = \"#010203\"\n",
            fixture_arg("jester.ans"),
            fixture_arg("quips.txt"),
        ),
    )
    .unwrap();

    let output = jestsay(home.path())
        .write_stdin("hi")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        visible(&String::from_utf8(output).unwrap()),
        visible(&expected_hi_on_second_line())
    );
}

#[test]
fn no_bold_drops_the_bold_code() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--x-offset", "0", "--y-offset", "3", "--width", "4"])
        .args(["--height", "1", "--align", "left", "--color", "#fff", "--no-bold"])
        .write_stdin("ok")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;2;255;255;255;49mok"));
}

#[test]
fn output_ends_with_a_single_newline_for_unterminated_art() {
    let home = empty_xdg_home();
    let art = home.path().join("flat.ans");
    fs::write(&art, "....").unwrap();

    jestsay(home.path())
        .args(["--jester", art.to_str().unwrap()])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--x-offset", "0", "--y-offset", "0"])
        .args(["--width", "2", "--height", "1", "--align", "left"])
        .args(["--color", "#000"])
        .write_stdin("ab")
        .assert()
        .success()
        .stdout("\x1b[1;38;2;0;0;0;49mab\x1b[0m..\x1b[0m\n");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_art_file_is_fatal() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", "/nonexistent/jester.ans"])
        .args(["--quips", &fixture_arg("quips.txt")])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: ANSI art file not found: /nonexistent/jester.ans",
        ));
}

#[test]
fn missing_quips_file_is_fatal() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", "/nonexistent/quips.txt"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Quips file not found"));
}

#[test]
fn quips_file_without_quips_is_fatal() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("more_quips.txt")])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: No quips found"));
}

#[test]
fn invalid_color_is_fatal() {
    let home = empty_xdg_home();
    jestsay(home.path())
        .args(["--jester", &fixture_arg("jester.ans")])
        .args(["--quips", &fixture_arg("quips.txt")])
        .args(["--color", "#12"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Invalid hex color length: 2 (expected 3 or 6)",
        ));
}
