use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const FEMALE_BODY: &str = r#"<?xml version="1.0" encoding="US-ASCII" standalone="yes"?>
<linden_genepool version="1.0">
  <archetype name="???">
    <param id="80" name="male" value="0.00" u8="0" wearable="shape"/>
    <param id="33" name="height" value="0.57" u8="200" wearable="shape"/>
    <param id="649" name="muscular_torso" value="1.40" u8="100" wearable="shape"/>
    <param id="99" name="eye_color" value="0.50" u8="128" wearable="eyes"/>
    <param id="4000" name="not_a_slider" value="0.00" u8="7" wearable="shape"/>
  </archetype>
</linden_genepool>
"#;

fn write_fixture(xml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(xml.as_bytes()).expect("failed to write fixture");
    file
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_get-sliders"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SHAPE_XML")
        .output()
        .expect("failed to run get-sliders")
}

fn param_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split("id=\"").nth(1))
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn body_xml_keeps_gender_and_body_params() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--body", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(stdout.contains("<linden_genepool version=\"1.0\">"));
    assert!(stdout.contains("  <archetype name=\"???\">"));
    assert!(stdout.contains(
        "    <param id=\"33\" name=\"height\" value=\"0.57\" u8=\"200\" wearable=\"shape\"/>"
    ));
    assert_eq!(param_ids(&stdout), ["80", "33", "649"]);
}

#[test]
fn body_text_prints_scaled_values() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--body", "--text", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines, ["body: 78,", "torso: 39,", "legs:"]);
}

#[test]
fn default_mode_drops_gender_param() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&[&path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(param_ids(&stdout), ["33", "649", "99"]);
}

#[test]
fn eyes_text_prints_eye_color() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--eyes", "--text", &path]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "eyes: 50,\n");
}

#[test]
fn missing_gender_param_is_not_fatal() {
    let fixture = write_fixture(
        r#"<linden_genepool version="1.0"><archetype name="x">
            <param id="33" u8="255"/>
        </archetype></linden_genepool>"#,
    );
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--body", "--text", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("body: 100,\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gender param not found"));
}

#[test]
fn output_can_be_filtered_again() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let first = run_cli(&[&path]);
    assert!(first.status.success());

    let refiltered = write_fixture(&String::from_utf8_lossy(&first.stdout));
    let refiltered_path = refiltered.path().to_string_lossy().to_string();
    let second = run_cli(&[&refiltered_path]);
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_input_fails_without_output() {
    let output = run_cli(&["/nonexistent/dir/shape.xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn malformed_input_fails() {
    let fixture = write_fixture("<linden_genepool><archetype></linden_genepool>");
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&[&path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn quiet_suppresses_warnings() {
    let fixture = write_fixture(r#"<a><param id="33" u8="1"/></a>"#);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--quiet", &path]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn mode_flags_are_exclusive() {
    let fixture = write_fixture(FEMALE_BODY);
    let path = fixture.path().to_string_lossy().to_string();

    let output = run_cli(&["--body", "--hair", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_path_argument_fails() {
    let output = run_cli(&["--body"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn help_succeeds() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--text"));
}
