use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn readme2html() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("readme2html"))
}

#[test]
fn converts_readme_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), include_str!("fixtures/readme.md")).unwrap();

    readme2html()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("✅ README.md converted to index.html\n");

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<h1>Project</h1>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("class=\"highlight\""));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), include_str!("fixtures/readme.md")).unwrap();

    readme2html().current_dir(dir.path()).assert().success();
    let first = fs::read(dir.path().join("index.html")).unwrap();
    readme2html().current_dir(dir.path()).assert().success();
    let second = fs::read(dir.path().join("index.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = tempdir().unwrap();

    readme2html()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("README.md"));

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn missing_input_does_not_modify_existing_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "keep me").unwrap();

    readme2html().current_dir(dir.path()).assert().failure();

    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        "keep me"
    );
}

#[test]
fn empty_input_produces_page_shell() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();

    readme2html().current_dir(dir.path()).assert().success();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<head>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<body>\n</body>"));
}

#[test]
fn paths_title_and_theme_can_be_overridden() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("docs.md"), "# Docs\n").unwrap();

    readme2html()
        .current_dir(dir.path())
        .args(["docs.md", "-o", "docs.html"])
        .args(["--title", "Manual", "--theme", "base16-ocean.dark"])
        .assert()
        .success()
        .stdout(contains("docs.md converted to docs.html"));

    let html = fs::read_to_string(dir.path().join("docs.html")).unwrap();
    assert!(html.contains("<title>Manual</title>"));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn config_file_is_applied() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "```\nplain\n```\n").unwrap();
    fs::write(
        dir.path().join("site.toml"),
        "[highlight]\ncss_class = \"codehilite\"\n",
    )
    .unwrap();

    readme2html()
        .current_dir(dir.path())
        .args(["-c", "site.toml"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<div class=\"codehilite\">"));
    assert!(html.contains(".codehilite {"));
}

#[test]
fn bad_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# x\n").unwrap();
    fs::write(dir.path().join("site.toml"), "[extensions]\ntables = 3\n").unwrap();

    readme2html()
        .current_dir(dir.path())
        .args(["-c", "site.toml"])
        .assert()
        .failure()
        .stderr(contains("invalid config"));

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn unknown_theme_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# x\n").unwrap();

    readme2html()
        .current_dir(dir.path())
        .args(["--theme", "nope"])
        .assert()
        .failure()
        .stderr(contains("unknown highlight theme `nope`"));
}

#[test]
fn lists_themes() {
    readme2html()
        .arg("--list-themes")
        .assert()
        .success()
        .stdout(contains("InspiredGitHub"));
}
