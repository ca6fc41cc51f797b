use assert_cmd::Command;
use std::fs;

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("svgplot-cli"))
}

#[test]
fn cli_renders_stdin_csv_to_stdout() {
    let output = cli()
        .args(["--width", "200", "--height", "100"])
        .write_stdin("1,1\n2,2\n3,3\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let svg = String::from_utf8(output).expect("utf8 svg");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let root = doc.root_element();
    assert_eq!(root.attribute("width"), Some("200.00"));
    assert_eq!(root.attribute("height"), Some("100.00"));

    let path = root
        .children()
        .find(|n| n.tag_name().name() == "path")
        .expect("plotted path");
    assert_eq!(path.attribute("d"), Some("M0.00 0.00 L100.00 50.00 L200.00 100.00 "));
    assert_eq!(
        root.children().filter(|n| n.tag_name().name() == "line").count(),
        4 + 9
    );
}

#[test]
fn cli_writes_out_file_from_json_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("series.json");
    let out = tmp.path().join("plot.svg");
    fs::write(&input, r#"[[0, 0], [1, 4], {"x": 2, "y": 2}, [3, 8]]"#).expect("write input");

    cli()
        .args([
            "--sample",
            "2",
            "--reverse",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let path = doc
        .root_element()
        .children()
        .find(|n| n.tag_name().name() == "path")
        .expect("plotted path");
    // sampled to (0,0), (2,2) then reversed
    assert_eq!(path.attribute("d"), Some("M800.00 600.00 L0.00 0.00 "));
}

#[test]
fn cli_applies_config_and_stride_override() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("style.json");
    fs::write(
        &config,
        r#"{"line": {"stroke": "green"}, "grid": {"stride": 10, "presentation": {"opacity": "0.3"}}}"#,
    )
    .expect("write config");

    let output = cli()
        .args([
            "--width",
            "100",
            "--height",
            "100",
            "--stride",
            "50",
            "--config",
            config.to_string_lossy().as_ref(),
        ])
        .write_stdin("0 0\n10 10\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let svg = String::from_utf8(output).expect("utf8 svg");
    assert!(svg.contains(r#"stroke="green""#));
    assert_eq!(svg.matches(r#"opacity="0.3""#).count(), 2);
}

#[test]
fn cli_fails_on_empty_input() {
    let output = cli()
        .write_stdin("# nothing here\n")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("point sequence is empty"), "stderr: {stderr}");
}

#[test]
fn cli_fails_on_zero_sample_stride() {
    cli()
        .args(["--sample", "0"])
        .write_stdin("1,1\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_rejects_stride_that_would_flood_the_grid() {
    let output = cli()
        .args(["--stride", "1e-9"])
        .write_stdin("0,0\n1,1\n")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("grid stride"), "stderr: {stderr}");
}

#[test]
fn cli_help_exits_successfully() {
    cli().arg("--help").assert().success();
    cli().arg("--nope").assert().failure().code(2);
}
