use assert_matches::assert_matches;
use dladm_facts::{
    gather, parse_table, Category, CommandOutput, CommandRunner, DladmFactsConfig, Error,
};
use miette::IntoDiagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

fn fixture(name: &str) -> String {
    fs::read_to_string(Path::new("tests/fixtures").join(name))
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", name, e))
}

/// Answers `dladm show-<x>` with `tests/fixtures/show-<x>.txt`.
struct FixtureRunner;

impl CommandRunner for FixtureRunner {
    fn run(&self, program: &Path, args: &[String]) -> dladm_facts::Result<CommandOutput> {
        assert_eq!(program, Path::new("/usr/sbin/dladm"));
        assert_eq!(args.len(), 1);
        Ok(CommandOutput {
            status: Some(0),
            stdout: fixture(&format!("{}.txt", args[0])),
            stderr: String::new(),
        })
    }
}

fn config() -> DladmFactsConfig {
    DladmFactsConfig {
        dladm_path: Some(PathBuf::from("/usr/sbin/dladm")),
        check_platform: false,
        ..Default::default()
    }
}

#[test]
fn test_every_category_matches_its_schema() {
    for category in Category::iter() {
        let raw = fixture(&format!("{}.txt", category.subcommand()));
        let data_lines = raw.lines().count() - 1;

        let facts = gather(category, &FixtureRunner, &config())
            .unwrap_or_else(|e| panic!("{} failed: {:?}", category, e));
        let records = facts.records();

        assert_eq!(records.len(), data_lines, "{}", category);
        for record in records {
            assert_eq!(
                record.keys().collect::<Vec<_>>(),
                category.schema().fields.to_vec(),
                "{}",
                category
            );
        }
    }
}

#[test]
fn test_records_keep_dladm_order() {
    let records = parse_table(Category::Phys, &fixture("show-phys.txt")).unwrap();
    let links: Vec<_> = records.iter().filter_map(|r| r.get("LINK")).collect();
    assert_eq!(links, vec!["net0", "net1", "net2"]);
}

#[test]
fn test_values_are_passed_through() {
    let records = parse_table(Category::Ether, &fixture("show-ether.txt")).unwrap();
    assert_eq!(records[0].get("SPEED-DUPLEX"), Some("1G-f"));
    assert_eq!(records[1].get("SPEED-DUPLEX"), Some("0M"));

    let records = parse_table(Category::Aggr, &fixture("show-aggr.txt")).unwrap();
    assert_eq!(records[1].get("POLICY"), Some("L2,L3"));
    assert_eq!(records[1].get("LACPTIMER"), Some("long"));
}

#[test]
fn test_trailing_column_takes_rest_of_line() {
    let records = parse_table(Category::Link, &fixture("show-link.txt")).unwrap();
    let aggr1 = records
        .iter()
        .find(|r| r.get("LINK") == Some("aggr1"))
        .expect("aggr1 should exist");
    assert_eq!(aggr1.get("OVER"), Some("net2 net3"));

    let records = parse_table(Category::Vnic, &fixture("show-vnic.txt")).unwrap();
    assert_eq!(records[0].get("IDS"), Some("VID:0,415"));
    assert_eq!(records[1].get("MACADDRTYPE"), Some("random"));
}

#[test]
fn test_truncated_row_rejects_whole_table() {
    let err = parse_table(Category::Phys, &fixture("show-phys-truncated.txt")).unwrap_err();
    assert_matches!(
        &err,
        Error::MalformedRow { category: Category::Phys, expected: 6, line, .. }
            if line == "net1            Ethernet      unknown"
    );

    let message = err.to_string();
    assert!(message.contains("show-phys"), "{}", message);
    assert!(message.contains("LINK,MEDIA,STATE,SPEED,DUPLEX,DEVICE"), "{}", message);
    assert!(message.contains("net1            Ethernet      unknown"), "{}", message);
}

#[test]
fn test_fixture_under_wrong_schema_is_rejected() {
    // show-link has five columns, show-phys expects six
    assert_matches!(
        parse_table(Category::Phys, &fixture("show-link.txt")),
        Err(Error::MalformedRow { .. })
    );
}

#[test]
fn test_cli_parses_input_file() -> miette::Result<()> {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_dladm-facts"))
        .args(["vnic", "--input", "tests/fixtures/show-vnic.txt"])
        .output()
        .into_diagnostic()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).into_diagnostic()?;
    assert_eq!(json["changed"], false);
    assert_eq!(
        json["ansible_facts"]["dladm_vnic_list"][0]["LINK"],
        "ldoms-vsw0.vport0"
    );
    Ok(())
}

#[test]
fn test_cli_fails_on_malformed_input() -> miette::Result<()> {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_dladm-facts"))
        .args(["phys", "--input", "tests/fixtures/show-phys-truncated.txt"])
        .output()
        .into_diagnostic()?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_cli_rejects_unknown_attribute() -> miette::Result<()> {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_dladm-facts"))
        .args(["bridge", "--input", "tests/fixtures/show-link.txt"])
        .output()
        .into_diagnostic()?;
    assert!(!output.status.success());
    Ok(())
}
