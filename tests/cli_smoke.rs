use predicates::str::contains;

#[test]
fn human_run_with_reference_catalog_reports_every_operator() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("evtol-sim");
    cmd.args(["run", "--seed", "42", "--format", "human"]);
    cmd.assert()
        .success()
        .stdout(contains("Metadata:"))
        .stdout(contains("horizon_hours: 3"))
        .stdout(contains("fleet_size: 20"))
        .stdout(contains("chargers: 3"))
        .stdout(contains("seed: 42"))
        .stdout(contains("Stats for Alpha:"))
        .stdout(contains("Stats for Bravo:"))
        .stdout(contains("Stats for Charlie:"))
        .stdout(contains("Stats for Delta:"))
        .stdout(contains("Stats for Echo:"))
        .stdout(contains("Vehicle distribution:"));
}

#[test]
fn summary_format_prints_one_line_per_operator() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("evtol-sim");
    cmd.args(["run", "--seed", "7", "--format", "summary"]);
    cmd.assert()
        .success()
        .stdout(contains("Summary:"))
        .stdout(contains("Alpha: "))
        .stdout(contains("Bravo: "))
        .stdout(contains("Charlie: "))
        .stdout(contains("Delta: "))
        .stdout(contains("Echo: "))
        .stdout(contains(" vehicles)"));
}

#[test]
fn seeded_runs_are_reproducible_from_the_cli() {
    let args = ["run", "--seed", "1234", "--format", "human"];

    let mut cmd_a = assert_cmd::cargo::cargo_bin_cmd!("evtol-sim");
    cmd_a.args(args);
    let stdout_a = cmd_a.assert().success().get_output().stdout.clone();

    let mut cmd_b = assert_cmd::cargo::cargo_bin_cmd!("evtol-sim");
    cmd_b.args(args);
    let stdout_b = cmd_b.assert().success().get_output().stdout.clone();

    assert_eq!(stdout_a, stdout_b);
}

#[test]
fn flag_overrides_show_up_in_metadata() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("evtol-sim");
    cmd.args([
        "run",
        "--horizon",
        "6",
        "--fleet-size",
        "8",
        "--chargers",
        "2",
        "--seed",
        "5",
        "--format",
        "summary",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("horizon_hours: 6"))
        .stdout(contains("fleet_size: 8"))
        .stdout(contains("chargers: 2"))
        .stdout(contains("seed: 5"));
}
