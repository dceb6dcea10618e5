use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rvo, sample_csv_file, temp_path};

#[test]
fn test_events_listed_chronologically() {
    let csv = sample_csv_file("cli_events_list");
    let cfg = temp_path("cli_events_list", "conf");

    let out = rvo()
        .args(["--config", &cfg, "--source", &csv, "events"])
        .assert()
        .success()
        .stdout(contains("Beach Day").and(contains("3 of 3 opportunities")))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let beach = text.find("Beach Day").unwrap();
    let park = text.find("Park Cleanup").unwrap();
    assert!(beach < park);
    assert!(!text.contains("Bad Date"));
}

#[test]
fn test_events_filtered_by_category_and_period() {
    let csv = sample_csv_file("cli_events_filter");
    let cfg = temp_path("cli_events_filter", "conf");

    rvo()
        .args([
            "--config", &cfg, "--source", &csv, "events", "--category", "Education", "--period",
            "2011",
        ])
        .assert()
        .success()
        .stdout(contains("Tutoring").and(contains("Beach Day").not()));
}

#[test]
fn test_missing_source_is_not_an_error() {
    let cfg = temp_path("cli_missing_source", "conf");

    rvo()
        .args(["--config", &cfg, "--source", "/no/such/file.csv", "events"])
        .assert()
        .success()
        .stdout(contains("No volunteer opportunities available"));
}

#[test]
fn test_invalid_period_fails() {
    let csv = sample_csv_file("cli_bad_period");
    let cfg = temp_path("cli_bad_period", "conf");

    rvo()
        .args(["--config", &cfg, "--source", &csv, "events", "--period", "soon"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_stats_and_categories() {
    let csv = sample_csv_file("cli_stats");
    let cfg = temp_path("cli_stats", "conf");

    rvo()
        .args(["--config", &cfg, "--source", &csv, "stats"])
        .assert()
        .success()
        .stdout(
            contains("Available Opportunities : 3").and(contains("Without coordinates     : 1")),
        );

    rvo()
        .args(["--config", &cfg, "--source", &csv, "categories"])
        .assert()
        .success()
        .stdout(contains("Environment").and(contains("General")));
}

#[test]
fn test_export_json() {
    let csv = sample_csv_file("cli_export_json");
    let cfg = temp_path("cli_export_json", "conf");
    let out = temp_path("cli_export_json_out", "json");

    rvo()
        .args([
            "--config", &cfg, "--source", &csv, "export", "--format", "json", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Beach Day"));
    assert!(content.contains("40.7128"));
    assert!(content.contains("\"type\": \"ongoing\""));
}

#[test]
fn test_export_csv_by_category() {
    let csv = sample_csv_file("cli_export_csv");
    let cfg = temp_path("cli_export_csv", "conf");
    let out = temp_path("cli_export_csv_out", "csv");

    rvo()
        .args([
            "--config", &cfg, "--source", &csv, "export", "--format", "csv", "--file", &out,
            "--category", "Environment", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,title,start,end,location,category,latitude,longitude"));
    assert!(content.contains("Park Cleanup"));
    assert!(!content.contains("Tutoring"));
}

#[test]
fn test_export_requires_absolute_path() {
    let csv = sample_csv_file("cli_export_relative");
    let cfg = temp_path("cli_export_relative", "conf");

    rvo()
        .args([
            "--config", &cfg, "--source", &csv, "export", "--file", "relative.csv", "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_chat_one_shot() {
    let cfg = temp_path("cli_chat", "conf");

    rvo()
        .args(["--config", &cfg, "chat", "How to get started"])
        .assert()
        .success()
        .stdout(contains("Getting started is easy!").and(contains("Update profile")));
}

#[test]
fn test_chat_number_picks_option() {
    let cfg = temp_path("cli_chat_pick", "conf");

    rvo()
        .args(["--config", &cfg, "chat", "--json", "1", "blah blah"])
        .assert()
        .success()
        .stdout(
            contains("\"content\": \"Find opportunities\"")
                .and(contains("Could you please be more specific"))
                .and(contains("\"id\": 5")),
        );
}

#[test]
fn test_chat_interactive_reads_stdin() {
    let cfg = temp_path("cli_chat_stdin", "conf");

    rvo()
        .args(["--config", &cfg, "chat"])
        .write_stdin("Track my hours\n\nquit\n")
        .assert()
        .success()
        .stdout(contains("Log hours").and(contains("View history")));
}

#[test]
fn test_profile_update_is_saved() {
    let cfg = temp_path("cli_profile", "conf");

    rvo()
        .args(["--config", &cfg, "profile", "--name", "Jane Roe"])
        .assert()
        .success();

    rvo()
        .args(["--config", &cfg, "profile"])
        .assert()
        .success()
        .stdout(contains("Jane Roe").and(contains("Administrator")));
}

#[test]
fn test_init_writes_config() {
    let cfg = temp_path("cli_init", "conf");

    rvo().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("csv_source"));
    assert!(content.contains("id_fallback: random"));

    rvo()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("reject_reversed_ranges: false"));
}

#[test]
fn test_multiline_title_keeps_rows_and_highlight_aligned() {
    let csv = temp_path("cli_multiline_title", "csv");
    let cfg = temp_path("cli_multiline_title", "conf");
    fs::write(
        &csv,
        "opportunity_id,title,start_date_date,end_date_date,recurrence_type\n\
         1,\"Line1\nLine2\",2021-05-01,2021-05-01,onetime\n\
         2,Ongoing one,2021-05-02,2021-05-02,ongoing\n",
    )
    .expect("write csv");

    let out = rvo()
        .args(["--config", &cfg, "--source", &csv, "events"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let lines: Vec<&str> = text.lines().collect();

    let onetime = lines.iter().find(|l| l.contains("Line1")).unwrap();
    assert!(onetime.contains("Line1 Line2"));
    assert!(!onetime.contains("\x1b[34m"));
    assert!(!lines.iter().any(|l| l.starts_with("Line2")));

    let ongoing = lines.iter().find(|l| l.contains("Ongoing one")).unwrap();
    assert!(ongoing.starts_with("\x1b[34m"));
}

#[test]
fn test_empty_listing_names_the_applied_filters() {
    let csv = sample_csv_file("cli_empty_listing");
    let cfg = temp_path("cli_empty_listing", "conf");

    rvo()
        .args(["--config", &cfg, "--source", &csv, "events", "--period", "2020"])
        .assert()
        .success()
        .stdout(
            contains("No events match period 2020-01-01 to 2020-12-31.")
                .and(contains("category").not()),
        );

    rvo()
        .args(["--config", &cfg, "--source", &csv, "events", "--limit", "0"])
        .assert()
        .success()
        .stdout(contains("No events match limit 0."));

    rvo()
        .args(["--config", &cfg, "--source", &csv, "events", "--category", "Healthcare"])
        .assert()
        .success()
        .stdout(contains("No events match category 'Healthcare'."));
}
