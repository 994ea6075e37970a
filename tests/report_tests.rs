use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};

mod common;
use common::{SAMPLE_LOG, jr, write_log};

#[test]
fn test_report_sample_log() {
    let log = write_log("sample", SAMPLE_LOG);

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("Job Report:"))
        .stdout(contains("Job 1001 (Job A) took 300 seconds - OK"))
        .stderr(contains(
            "Job 1002 (Job B) took longer than 10 minutes (720 seconds)",
        ));
}

#[test]
fn test_report_warning_tier() {
    // 400 seconds: above the 300 s warning threshold, below the error one
    let log = write_log(
        "warn_tier",
        "09:00:00,Nightly sync,START,42\n09:06:40,Nightly sync,END,42\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains(
            "Job 42 (Nightly sync) took longer than 5 minutes (400 seconds)",
        ));
}

#[test]
fn test_classification_boundaries_are_exact() {
    let log = write_log(
        "boundaries",
        "12:00:00,At warn,START,1\n\
         12:05:00,At warn,END,1\n\
         12:00:00,Past warn,START,2\n\
         12:05:01,Past warn,END,2\n\
         12:00:00,At error,START,3\n\
         12:10:00,At error,END,3\n\
         12:00:00,Past error,START,4\n\
         12:10:01,Past error,END,4\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("Job 1 (At warn) took 300 seconds - OK"))
        .stdout(contains(
            "Job 2 (Past warn) took longer than 5 minutes (301 seconds)",
        ))
        .stdout(contains(
            "Job 3 (At error) took longer than 5 minutes (600 seconds)",
        ))
        .stderr(contains(
            "Job 4 (Past error) took longer than 10 minutes (601 seconds)",
        ));
}

#[test]
fn test_no_completed_jobs_notice() {
    let log = write_log("only_start", "12:00:00,Half a job,START,7\n");

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("No completed jobs found."))
        .stdout(contains("Job Report:").not());
}

#[test]
fn test_empty_file_is_a_valid_report() {
    let log = write_log("empty", "");

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("No completed jobs found."));
}

#[test]
fn test_incomplete_pid_is_silently_dropped() {
    // pid 9 never ends; pid 8 completes and must be the only report row
    let log = write_log(
        "incomplete",
        "08:00:00,Stuck job,START,9\n\
         08:10:00,Good job,START,8\n\
         08:11:00,Good job,END,8\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("Job 8 (Good job) took 60 seconds - OK"))
        .stdout(contains("Job 9").not())
        .stderr(contains("Job 9").not());
}

#[test]
fn test_type_field_is_trimmed_and_case_insensitive() {
    let log = write_log(
        "loose_type",
        "10:00:00,Sloppy record, start ,500\n10:01:00,Sloppy record, End ,500\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("Job 500 (Sloppy record) took 60 seconds - OK"));
}

#[test]
fn test_midnight_wrap_around() {
    // END numerically earlier than START: job crossed midnight
    let log = write_log(
        "midnight",
        "23:59:00,Overnight batch,START,77\n00:01:00,Overnight batch,END,77\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .success()
        .stdout(contains("Job 77 (Overnight batch) took 120 seconds - OK"));
}

#[test]
fn test_min_level_warning_hides_ok_lines() {
    let log = write_log("min_level", SAMPLE_LOG);

    jr().args([&log, "--no-config", "--min-level", "warning"])
        .assert()
        .success()
        .stdout(contains("Job 1001").not())
        .stdout(contains("Job Report:").not())
        .stderr(contains(
            "Job 1002 (Job B) took longer than 10 minutes (720 seconds)",
        ));
}

#[test]
fn test_threshold_overrides_reclassify() {
    // 300 s is OK with defaults; with --warn-secs 100 --error-secs 200 it
    // lands in the error tier
    let log = write_log(
        "overrides",
        "12:00:00,Job A,START,1001\n12:05:00,Job A,END,1001\n",
    );

    jr().args([&log, "--no-config", "--warn-secs", "100", "--error-secs", "200"])
        .assert()
        .success()
        .stderr(contains(
            "Job 1001 (Job A) took longer than 3 minutes (300 seconds)",
        ));
}

#[test]
fn test_malformed_time_aborts_whole_run() {
    let log = write_log(
        "bad_time",
        "12:00:00,Job A,START,1001\n99:99:99,Job A,END,1001\n",
    );

    jr().args([&log, "--no-config"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("Malformed record at line 2"))
        .stderr(contains("invalid time"));
}

#[test]
fn test_malformed_pid_aborts_whole_run() {
    let log = write_log("bad_pid", "12:00:00,Job A,START,abc\n");

    jr().args([&log, "--no-config"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("invalid pid"));
}

#[test]
fn test_wrong_field_count_aborts_whole_run() {
    let log = write_log("bad_fields", "12:00:00,Job A,START\n");

    jr().args([&log, "--no-config"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("expected 4 fields"));
}

#[test]
fn test_missing_file_is_a_distinct_error() {
    jr().args(["/no/such/dir/jobs.log", "--no-config"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("Log file not found"));
}
