//! CLI integration tests for the pageviews binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn pageviews() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pageviews").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const EXPECTED_REPORT: &str = "\nTotal page views:\n\n/about/2 90 views\n/contact 89 views\n/index 82 views\n/about 81 views\n/help_page/1 80 views\n/home 78 views\n\n\nUnique page views:\n\n/index 23 unique views\n/home 23 unique views\n/contact 23 unique views\n/help_page/1 23 unique views\n/about/2 22 unique views\n/about 21 unique views\n\n";

mod report {
    use super::*;

    #[test]
    fn prints_reference_report() {
        pageviews()
            .arg(fixture("webserver.log"))
            .assert()
            .success()
            .stdout(EXPECTED_REPORT);
    }

    #[test]
    fn parallel_run_prints_same_report() {
        pageviews()
            .args(["--parallel", "--workers", "4"])
            .arg(fixture("webserver.log"))
            .assert()
            .success()
            .stdout(EXPECTED_REPORT);
    }

    #[test]
    fn verbose_logs_stay_off_stdout() {
        pageviews()
            .arg("--verbose")
            .arg(fixture("webserver.log"))
            .assert()
            .success()
            .stdout(EXPECTED_REPORT)
            .stderr(predicate::str::contains("Analysis completed successfully"));
    }

    #[test]
    fn top_limits_each_section() {
        pageviews()
            .args(["--top", "1"])
            .arg(fixture("webserver.log"))
            .assert()
            .success()
            .stdout(
                "\nTotal page views:\n\n/about/2 90 views\n\n\
                 \nUnique page views:\n\n/index 23 unique views\n\n",
            );
    }

    #[test]
    fn json_output() {
        let output = pageviews()
            .args(["--format", "json"])
            .arg(fixture("webserver.log"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["total_views"][0]["page"], "/about/2");
        assert_eq!(json["total_views"][0]["count"], 90);
        assert_eq!(json["unique_views"][0]["page"], "/index");
        assert_eq!(json["unique_views"].as_array().map(Vec::len), Some(6));
    }
}

mod usage {
    use super::*;

    #[test]
    fn requires_log_file() {
        pageviews()
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("LOG_FILE"));
    }

    #[test]
    fn rejects_more_than_one_log_file() {
        pageviews()
            .arg(fixture("webserver.log"))
            .arg(fixture("webserver.log"))
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn rejects_zero_top() {
        pageviews()
            .args(["--top", "0"])
            .arg(fixture("webserver.log"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("--top must be greater than 0"));
    }
}

mod input {
    use super::*;

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        pageviews()
            .arg(dir.path().join("missing.log"))
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("failed to read log file"));
    }

    #[test]
    fn empty_file_fails() {
        pageviews()
            .arg(fixture("empty.log"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("is empty"));
    }

    #[test]
    fn malformed_line_fails() {
        pageviews()
            .arg(fixture("invalid.log"))
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("malformed record at line 2"));
    }

    #[test]
    fn malformed_line_can_be_skipped() {
        pageviews()
            .arg("--skip-malformed")
            .arg(fixture("invalid.log"))
            .assert()
            .success()
            .stdout(predicate::str::contains("/home 1 views"))
            .stdout(predicate::str::contains("/about").not());
    }

    #[test]
    fn crlf_log_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.log");
        fs::write(&path, "/home 1.1.1.1\r\n/home 1.1.1.1\r\n").unwrap();

        pageviews()
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("/home 2 views"))
            .stdout(predicate::str::contains("/home 1 unique views"));
    }
}
