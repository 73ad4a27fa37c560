//! End-to-End CLI Tests for sitegen

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the sitegen binary
fn sitegen() -> Command {
    cargo_bin_cmd!("sitegen")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        sitegen()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("topics"));
    }

    #[test]
    fn shows_version() {
        sitegen()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod topics {
    use super::*;

    #[test]
    fn lists_topics_in_order() {
        let output = sitegen().arg("topics").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Pitching Perfect (pitching-perfect) - 3 tips, 5 checklist items"
        );
        assert!(lines[2].starts_with("KPI Mastery (kpi-mastery)"));
    }

    #[test]
    fn emits_json() {
        let output = sitegen().args(["topics", "--json"]).output().unwrap();
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 6);
        assert_eq!(list[1]["title"], "Term Sheet Basics");
        assert_eq!(list[1]["slug"], "term-sheet-basics");
        assert_eq!(list[1]["checklist"], 4);
    }
}

mod render {
    use super::*;

    #[test]
    fn renders_landing() {
        sitegen()
            .args(["render", "landing"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(r#"href="/signup?role=investor""#));
    }

    #[test]
    fn renders_cheatsheet_without_overlay() {
        sitegen()
            .args(["render", "cheatsheet"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Term Sheet Basics"))
            .stdout(predicate::str::contains(r#"class="detail-overlay""#).not());
    }

    #[test]
    fn renders_selected_topic_by_title_or_slug() {
        for key in ["Pitching Perfect", "pitching-perfect"] {
            sitegen()
                .args(["render", "cheatsheet", "--topic", key])
                .assert()
                .success()
                .stdout(predicate::str::contains(r#"class="detail-overlay""#))
                .stdout(predicate::str::contains("Market Size"));
        }
    }

    #[test]
    fn unknown_topic_fails() {
        sitegen()
            .args(["render", "cheatsheet", "--topic", "Series Z"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown topic 'Series Z'"));
    }

    #[test]
    fn topic_rejected_for_landing() {
        sitegen()
            .args(["render", "landing", "--topic", "KPI Mastery"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--topic only applies"));
    }

    #[test]
    fn no_motion_drops_script() {
        sitegen()
            .args(["render", "landing", "--no-motion"])
            .assert()
            .success()
            .stdout(predicate::str::contains("IntersectionObserver").not());
    }

    #[test]
    fn missing_config_fails() {
        sitegen()
            .args(["render", "landing", "--config", "/nonexistent/sitegen.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_site_tree() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");

        sitegen()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        assert!(out.join("index.html").is_file());
        assert!(out.join("catalog.json").is_file());
        assert!(out.join("cheatsheet/index.html").is_file());
        assert!(out.join("cheatsheet/kpi-mastery.html").is_file());
        assert!(out.join("cheatsheet/investor-updates.html").is_file());
    }

    #[test]
    fn uses_config_from_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("sitegen.toml"),
            "[site]\nname = \"Runway\"\n\n[output]\ndir = \"site\"\n\n[motion]\nenabled = false\n",
        )
        .unwrap();

        sitegen()
            .current_dir(dir.path())
            .arg("build")
            .assert()
            .success();

        let landing = std::fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(landing.contains("<title>Runway</title>"));
        assert!(!landing.contains("IntersectionObserver"));
    }

    #[test]
    fn site_name_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        sitegen()
            .args(["build", "--site-name", "Harbor", "--out"])
            .arg(&out)
            .assert()
            .success();

        let page = std::fs::read_to_string(out.join("cheatsheet/index.html")).unwrap();
        assert!(page.contains("<title>Harbor Cheat Sheet</title>"));
    }
}
