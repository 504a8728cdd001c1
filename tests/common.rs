#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwp() -> Command {
    cargo_bin_cmd!("rworkplan")
}

/// Fresh, empty working directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rworkplan_it_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config file for the test, so the user's ~/.rworkplan is never touched.
/// Reports are written to `<dir>/out`.
pub fn write_test_config(dir: &PathBuf) -> String {
    let conf = dir.join("rworkplan.conf");
    let out = dir.join("out");
    fs::write(
        &conf,
        format!("output_dir: {}\norganization: 7HILLS\n", out.display()),
    )
    .expect("write config");
    conf.to_string_lossy().to_string()
}

pub fn plan_path(dir: &PathBuf) -> String {
    dir.join("workplan.yaml").to_string_lossy().to_string()
}

/// Run the CLI with the test config and the given plan file.
pub fn run_ok(conf: &str, args: &[&str]) {
    rwp()
        .arg("--conf")
        .arg(conf)
        .args(args)
        .assert()
        .success();
}

/// Kawempe / Sweeping plan for the week of 2025-09-14, with Tuesday filled in.
pub fn init_sweeping_plan(conf: &str, plan: &str) {
    run_ok(
        conf,
        &[
            "new",
            "--file",
            plan,
            "--division",
            "Kawempe",
            "--department",
            "Sweeping",
            "--date",
            "2025-09-17",
        ],
    );
    run_ok(
        conf,
        &[
            "day",
            "--file",
            plan,
            "--day",
            "2",
            "--location",
            "Market Rd",
            "--activity",
            "Street Sweeping",
        ],
    );
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
