use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

pub const TODAY: &str = "2024-01-01";

/// `agecalc` with a fixed today and no `AGECALC_*` settings leaking in.
pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("agecalc");
    cmd.env_remove("AGECALC_TODAY")
        .env_remove("AGECALC_YEAR_CEILING")
        .env_remove("AGECALC_ANIMATE")
        .env_remove("AGECALC_ANIMATION_MS")
        .env_remove("RUST_LOG")
        .args(["--today", TODAY]);
    cmd
}

pub fn run_json(args: &[&str], expect_code: i32) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .code(expect_code)
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}
