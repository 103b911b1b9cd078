mod common;

use common::{cmd, run_json};
use predicates::str::contains;

#[test]
fn calc_prints_age() {
    cmd()
        .args(["calc", "--day", "31", "--month", "12", "--year", "1990"])
        .assert()
        .success()
        .stdout("33 años, 0 meses, 1 día\n");
}

#[test]
fn calc_exact_anniversary_json() {
    let v = run_json(&["calc", "--day", "1", "--month", "1", "--year", "1990"], 0);
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["age"]["years"], 34);
    assert_eq!(v["data"]["age"]["months"], 0);
    assert_eq!(v["data"]["age"]["days"], 0);
    assert_eq!(v["data"]["today"], "2024-01-01");
}

#[test]
fn blank_submit_reports_three_required() {
    let v = run_json(&["calc"], 2);
    assert_eq!(v["ok"], false);
    for field in ["day", "month", "year"] {
        assert_eq!(v["data"][field]["kind"], "required");
        assert_eq!(v["data"][field]["message"], "Este campo es requerido");
    }
    assert!(v["data"].get("age").is_none());
}

#[test]
fn impossible_date_is_reported_on_day() {
    cmd()
        .args(["calc", "--day", "31", "--month", "2", "--year", "1990"])
        .assert()
        .code(2)
        .stdout("day: Fecha inválida\n");
}

#[test]
fn future_date_is_reported_on_year() {
    cmd()
        .args(["calc", "--day", "2", "--month", "1", "--year", "2024"])
        .assert()
        .code(2)
        .stdout("year: La fecha no puede ser en el futuro\n");
}

#[test]
fn born_today_is_zero() {
    cmd()
        .args(["calc", "--day", "1", "--month", "1", "--year", "2024"])
        .assert()
        .success()
        .stdout("0 años, 0 meses, 0 días\n");
}

#[test]
fn out_of_range_fields_are_all_reported() {
    let v = run_json(&["calc", "--day", "32", "--month", "0", "--year", "1899"], 2);
    assert_eq!(v["data"]["day"]["message"], "Día inválido");
    assert_eq!(v["data"]["month"]["message"], "Mes inválido");
    assert_eq!(v["data"]["year"]["message"], "Año inválido");
}

#[test]
fn year_ceiling_flag_is_parsed() {
    cmd()
        .args(["--year-ceiling", "per-call", "calc", "--day", "1", "--month", "1", "--year", "2000"])
        .assert()
        .success();
    cmd()
        .args(["--year-ceiling", "yearly", "calc"])
        .assert()
        .failure()
        .stderr(contains("per-call"));
}

#[test]
fn check_is_silent_while_fields_are_blank() {
    cmd()
        .args(["check", "--day", "31", "--month", "2"])
        .assert()
        .success()
        .stdout("ok\n");
    cmd()
        .args(["check", "--day", "31", "--month", "2", "--year", "1990"])
        .assert()
        .code(2)
        .stdout("day: Fecha inválida\n");
}

#[test]
fn form_reads_events_from_stdin() {
    cmd()
        .arg("form")
        .write_stdin("day 29\nmonth 2\nyear 1900\nyear 2000\nsubmit\n")
        .assert()
        .success()
        .stdout("ok\nok\nday: Fecha inválida\nok\n23 años, 10 meses, 3 días\n");
}

#[test]
fn format_pads_components() {
    cmd()
        .args(["format", "--day", "5", "--month", "5", "--year", "1990"])
        .assert()
        .success()
        .stdout("1990-05-05\n");
}

#[test]
fn overlong_year_is_out_of_range() {
    cmd()
        .args(["calc", "--day", "1", "--month", "1", "--year", "99999999999"])
        .assert()
        .code(2)
        .stdout("year: Año inválido\n");
}

#[test]
fn bad_environment_fails_fast() {
    cmd()
        .env("AGECALC_ANIMATION_MS", "soon")
        .args(["calc"])
        .assert()
        .failure()
        .stderr(contains("AGECALC_ANIMATION_MS"));
}
