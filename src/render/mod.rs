//! Presentation adapters: everything that turns validation results and ages
//! into output. The core never calls into these.

pub mod animate;

use crate::form::Submission;
use crate::validate::FieldErrors;
use animate::CountUp;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use tokio::task::JoinHandle;
use tracing::warn;

/// Receives results from the form and shows them.
pub trait Presenter {
    fn show_errors(&mut self, errors: &FieldErrors) -> Result<()>;
    fn show_age(&mut self, submission: &Submission) -> Result<()>;

    /// Completes output still in flight. Called once before exit.
    fn finish(&mut self) -> impl Future<Output = ()> {
        async {}
    }
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Plain text output. Ages are drawn with a count-up when an animation is set.
pub struct TerminalPresenter<W: Write> {
    out: W,
    animation: Option<CountUp>,
    running: Vec<JoinHandle<io::Result<()>>>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, animation: Option<CountUp>) -> Self {
        Self {
            out,
            animation,
            running: Vec::new(),
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_errors(&mut self, errors: &FieldErrors) -> Result<()> {
        if errors.is_empty() {
            writeln!(self.out, "ok")?;
        }
        for e in errors.iter() {
            writeln!(self.out, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }

    fn show_age(&mut self, submission: &Submission) -> Result<()> {
        match self.animation {
            Some(count_up) => {
                self.out.flush()?;
                self.running.push(count_up.spawn(submission.age));
            }
            None => writeln!(self.out, "{}", submission.age)?,
        }
        Ok(())
    }

    /// Waits for animations still drawing.
    fn finish(&mut self) -> impl Future<Output = ()> {
        let running: Vec<_> = self.running.drain(..).collect();
        async move {
            for handle in running {
                match handle.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!("animation output failed: {e}"),
                    Err(e) => warn!("animation task failed: {e}"),
                }
            }
        }
    }
}

/// `{ "ok": ..., "data": ... }` documents, one per result.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit<T: Serialize>(&mut self, ok: bool, data: T) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show_errors(&mut self, errors: &FieldErrors) -> Result<()> {
        self.emit(errors.is_empty(), errors)
    }

    fn show_age(&mut self, submission: &Submission) -> Result<()> {
        self.emit(true, submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::AgeResult;
    use crate::date::Field;
    use crate::validate::FieldError;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn submission() -> Submission {
        Submission {
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            age: AgeResult {
                years: 34,
                months: 0,
                days: 0,
            },
        }
    }

    #[test]
    fn terminal_lists_errors_in_form_order() {
        let mut buf = Vec::new();
        let mut errors = FieldErrors::default();
        errors.set(FieldError::future());
        errors.set(FieldError::required(Field::Day));
        TerminalPresenter::new(&mut buf, None)
            .show_errors(&errors)
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "day: Este campo es requerido\nyear: La fecha no puede ser en el futuro\n"
        );
    }

    #[test]
    fn terminal_prints_age_without_animation() {
        let mut buf = Vec::new();
        TerminalPresenter::new(&mut buf, None)
            .show_age(&submission())
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "34 años, 0 meses, 0 días\n");
    }

    #[test]
    fn json_envelope() {
        let mut buf = Vec::new();
        JsonPresenter::new(&mut buf).show_age(&submission()).unwrap();
        let v: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["ok"], true);
        assert_eq!(v["data"]["age"]["years"], 34);
        assert_eq!(v["data"]["birth_date"], "1990-01-01");

        let mut buf = Vec::new();
        JsonPresenter::new(&mut buf)
            .show_errors(&FieldError::invalid_date().into())
            .unwrap();
        let v: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["ok"], false);
        assert_eq!(v["data"]["day"]["kind"], "invalid-date");
        assert!(v["data"].get("month").is_none());
    }
}
