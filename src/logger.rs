use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes progress lines to stderr, so stdout carries only the report.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
    }
}
