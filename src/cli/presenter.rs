//! CLI presenter for output formatting

use std::io::{self, Write};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::wizard::{RecorderState, SubmissionState, SubmissionStatus, WizardStep};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the input prompt without a newline
    pub fn prompt(&self) {
        print!("{} ", "›".cyan().bold());
        let _ = io::stdout().flush();
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a step heading with its progress badge
    pub fn step_header(&self, step: WizardStep) {
        println!();
        if let Some(badge) = step.badge() {
            println!("{}", badge.dimmed());
        }
        println!("{}", step.heading().bold());
    }

    /// Print a numbered choice, marking the selected one
    pub fn choice(&self, number: usize, label: &str, selected: bool) {
        if selected {
            println!("  {} {:>2}. {}", "●".green(), number, label.green());
        } else {
            println!("  {} {:>2}. {}", "○".dimmed(), number, label);
        }
    }

    /// Print the recorder status line for a recording step
    pub fn recorder_status(&self, state: RecorderState, captured: bool) {
        println!("  {}", format_recorder_status(state, captured));
    }

    /// Print the navigation footer and the last submission outcome
    pub fn footer(&self, step: WizardStep, can_advance: bool, can_go_back: bool, submission: &SubmissionState) {
        match submission.status {
            SubmissionStatus::Error => println!("{}", submission.message.red()),
            SubmissionStatus::Success => println!("{}", submission.message.green()),
            SubmissionStatus::Idle | SubmissionStatus::Loading => {}
        }
        println!("{}", format_footer(step, can_advance, can_go_back).dimmed());
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Recorder status text, e.g. "● Merekam..."
pub fn format_recorder_status(state: RecorderState, captured: bool) -> String {
    match state {
        RecorderState::Requesting(_) => format!("{} Meminta akses mikrofon...", "◌".yellow()),
        RecorderState::Recording(_) => format!("{} Merekam... (ketik 's' untuk berhenti)", "●".red()),
        RecorderState::Idle if captured => format!(
            "{} Rekaman tersimpan ('p' putar, 'redo' ulangi)",
            "✓".green()
        ),
        RecorderState::Idle => format!("{} Belum ada rekaman (ketik 'r' untuk mulai)", "○".dimmed()),
    }
}

/// Footer listing the navigation actions available on `step`
pub fn format_footer(step: WizardStep, can_advance: bool, can_go_back: bool) -> String {
    if step.is_terminal() {
        return "[q] Keluar".to_string();
    }

    let mut actions = Vec::new();
    if can_go_back {
        actions.push("[b] Back".to_string());
    }
    if can_advance {
        actions.push(format!("[Enter] {}", step.advance_label()));
    }
    actions.push("[q] Keluar".to_string());
    actions.join("  ")
}
