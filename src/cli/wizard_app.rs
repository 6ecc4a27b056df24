//! Interactive terminal wizard

use std::future::Future;
use std::pin::Pin;
use std::process::ExitCode;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::application::{Advance, ReviewWizard};
use crate::domain::review::{NominationCategory, RecordingSlot, Score};
use crate::domain::wizard::{LaunchParams, WizardStep};
use crate::infrastructure::{FfmpegMicrophone, HttpReviewSubmitter, TempPlaybackStore};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;
use super::signals::shutdown_signal;

type TerminalWizard = ReviewWizard<FfmpegMicrophone, TempPlaybackStore, HttpReviewSubmitter>;

/// Options for a wizard session
#[derive(Debug, Clone)]
pub struct WizardOptions {
    pub params: LaunchParams,
    pub server_url: String,
    pub roster: Vec<String>,
}

/// One line of reviewer input, interpreted for the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Next,
    Back,
    Quit,
    Score(u8),
    /// Category and 1-based position in the nominee list
    Nominate(NominationCategory, usize),
    Start,
    Stop,
    Redo,
    Play,
}

/// Interpret a line typed on `step`
pub fn parse_command(input: &str, step: WizardStep) -> Result<WizardCommand, String> {
    let input = input.trim();
    let lower = input.to_lowercase();

    match lower.as_str() {
        "" | "n" | "next" => return Ok(WizardCommand::Next),
        "b" | "back" => return Ok(WizardCommand::Back),
        "q" | "quit" | "exit" => return Ok(WizardCommand::Quit),
        _ => {}
    }

    match step {
        WizardStep::Score => input
            .parse::<u8>()
            .map(WizardCommand::Score)
            .map_err(|_| "Ketik angka 1 sampai 10.".to_string()),
        WizardStep::Nominations => parse_nomination(input),
        WizardStep::RecordDirectors | WizardStep::RecordSystem => match lower.as_str() {
            "r" | "rec" | "record" => Ok(WizardCommand::Start),
            "s" | "stop" => Ok(WizardCommand::Stop),
            "redo" => Ok(WizardCommand::Redo),
            "p" | "play" => Ok(WizardCommand::Play),
            _ => Err("Perintah: r (rekam), s (stop), redo, p (putar).".to_string()),
        },
        WizardStep::Welcome | WizardStep::Success => {
            Err(format!("Perintah tidak dikenal: {}", input))
        }
    }
}

/// "<category> <nominee>", both 1-based
fn parse_nomination(input: &str) -> Result<WizardCommand, String> {
    let usage = || "Format: <kategori> <nomor rekan>, contoh: 1 3".to_string();
    let mut parts = input.split_whitespace();

    let category = parts
        .next()
        .and_then(|p| p.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| NominationCategory::ALL.get(i).copied())
        .ok_or_else(usage)?;
    let nominee = parts
        .next()
        .and_then(|p| p.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .ok_or_else(usage)?;

    if parts.next().is_some() {
        return Err(usage());
    }
    Ok(WizardCommand::Nominate(category, nominee))
}

/// Run the wizard until the review is submitted or the reviewer quits
pub async fn run_wizard(options: WizardOptions) -> ExitCode {
    let mut presenter = Presenter::new();
    let submitter = HttpReviewSubmitter::new(&options.server_url);
    debug!(endpoint = %submitter.endpoint(), "Wizard session starting");

    let mut wizard: TerminalWizard = ReviewWizard::new(
        options.params,
        options.roster,
        FfmpegMicrophone::new(),
        TempPlaybackStore::new(),
        submitter,
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        render(&wizard, &presenter);
        presenter.prompt();

        let Some(line) = unless_shutdown(lines.next_line(), shutdown.as_mut()).await else {
            return abandon(&mut wizard, &mut presenter).await;
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                wizard.cancel_recording().await;
                return ExitCode::from(EXIT_SUCCESS);
            }
            Err(e) => {
                wizard.cancel_recording().await;
                presenter.error(&format!("Failed to read input: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        if wizard.step().is_terminal() {
            return ExitCode::from(EXIT_SUCCESS);
        }

        let command = match parse_command(&line, wizard.step()) {
            Ok(command) => command,
            Err(message) => {
                presenter.warn(&message);
                continue;
            }
        };

        if command == WizardCommand::Quit {
            wizard.cancel_recording().await;
            presenter.info("Sampai jumpa.");
            return ExitCode::from(EXIT_SUCCESS);
        }

        let applied = apply(&mut wizard, command, &mut presenter);
        if unless_shutdown(applied, shutdown.as_mut()).await.is_none() {
            return abandon(&mut wizard, &mut presenter).await;
        }
    }
}

/// Drive `work` to completion unless `shutdown` resolves first.
///
/// A dropped `work` future releases whatever it was awaiting (a submission
/// request, a microphone start), so the caller can clean up right away.
async fn unless_shutdown<T>(
    work: impl Future<Output = T>,
    shutdown: Pin<&mut impl Future<Output = ()>>,
) -> Option<T> {
    tokio::select! {
        biased;
        _ = shutdown => None,
        out = work => Some(out),
    }
}

/// Ctrl+C or SIGTERM: release the microphone and leave quietly
async fn abandon(wizard: &mut TerminalWizard, presenter: &mut Presenter) -> ExitCode {
    presenter.stop_spinner();
    wizard.cancel_recording().await;
    presenter.warn("Review dibatalkan.");
    ExitCode::from(EXIT_SUCCESS)
}

async fn apply(wizard: &mut TerminalWizard, command: WizardCommand, presenter: &mut Presenter) {
    match command {
        WizardCommand::Next => advance(wizard, presenter).await,
        WizardCommand::Back => {
            if !wizard.prev().await {
                presenter.warn("Tidak bisa kembali dari langkah ini.");
            }
        }
        WizardCommand::Score(value) => {
            if let Err(e) = wizard.select_score(value) {
                presenter.warn(&e.to_string());
            }
        }
        WizardCommand::Nominate(category, position) => {
            let nominee = wizard
                .nomination_options()
                .get(position - 1)
                .map(|name| name.to_string());
            match nominee {
                Some(name) => {
                    if let Err(e) = wizard.nominate(category, &name) {
                        presenter.warn(&e.to_string());
                    }
                }
                None => presenter.warn("Nomor rekan tidak ada di daftar."),
            }
        }
        WizardCommand::Start => {
            if let Some(slot) = wizard.step().recording_slot() {
                if let Err(e) = wizard.start_recording(slot).await {
                    presenter.error(&e.to_string());
                }
            }
        }
        WizardCommand::Stop => match wizard.stop_recording().await {
            Ok(slot) => presenter.success(&format!("Rekaman {} tersimpan.", slot.description())),
            Err(e) => presenter.warn(&e.to_string()),
        },
        WizardCommand::Redo => {
            if let Some(slot) = wizard.step().recording_slot() {
                if !wizard.redo(slot) {
                    presenter.warn("Belum ada rekaman untuk diulang.");
                }
            }
        }
        WizardCommand::Play => {
            let location = wizard
                .step()
                .recording_slot()
                .and_then(|slot| wizard.draft().recordings.get(slot))
                .map(|captured| captured.playback.to_string());
            match location {
                Some(location) => presenter.output(&location),
                None => presenter.warn("Belum ada rekaman untuk diputar."),
            }
        }
        WizardCommand::Quit => {}
    }
}

async fn advance(wizard: &mut TerminalWizard, presenter: &mut Presenter) {
    let submitting = wizard.step().submits() && wizard.can_advance();
    if submitting {
        presenter.start_spinner("Mengirim review...");
    }

    match wizard.next().await {
        Advance::Blocked => presenter.warn("Lengkapi langkah ini terlebih dahulu."),
        Advance::Moved(step) => debug!(step = ?step, "Moved"),
        Advance::Completed => presenter.spinner_success(&wizard.draft().submission.message),
        Advance::Failed(message) => presenter.spinner_fail(&message),
    }
    presenter.stop_spinner();
}

fn render(wizard: &TerminalWizard, presenter: &Presenter) {
    let step = wizard.step();
    let draft = wizard.draft();
    presenter.step_header(step);

    match step {
        WizardStep::Welcome => {
            presenter.output(&format!(
                "Review untuk {} periode {}.",
                draft.subject, draft.period
            ));
            presenter.output("Isi skor, nominasi, lalu rekam dua saran singkat.");
        }
        WizardStep::Score => {
            let selected = draft.score.map(|s| s.value());
            let scores: Vec<String> = Score::all()
                .map(|s| match selected {
                    Some(v) if v == s.value() => format!("[{}]", v),
                    _ => s.value().to_string(),
                })
                .collect();
            presenter.output(&format!("  {}", scores.join(" ")));
        }
        WizardStep::Nominations => {
            for (i, category) in NominationCategory::ALL.iter().enumerate() {
                let chosen = draft.nominations.get(*category);
                let shown = if chosen.is_empty() { "-" } else { chosen };
                presenter.output(&format!("  {}. {}: {}", i + 1, category.label(), shown));
            }
            presenter.output("Rekan:");
            let chosen: Vec<&str> = NominationCategory::ALL
                .iter()
                .map(|c| draft.nominations.get(*c))
                .collect();
            for (i, name) in wizard.nomination_options().iter().enumerate() {
                presenter.choice(i + 1, name, chosen.contains(name));
            }
        }
        WizardStep::RecordDirectors | WizardStep::RecordSystem => {
            let captured = step
                .recording_slot()
                .map(|slot: RecordingSlot| draft.recordings.is_present(slot))
                .unwrap_or(false);
            presenter.recorder_status(wizard.recorder_state(), captured);
        }
        WizardStep::Success => {
            presenter.output(&format!("Review untuk {} sudah tercatat.", draft.subject));
        }
    }

    presenter.footer(
        step,
        wizard.can_advance(),
        wizard.can_go_back(),
        &draft.submission,
    );
}
