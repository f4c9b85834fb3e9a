//! Subcommand implementations.
//!
//! Every command writes to a caller-supplied writer so the binary can pass
//! stdout and tests can pass a buffer.

use std::io::{BufRead, Write};
use std::path::Path;

use jiff::tz::TimeZone;

use mindself_core::models::history::{HistoryRecord, parse_record_id};
use mindself_instruments::result::ScoreResult;
use mindself_instruments::scoring::ScaleCategory;
use mindself_instruments::session::Attempt;
use mindself_instruments::{Instrument, all_instruments, get_instrument, scales_in_category};
use mindself_storage::slot::Slot;

use crate::config::MindselfConfig;
use crate::state::AppState;

const BAR_WIDTH: u32 = 20;

fn local_time(timestamp: jiff::Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime("%Y-%m-%d %H:%M")
        .to_string()
}

/// Print the catalogue, grouped by category.
pub fn list(out: &mut impl Write, category: Option<ScaleCategory>) -> eyre::Result<()> {
    let categories: Vec<ScaleCategory> = match category {
        Some(category) => vec![category],
        None => ScaleCategory::ALL.to_vec(),
    };

    for category in categories {
        let instruments = scales_in_category(category);
        if instruments.is_empty() {
            continue;
        }
        writeln!(out, "{category}")?;
        for instrument in instruments {
            let definition = instrument.definition();
            writeln!(
                out,
                "  {:<10} {:<8} {} ({} questions, ~{} min)",
                definition.id,
                definition.short_title,
                definition.title,
                definition.questions.len(),
                definition.estimated_minutes,
            )?;
        }
    }
    Ok(())
}

/// Print one scale's metadata, options, subscales and cut points.
pub fn show(out: &mut impl Write, scale_id: &str) -> eyre::Result<()> {
    let definition = get_instrument(scale_id)?.definition();

    writeln!(out, "{} ({})", definition.title, definition.short_title)?;
    writeln!(out, "{}", definition.description)?;
    writeln!(out)?;
    writeln!(out, "Time frame: {}", definition.time_frame)?;
    writeln!(
        out,
        "Questions: {}, about {} min",
        definition.questions.len(),
        definition.estimated_minutes
    )?;

    writeln!(out)?;
    writeln!(out, "Options:")?;
    for (index, option) in definition.options.iter().enumerate() {
        writeln!(out, "  [{index}] {}", option.text)?;
    }

    for subscale in definition.all_subscales() {
        let (min, max) = definition.score_range(&subscale.id);
        writeln!(out)?;
        writeln!(out, "{} ({min}-{max}):", subscale.name)?;
        for band in &subscale.bands {
            writeln!(out, "  {:>3}-{:<3} {}", band.min, band.max, band.level)?;
        }
    }

    if !definition.citations.is_empty() {
        writeln!(out)?;
        writeln!(out, "References:")?;
        for citation in &definition.citations {
            match &citation.url {
                Some(url) => writeln!(out, "  {} <{url}>", citation.text)?,
                None => writeln!(out, "  {}", citation.text)?,
            }
        }
    }
    Ok(())
}

/// Print a scored result, with its saved record id when there is one.
pub fn write_result(
    out: &mut impl Write,
    instrument: &dyn Instrument,
    result: &ScoreResult,
    record: Option<&HistoryRecord>,
) -> eyre::Result<()> {
    write!(out, "{}", instrument.to_summary(result))?;
    for alert in &result.alerts {
        writeln!(out, "! {}", alert.message)?;
    }
    if let Some(record) = record {
        writeln!(out)?;
        writeln!(out, "Saved as {}", record.id)?;
    }
    Ok(())
}

fn record_result<S: Slot>(
    state: &mut AppState<S>,
    instrument: &dyn Instrument,
    result: &ScoreResult,
) -> eyre::Result<HistoryRecord> {
    let record = result.to_history_record(instrument.definition(), jiff::Timestamp::now());
    state.history.append(record.clone())?;
    Ok(record)
}

/// Score answers given on the command line.
pub fn score<S: Slot>(
    state: &mut AppState<S>,
    out: &mut impl Write,
    scale_id: &str,
    answers: &[u32],
    save: bool,
) -> eyre::Result<ScoreResult> {
    let instrument = get_instrument(scale_id)?;
    let result = instrument.score(answers)?;

    let record = if save {
        Some(record_result(state, instrument, &result)?)
    } else {
        None
    };
    write_result(out, instrument, &result, record.as_ref())?;
    Ok(result)
}

fn write_question(out: &mut impl Write, attempt: &Attempt<'_>) -> eyre::Result<()> {
    let Some(question) = attempt.current_question() else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {} ({}%)",
        attempt.step() + 1,
        attempt.len(),
        attempt.progress_percent()
    )?;
    writeln!(out, "{}", question.text)?;
    for (index, option) in attempt.definition().options.iter().enumerate() {
        let marker = if attempt.current_answer() == Some(index as u32) {
            '*'
        } else {
            ' '
        };
        writeln!(out, " {marker}[{index}] {}", option.text)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Walk an attempt over line-based input.
///
/// A number answers the current question, `b` goes back one question and
/// `q` (or end of input) abandons the attempt, returning `None`.
pub fn run_attempt(
    attempt: &mut Attempt<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<Option<ScoreResult>> {
    let definition = attempt.definition();
    writeln!(out, "{}", definition.title)?;
    writeln!(out, "{}", definition.time_frame)?;

    loop {
        write_question(out, attempt)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match line.trim() {
            "q" => return Ok(None),
            "b" => {
                if !attempt.back() {
                    writeln!(out, "Already at the first question.")?;
                }
            }
            answer => {
                let Ok(option) = answer.parse::<u32>() else {
                    writeln!(out, "Enter an option number, b to go back or q to quit.")?;
                    continue;
                };
                let was_last = attempt.is_last();
                if let Err(e) = attempt.answer(option) {
                    writeln!(out, "{e}")?;
                    continue;
                }
                if was_last && attempt.is_complete() {
                    writeln!(out)?;
                    return Ok(Some(attempt.finish()?));
                }
            }
        }
    }
}

/// Take a scale interactively and save the result.
pub fn take<S: Slot>(
    state: &mut AppState<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    scale_id: &str,
) -> eyre::Result<Option<ScoreResult>> {
    let instrument = get_instrument(scale_id)?;
    let mut attempt = Attempt::new(instrument.definition());

    let Some(result) = run_attempt(&mut attempt, input, out)? else {
        tracing::info!(scale_id, answered = attempt.answered(), "attempt abandoned");
        writeln!(out, "Abandoned; nothing was saved.")?;
        return Ok(None);
    };

    let record = record_result(state, instrument, &result)?;
    write_result(out, instrument, &result, Some(&record))?;
    Ok(Some(result))
}

pub fn history<S: Slot>(
    state: &AppState<S>,
    out: &mut impl Write,
    scale_id: Option<&str>,
) -> eyre::Result<()> {
    if let Some(scale_id) = scale_id {
        get_instrument(scale_id)?;
    }

    let records = state.history.list(scale_id)?;
    if records.is_empty() {
        writeln!(out, "No results yet.")?;
        return Ok(());
    }

    for record in records {
        writeln!(
            out,
            "{}  {:<8} {:>3}/{:<3} {:>4} {:<20}{} {}",
            local_time(record.recorded_at, &state.time_zone),
            record.short_title,
            record.score,
            record.max_score,
            format!("{}%", record.percent()),
            record.level,
            if record.safety_flagged { " !" } else { "  " },
            record.id,
        )?;
    }
    Ok(())
}

pub fn trend<S: Slot>(state: &AppState<S>, out: &mut impl Write, scale_id: &str) -> eyre::Result<()> {
    let definition = get_instrument(scale_id)?.definition();
    let points = state.history.trend(scale_id)?;
    if points.is_empty() {
        writeln!(out, "No {} results yet.", definition.short_title)?;
        return Ok(());
    }

    writeln!(out, "{}", definition.title)?;
    for point in points {
        let filled = point.percent() * BAR_WIDTH / 100;
        writeln!(
            out,
            "{}  {:>3}/{:<3} {:<width$} {}",
            local_time(point.recorded_at, &state.time_zone),
            point.score,
            point.max_score,
            "#".repeat(filled as usize),
            point.level,
            width = BAR_WIDTH as usize,
        )?;
    }
    Ok(())
}

pub fn stats<S: Slot>(state: &AppState<S>, out: &mut impl Write) -> eyre::Result<()> {
    let stats = state.history.stats(state.today(), &state.time_zone)?;
    writeln!(out, "Results saved: {}", stats.total_records)?;
    writeln!(out, "Scales taken:  {} of {}", stats.scales_taken, all_instruments().len())?;
    writeln!(out, "Day streak:    {}", stats.streak_days)?;
    Ok(())
}

pub fn clear_history<S: Slot>(state: &mut AppState<S>, out: &mut impl Write) -> eyre::Result<()> {
    state.history.clear()?;
    writeln!(out, "History cleared.")?;
    Ok(())
}

pub fn forget<S: Slot>(
    state: &mut AppState<S>,
    out: &mut impl Write,
    record_id: &str,
) -> eyre::Result<()> {
    let id = parse_record_id(record_id)?;
    let removed = state.history.remove(id)?;
    writeln!(
        out,
        "Removed {} result from {}.",
        removed.short_title,
        local_time(removed.recorded_at, &state.time_zone)
    )?;
    Ok(())
}

pub fn show_config(
    out: &mut impl Write,
    path: &Path,
    config: &MindselfConfig,
) -> eyre::Result<()> {
    writeln!(out, "Config file:       {}", path.display())?;
    writeln!(out, "Data directory:    {}", config.resolved_data_dir()?.display())?;
    writeln!(out, "History retention: {}", config.history_retention)?;
    writeln!(
        out,
        "Time zone:         {}",
        config.time_zone.as_deref().unwrap_or("system")
    )?;
    Ok(())
}
