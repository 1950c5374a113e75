use std::sync::Arc;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use roma_core::romaji::RomanizationTable;
use roma_session::Matcher;

use crate::CliError;

/// One keystroke of a replay and the matcher state it left behind.
#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: char,
    pub accepted: bool,
    pub unit_completed: bool,
    pub sequence_completed: bool,
    pub cursor: usize,
    pub buffer: String,
    pub hint: String,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub target: String,
    pub steps: Vec<ReplayStep>,
    pub correct: usize,
    pub miss: usize,
    pub accuracy: f64,
    pub finished: bool,
}

/// Drive a fresh matcher over `keys`, recording every outcome.
pub fn replay(target: &str, keys: &str, table: Arc<RomanizationTable>) -> ReplayReport {
    let mut m = Matcher::new(target, table);
    let steps = keys
        .chars()
        .map(|key| {
            let r = m.submit(key);
            ReplayStep {
                key,
                accepted: r.accepted,
                unit_completed: r.unit_completed,
                sequence_completed: r.sequence_completed,
                cursor: m.cursor(),
                buffer: m.buffer().to_string(),
                hint: m.current_hint(),
            }
        })
        .collect();

    let total = m.correct_count() + m.miss_count();
    let accuracy = if total == 0 {
        0.0
    } else {
        m.correct_count() as f64 / total as f64
    };
    ReplayReport {
        target: target.to_string(),
        steps,
        correct: m.correct_count(),
        miss: m.miss_count(),
        accuracy,
        finished: m.is_finished(),
    }
}

pub fn print_replay(report: &ReplayReport, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("target: {}", report.target);
    for step in &report.steps {
        let mark = match (step.accepted, step.unit_completed) {
            (false, _) => "miss",
            (true, true) => "unit",
            (true, false) => "ok",
        };
        println!(
            "  {:?}  {:<4}  cursor={:<3} buffer={:<6} next={}",
            step.key, mark, step.cursor, step.buffer, step.hint
        );
    }
    println!(
        "correct={} miss={} accuracy={:.1}% finished={}",
        report.correct,
        report.miss,
        report.accuracy * 100.0,
        report.finished
    );
    Ok(())
}

/// A target unit and the keystrokes that type it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Column {
    pub kana: String,
    pub romaji: String,
}

/// Canonical keystrokes for `target`, split by the unit each key is typed on.
///
/// A doubled geminate letter is typed once and shows under the geminate
/// marker; the unit after it shows only the rest of its spelling.
pub fn romanize(target: &str, table: Arc<RomanizationTable>) -> Result<Vec<Column>, CliError> {
    let mut m = Matcher::new(target, table);
    let unknown = m.unknown_units();
    if !unknown.is_empty() {
        return Err(CliError::UnknownUnits(
            unknown.into_iter().map(|u| u.key).collect(),
        ));
    }

    let mut columns: Vec<Column> = Vec::new();
    let mut column_start = None;
    for key in m.remaining_romaji().chars() {
        let Some(unit) = m.current_unit() else {
            break;
        };
        if column_start != Some(unit.start) {
            column_start = Some(unit.start);
            columns.push(Column {
                kana: unit.key,
                romaji: String::new(),
            });
        }
        if let Some(column) = columns.last_mut() {
            column.romaji.push(key);
        }
        m.submit(key);
    }
    Ok(columns)
}

pub fn print_romanize(columns: &[Column]) {
    let romaji: String = columns.iter().map(|c| c.romaji.as_str()).collect();
    println!("{romaji}");

    let mut kana_row = String::new();
    let mut romaji_row = String::new();
    for column in columns {
        let width = column.kana.width().max(column.romaji.width());
        pad_to(&mut kana_row, &column.kana, width);
        pad_to(&mut romaji_row, &column.romaji, width);
    }
    println!("{}", kana_row.trim_end());
    println!("{}", romaji_row.trim_end());
}

/// Append `text` padded with spaces to `width` display columns, plus a separator.
fn pad_to(row: &mut String, text: &str, width: usize) {
    row.push_str(text);
    row.extend(std::iter::repeat(' ').take(width.saturating_sub(text.width()) + 1));
}
