use anyhow::Result;

use miaaula_lib::reports::{AttemptReport, WrongItemReport, NO_ANSWER_MARKER};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, report_id: &str, format: &OutputFormat) -> Result<()> {
    let report = app.find_report(report_id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            print_report(&report, &app.settings.locale);
        }
    }

    Ok(())
}

fn print_report(report: &AttemptReport, locale: &str) {
    println!("Report {}", report.id);
    println!("Lesson: {} ({})", report.lesson_id, report.practice_type);
    println!("Finished: {} UTC", report.finished_at.format("%Y-%m-%d %H:%M"));
    println!(
        "Score: {}/{} ({}%), {} wrong, {}",
        report.total_correct,
        report.total_items,
        report.accuracy_pct,
        report.total_wrong,
        format_duration(report.duration_sec)
    );

    if report.wrong_items.is_empty() {
        return;
    }

    println!();
    println!("Wrong items:");
    for item in &report.wrong_items {
        print_wrong_item(item, locale);
    }
}

fn print_wrong_item(item: &WrongItemReport, locale: &str) {
    if item.reference.is_empty() {
        println!("  {}", item.question_text);
    } else {
        println!("  [{}] {}", item.reference, item.question_text);
    }
    println!("    your answer: {}", format_answer(&item.your_answer, &item.your_answer_text));
    println!("    correct:     {}", format_answer(&item.correct_answer, &item.correct_answer_text));

    if let Some(text) = item.diagnosis.as_ref().and_then(|d| d.resolve(locale)) {
        println!("    diagnosis: {}", text);
    }
    if let Some(explanation) = &item.explanation {
        println!("    explanation: {}", explanation);
    }
}

fn format_answer(letter: &str, text: &str) -> String {
    if letter == NO_ANSWER_MARKER {
        letter.to_string()
    } else {
        format!("{}) {}", letter, text)
    }
}

fn format_duration(seconds: i64) -> String {
    format!("{}m{:02}s", seconds / 60, seconds % 60)
}
