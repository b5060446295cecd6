use anyhow::Result;

use miaaula_lib::reports::summarize_lesson;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, lesson_id: &str, format: &OutputFormat) -> Result<()> {
    let reports = app.reports.list_by_lesson(lesson_id);
    let summary = summarize_lesson(lesson_id, &reports);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reports": reports,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if reports.is_empty() {
                println!("(no attempts for lesson '{}')", lesson_id);
                return Ok(());
            }

            for report in &reports {
                println!(
                    "{}  {:<12} {:>3}%  {:>3}/{:<3}  {}",
                    report.finished_at.format("%Y-%m-%d %H:%M"),
                    report.practice_type,
                    report.accuracy_pct,
                    report.total_correct,
                    report.total_items,
                    report.id
                );
            }

            println!();
            println!(
                "{} attempts, avg {:.1}%, best {}%, {} wrong answers",
                summary.attempts,
                summary.avg_accuracy_pct,
                summary.best_accuracy_pct,
                summary.total_wrong
            );
        }
    }

    Ok(())
}
