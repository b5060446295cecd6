use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let items = app.invalid_items.list();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("(no invalid items)");
                return Ok(());
            }

            for item in &items {
                let missing = if item.missing_options.is_empty() {
                    "-".to_string()
                } else {
                    item.missing_options
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };

                println!(
                    "{}  {}  missing options: {}",
                    item.logged_at.format("%Y-%m-%d %H:%M"),
                    item.question_id,
                    missing
                );
                if !item.reference.is_empty() {
                    println!("    ref: {}", item.reference);
                }
                println!("    {}", item.snippet);
            }
        }
    }

    Ok(())
}
