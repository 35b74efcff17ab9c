use chrono::{DateTime, Utc};
use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use longdrive_model::{format_distance, Attempt, AttemptEntry, GolfModel, UpdateNameForm};
use longdrive_storage::KeyValueStore;

#[derive(Subcommand)]
pub enum NameCommands {
    /// Show the player name
    Show,
    /// Set the player name
    Set {
        /// New name (surrounding whitespace is trimmed)
        name: String,
    },
}

#[derive(Subcommand)]
pub enum AttemptCommands {
    /// Log a drive
    Add {
        /// Distance in meters
        distance: String,
    },
    /// List logged drives, newest first
    List,
    /// Delete every logged drive
    Clear {
        /// Skip the safety check
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn handle_name_command<S: KeyValueStore>(
    model: &GolfModel<S>,
    command: NameCommands,
) -> anyhow::Result<()> {
    match command {
        NameCommands::Show => {
            let name = model.name();
            if name.is_empty() {
                println!("{}", "No name set".yellow());
                println!("{}", "Use 'longdrive name set <NAME>' to add one".dimmed());
            } else {
                println!("{}", name.bold());
            }
        }
        NameCommands::Set { name } => {
            let mut form = UpdateNameForm::new();
            form.set_input(name);
            let saved = form.save(model)?;
            println!("{} {}", "✅ Name updated:".green(), saved.bold());
        }
    }
    Ok(())
}

pub fn handle_attempt_command<S: KeyValueStore>(
    model: &GolfModel<S>,
    command: AttemptCommands,
) -> anyhow::Result<()> {
    match command {
        AttemptCommands::Add { distance } => {
            let mut entry = AttemptEntry::new();
            entry.set_input(distance);
            let attempt = entry.save(model)?;
            println!(
                "{} {} meters",
                "✅ Attempt logged:".green(),
                format_distance(attempt.value).cyan()
            );
            if model.personal_best() == Some(attempt.value) {
                println!("{}", "🏆 New personal best!".yellow().bold());
            }
        }
        AttemptCommands::List => {
            let history = model.history();
            if history.is_empty() {
                println!("{}", "No attempts logged".yellow());
                println!("{}", "Use 'longdrive attempt add <METERS>' to log one".dimmed());
                return Ok(());
            }

            println!("{}", "Attempt history:".bold());
            println!("{}", attempts_table(&history));
        }
        AttemptCommands::Clear { yes } => {
            if !yes {
                println!(
                    "{}",
                    "This deletes every logged attempt. Re-run with --yes to confirm.".yellow()
                );
                return Ok(());
            }
            model.clear_attempts()?;
            println!("{}", "✅ Attempt history cleared".green());
        }
    }
    Ok(())
}

pub fn show_stats<S: KeyValueStore>(model: &GolfModel<S>) {
    for line in stats_lines(model) {
        println!("{}", line);
    }
}

/// Summary lines: name, total, and best/latest once something is logged
pub fn stats_lines<S: KeyValueStore>(model: &GolfModel<S>) -> Vec<String> {
    let name = model.name();
    let name = if name.is_empty() { "Anonymous" } else { name.as_str() };

    let mut lines = vec![
        format!("{} long drive golf record", name),
        format!("Total attempts: {}", model.attempt_count()),
    ];

    if let (Some(best), Some(latest)) = (model.personal_best(), model.latest_attempt()) {
        lines.push(format!("Personal best: {} meters", format_distance(best)));
        lines.push(format!("Latest attempt: {} meters", format_distance(latest)));
    }
    lines
}

pub fn attempts_table(attempts: &[Attempt]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["When", "Distance (m)"]);
    for attempt in attempts {
        table.add_row(vec![
            format_date(&attempt.date),
            format_distance(attempt.value),
        ]);
    }
    table
}

/// e.g. "Jun 1, 9:05 AM"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %-I:%M %p").to_string()
}
