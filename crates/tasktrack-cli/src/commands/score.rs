//! Score task snapshots.

use clap::Args;
use std::path::PathBuf;
use tasktrack_core::{calculate_task_score, explain_task_score, TaskSnapshot};

#[derive(Args)]
pub struct ScoreArgs {
    /// JSON snapshot (or array of snapshots); stdin when omitted or "-"
    file: Option<PathBuf>,
    /// Print unrounded intermediates instead of the score
    #[arg(long)]
    explain: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(args.file.as_deref())?;
    let value: serde_json::Value = serde_json::from_str(&input)?;

    let output = match value {
        serde_json::Value::Array(items) => {
            let snapshots = items
                .into_iter()
                .map(serde_json::from_value::<TaskSnapshot>)
                .collect::<Result<Vec<_>, _>>()?;
            let results = snapshots
                .iter()
                .map(|s| render(s, args.explain))
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::Value::Array(results)
        }
        other => render(&serde_json::from_value(other)?, args.explain)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn render(snapshot: &TaskSnapshot, explain: bool) -> Result<serde_json::Value, serde_json::Error> {
    if explain {
        serde_json::to_value(explain_task_score(snapshot))
    } else {
        serde_json::to_value(calculate_task_score(snapshot))
    }
}
