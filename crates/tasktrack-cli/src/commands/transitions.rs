//! Show the lifecycle actions allowed from a status.

use clap::Args;
use tasktrack_core::TaskStatus;

#[derive(Args)]
pub struct TransitionsArgs {
    /// Status name, e.g. "in_progress" or "Under Review"
    status: String,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TransitionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let status: TaskStatus = args.status.parse()?;
    let actions = status.available_actions();

    if args.json {
        let rows: Vec<_> = actions
            .iter()
            .map(|a| serde_json::json!({ "action": a, "to": a.target() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if actions.is_empty() {
        println!("{status} is terminal");
    } else {
        for action in actions {
            println!("{action} -> {}", action.target());
        }
    }
    Ok(())
}
