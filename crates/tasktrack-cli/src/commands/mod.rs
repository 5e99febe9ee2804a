pub mod config;
pub mod replay;
pub mod report;
pub mod score;
pub mod transitions;

use std::io::Read;
use std::path::Path;

/// Read a JSON document from `path`, or stdin when the path is absent or "-".
pub fn read_input(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| format!("cannot read {}: {e}", p.display()).into()),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
