//! Routes command implementation.

use blogapi_server::routes::ROUTES;
use serde::Serialize;

/// One row of the endpoint table.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    /// HTTP method.
    pub method: &'static str,
    /// Path template.
    pub path: &'static str,
    /// What the endpoint does.
    pub summary: &'static str,
}

/// Prints every endpoint the server exposes.
pub fn run(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<RouteInfo> = ROUTES
        .iter()
        .map(|&(method, path, summary)| RouteInfo {
            method,
            path,
            summary,
        })
        .collect();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            let width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0);
            for row in &rows {
                println!("{:<7} {:<width$}  {}", row.method, row.path, row.summary);
            }
        }
    }

    Ok(())
}
