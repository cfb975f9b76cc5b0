//! MCP server setup and lifecycle.
//!
//! Provides [`run_server`] which starts the stdio-based MCP server,
//! registering all dashboard tools and blocking until the client disconnects.

use meetcost_core::{MeetcostConfig, MeetcostError};
use meetcost_dashboard::Dashboard;
use meetcost_store::SqliteStore;
use rmcp::{model::*, tool_handler, transport::stdio, ServerHandler, ServiceExt};
use tracing::info;

use crate::tools::MeetcostServer;

const SERVER_INSTRUCTIONS: &str = "\
Meetcost tracks what meetings cost the team. Use these tools to log meetings and answer cost questions:\n\
- list_meetings: Most recent meetings with their cost snapshots\n\
- add_meeting: Record a meeting; its cost is computed from the attending roles\n\
- delete_meeting: Remove a meeting by id\n\
- get_dashboard_stats: Totals, per-type breakdown, and weekly trend for a date range\n\
- get_period_trends: Cost per day, week, or month for a date range\n\
- get_role_rates / save_role_rates: Read or replace the hourly rate per role\n\
- get_config / save_config: Read or replace currency and working hours\n\
- suggest_optimizations: Ranked suggestions to cut meeting spend\n\
- get_meeting_cost_summary: One-sentence cost summary for a date range\n\
- get_velocity_correlation: How meeting hours relate to sprint velocity (sample data)";

#[tool_handler]
impl ServerHandler for MeetcostServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "meetcost".to_string(),
                title: Some("Meetcost".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some("Meeting cost analytics and optimization advice".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }
}

/// Start the MCP server on stdio transport.
///
/// Opens the SQLite store named in `config` and serves until the client
/// closes stdin.
///
/// # Errors
///
/// Returns [`MeetcostError`] if the store cannot be opened, or the server
/// fails to initialize or hits a transport error.
pub async fn run_server(config: &MeetcostConfig) -> Result<(), MeetcostError> {
    let store = SqliteStore::open(&config.store.path)?;
    let server = MeetcostServer::new(Dashboard::from_config(store, config));
    info!(store = %config.store.path.display(), "starting MCP server on stdio");

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| MeetcostError::Config(format!("MCP server failed to start: {e}")))?;

    service
        .waiting()
        .await
        .map_err(|e| MeetcostError::Config(format!("MCP server error: {e}")))?;

    Ok(())
}
