//! MCP server exposing the meeting cost dashboard to agents and IDEs.
//!
//! Implements a Model Context Protocol server using rmcp. Every dashboard
//! operation is a tool (`list_meetings`, `add_meeting`, `get_dashboard_stats`,
//! `suggest_optimizations`, ...) served over stdio, so an assistant can log
//! meetings and answer cost questions in plain language.
//!
//! # Examples
//!
//! ```no_run
//! use meetcost_core::MeetcostConfig;
//!
//! # async fn example() -> Result<(), meetcost_core::MeetcostError> {
//! meetcost_mcp::server::run_server(&MeetcostConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod server;
pub mod tools;
