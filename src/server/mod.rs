//! Stdio transport for the phone lookup tools.
//!
//! stdout carries MCP frames only; all logging goes to stderr.

pub mod handlers;

pub use handlers::PhoneIntelMcpServer;

use crate::metrics::MetricsSummary;
use crate::services::PhoneLookupService;
use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;

/// Serve `lookup_service` over stdin/stdout until the client hangs up.
///
/// Returns the lookup counters as they stood when the session ended.
pub async fn run_server(lookup_service: Arc<dyn PhoneLookupService>) -> Result<MetricsSummary> {
    let server = PhoneIntelMcpServer::new(lookup_service.clone());

    let session = server.serve(stdio()).await?;
    tracing::info!(plan = %lookup_service.plan_version(), "MCP session started on stdio");

    let reason = session.waiting().await?;
    tracing::info!(?reason, "MCP session ended");

    Ok(lookup_service.metrics())
}
