//! MCP tool handlers for the phone-intel server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::ServiceError;
use crate::models::NumberFormat;
use crate::services::PhoneLookupService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes phone number lookups as tools.
#[derive(Clone)]
pub struct PhoneIntelMcpServer {
    lookup_service: Arc<dyn PhoneLookupService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PhoneIntelMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "phone-intel".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Phone number intelligence - normalizes raw phone numbers, validates them against numbering-plan data, and reports country, carrier, time zones and line type.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneNumberParams {
    /// Raw phone number, e.g. "+1 (415) 555-2671" or "98765 43210"
    number: String,
    /// Calling code assumed when the number has no leading '+', e.g. "+91"
    #[serde(default)]
    default_country_code: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FormatPhoneNumberParams {
    number: String,
    #[serde(default)]
    default_country_code: Option<String>,
    /// One of e164, international, national, rfc3966; all when omitted
    #[serde(default)]
    format: Option<String>,
}

// Caller-supplied input is behind every service error
fn to_mcp_error(e: ServiceError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl PhoneIntelMcpServer {
    /// Create a new phone-intel MCP server.
    pub fn new(lookup_service: Arc<dyn PhoneLookupService>) -> Self {
        Self {
            lookup_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Normalize, validate and classify a phone number.
    #[tool(
        description = "Normalize, validate and classify a phone number. Returns validity and possibility flags, line type (mobile, fixed line, toll free, ...), country, carrier, time zones and the number in E.164, international, national and RFC 3966 formats."
    )]
    async fn classify_phone_number(
        &self,
        params: Parameters<PhoneNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: classify_phone_number called");
        let result = self
            .lookup_service
            .classify(&params.number, params.default_country_code.as_deref())
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "input": params.number,
            "default_code_applied": result.default_code_applied(),
            "country": result.country_or_unknown(),
            "carrier": result.carrier_or_unknown(),
            "line_type_label": result.line_type.label(),
            "classification": result,
        }))
    }

    /// Clean a raw phone number into +<digits> form.
    #[tool(
        description = "Clean a raw phone number into +<digits> form, prepending the default country code when the number has no leading '+'. Does not check validity."
    )]
    async fn normalize_phone_number(
        &self,
        params: Parameters<PhoneNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let normalized = self
            .lookup_service
            .normalize(&params.number, params.default_country_code.as_deref())
            .map_err(to_mcp_error)?;

        json_result(&normalized)
    }

    /// Render a phone number in one or all supported formats.
    #[tool(description = "Render a phone number in E.164, international, national or RFC 3966 format")]
    async fn format_phone_number(
        &self,
        params: Parameters<FormatPhoneNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let format = params
            .format
            .as_deref()
            .map(str::parse::<NumberFormat>)
            .transpose()
            .map_err(|e| to_mcp_error(ServiceError::InvalidInput(e)))?;

        let formats = self
            .lookup_service
            .format(&params.number, params.default_country_code.as_deref())
            .map_err(to_mcp_error)?;

        match format {
            Some(format) => json_result(&serde_json::json!({
                "format": format,
                "number": formats.get(format),
            })),
            None => json_result(&formats),
        }
    }

    /// Report lookup counters and the numbering-plan data version.
    #[tool(description = "Report lookup counters and the numbering-plan data version")]
    async fn get_lookup_metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(&serde_json::json!({
            "plan_version": self.lookup_service.plan_version(),
            "metrics": self.lookup_service.metrics(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::CallingCode;
    use crate::plan::{LibPhonenumberPlan, NumberingPlan};
    use crate::services::PhoneLookupServiceImpl;

    fn server(default_code: Option<u16>) -> PhoneIntelMcpServer {
        let plan = Arc::new(LibPhonenumberPlan::bundled().unwrap()) as Arc<dyn NumberingPlan>;
        let config = Config {
            default_country_code: default_code.map(|c| CallingCode::new(c).unwrap()),
            ..Default::default()
        };
        let service = Arc::new(PhoneLookupServiceImpl::new(plan, &config));
        PhoneIntelMcpServer::new(service)
    }

    fn response_json(result: CallToolResult) -> serde_json::Value {
        let value = serde_json::to_value(&result).unwrap();
        let text = value["content"][0]["text"].as_str().unwrap().to_string();
        serde_json::from_str(&text).unwrap()
    }

    fn number(number: &str, default_country_code: Option<&str>) -> Parameters<PhoneNumberParams> {
        Parameters(PhoneNumberParams {
            number: number.to_string(),
            default_country_code: default_country_code.map(str::to_string),
        })
    }

    #[test]
    fn test_server_info() {
        let info = server(None).get_info();
        assert_eq!(info.server_info.name, "phone-intel");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_classify_tool() {
        let server = server(None);
        let result = server
            .classify_phone_number(number("+1 (415) 555-2671", None))
            .await
            .unwrap();

        let json = response_json(result);
        assert_eq!(json["country"], "United States");
        assert_eq!(json["default_code_applied"], false);
        assert_eq!(json["classification"]["formats"]["e164"], "+14155552671");
        assert_eq!(json["classification"]["is_valid"], true);
    }

    #[tokio::test]
    async fn test_classify_tool_missing_default_is_invalid_params() {
        let server = server(None);
        let err = server
            .classify_phone_number(number("415 555 2671", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_classify_tool_parse_error_is_invalid_params() {
        let server = server(Some(1));
        let err = server
            .classify_phone_number(number("123", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_normalize_tool_uses_explicit_default() {
        let server = server(Some(1));
        let result = server
            .normalize_phone_number(number("98765 43210", Some("+91")))
            .await
            .unwrap();

        let json = response_json(result);
        assert_eq!(json["value"], "+919876543210");
        assert_eq!(json["default_code_applied"], true);
    }

    #[tokio::test]
    async fn test_format_tool_single_and_all() {
        let server = server(None);

        let single = server
            .format_phone_number(Parameters(FormatPhoneNumberParams {
                number: "+14155552671".to_string(),
                default_country_code: None,
                format: Some("rfc3966".to_string()),
            }))
            .await
            .unwrap();
        let json = response_json(single);
        assert_eq!(json["format"], "rfc3966");
        assert!(json["number"].as_str().unwrap().starts_with("tel:+1"));

        let all = server
            .format_phone_number(Parameters(FormatPhoneNumberParams {
                number: "+14155552671".to_string(),
                default_country_code: None,
                format: None,
            }))
            .await
            .unwrap();
        let json = response_json(all);
        assert_eq!(json["e164"], "+14155552671");
        assert_eq!(json["international"], "+1 415-555-2671");
    }

    #[tokio::test]
    async fn test_format_tool_rejects_unknown_format() {
        let server = server(None);
        let err = server
            .format_phone_number(Parameters(FormatPhoneNumberParams {
                number: "+14155552671".to_string(),
                default_country_code: None,
                format: Some("pretty".to_string()),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_metrics_tool_counts_lookups() {
        let server = server(Some(1));
        server
            .classify_phone_number(number("+14155552671", None))
            .await
            .unwrap();
        let _ = server.classify_phone_number(number("123", None)).await;

        let json = response_json(server.get_lookup_metrics().await.unwrap());
        assert_eq!(json["metrics"]["lookups_total"], 2);
        assert_eq!(json["metrics"]["parse_errors_total"], 1);
        assert!(json["plan_version"].as_str().unwrap().contains("2026.10"));
    }
}
