//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::error::MovietimeError;
use crate::orchestrator::Orchestrator;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "movietime";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for Movietime.
pub struct McpServer {
    settings: Settings,
    orchestrator: Option<Orchestrator>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            orchestrator: None,
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("Movietime MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "initialized" => {
                // Notification, no response needed but we'll send empty success
                JsonRpcResponse::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>) -> JsonRpcResponse {
        // Build the HTTP pipeline lazily
        match Orchestrator::new(self.settings.clone()) {
            Ok(orch) => {
                self.orchestrator = Some(orch);
                eprintln!("Orchestrator initialized");
            }
            Err(e) => {
                eprintln!("Failed to initialize orchestrator: {}", e);
                return JsonRpcResponse::error(id, -32000, &format!("Init failed: {}", e));
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            "get_showtimes" => self.tool_get_showtimes(params.arguments).await,
            "get_theater_showtimes" => self.tool_get_theater_showtimes(params.arguments).await,
            "get_movie_details" => self.tool_get_movie_details(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// get_showtimes tool.
    async fn tool_get_showtimes(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let location = match args.get("location").and_then(|v| v.as_str()) {
            Some(l) => l,
            None => return ToolCallResult::error("Missing 'location' argument".to_string()),
        };

        let date = args.get("date").and_then(|v| v.as_str());
        // Non-numeric page values clamp to the first page rather than failing.
        let page = args.get("page").and_then(|v| v.as_i64()).unwrap_or(1);

        let orchestrator = match &self.orchestrator {
            Some(o) => o,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match orchestrator.get_showtimes(location, date, page).await {
            Ok(result) => json_result(&result),
            Err(e) => error_result(&e),
        }
    }

    /// get_theater_showtimes tool.
    async fn tool_get_theater_showtimes(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let theater_id = match args.get("theater_id").and_then(|v| v.as_str()) {
            Some(t) => t,
            None => return ToolCallResult::error("Missing 'theater_id' argument".to_string()),
        };

        let date = args.get("date").and_then(|v| v.as_str());

        let orchestrator = match &self.orchestrator {
            Some(o) => o,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match orchestrator.get_theater_showtimes(theater_id, date).await {
            Ok(result) => json_result(&result),
            Err(e) => error_result(&e),
        }
    }

    /// get_movie_details tool.
    async fn tool_get_movie_details(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let movie_url = match args.get("movie_url").and_then(|v| v.as_str()) {
            Some(m) => m,
            None => return ToolCallResult::error("Missing 'movie_url' argument".to_string()),
        };

        let orchestrator = match &self.orchestrator {
            Some(o) => o,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match orchestrator.get_movie_details(movie_url).await {
            Ok(result) => json_result(&result),
            Err(e) => error_result(&e),
        }
    }
}

/// Serialize a successful payload into a text content block.
fn json_result<T: serde::Serialize>(payload: &T) -> ToolCallResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => ToolCallResult::text(text),
        Err(e) => ToolCallResult::error(format!("Failed to serialize result: {}", e)),
    }
}

/// Serialize a failure with its machine-readable kind so callers can
/// decide whether to retry, reformulate, or give up.
fn error_result(err: &MovietimeError) -> ToolCallResult {
    let payload = json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    });
    ToolCallResult::error(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn page_omitted_behaves_like_page_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/napi/theaterswithshowtimes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "theaters": [{"name": "Some Theater", "movies": []}]
            })))
            .mount(&server)
            .await;

        let mut settings = Settings::default();
        settings.upstream.base_url = server.uri();
        let mut mcp = McpServer::new(settings);

        mcp.handle_request(JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: None,
        })
        .await;

        let call = |args: Value| JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/call".to_string(),
            params: Some(json!({"name": "get_showtimes", "arguments": args})),
        };

        let omitted = mcp
            .handle_request(call(json!({"location": "90210", "date": "2025-05-03"})))
            .await;
        let explicit = mcp
            .handle_request(call(
                json!({"location": "90210", "date": "2025-05-03", "page": 1}),
            ))
            .await;

        let omitted = serde_json::to_value(&omitted).unwrap();
        let explicit = serde_json::to_value(&explicit).unwrap();
        assert_eq!(omitted["result"], explicit["result"]);
        assert_eq!(omitted["result"]["isError"], Value::Null);
    }

    #[test]
    fn error_results_carry_a_kind() {
        let result = error_result(&MovietimeError::InvalidDate("13/40/2025".into()));
        assert_eq!(result.is_error, Some(true));
        let ToolContent::Text { text } = &result.content[0];
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["error"]["kind"], "invalid_date");
        assert!(payload["error"]["message"]
            .as_str()
            .unwrap()
            .contains("13/40/2025"));
    }

    #[tokio::test]
    async fn tools_call_with_unknown_tool_is_a_tool_error() {
        let mut server = McpServer::new(Settings::default());
        let response = server
            .handle_request(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: Some(json!(1)),
                method: "tools/call".to_string(),
                params: Some(json!({"name": "no_such_tool", "arguments": {}})),
            })
            .await;
        let result = serde_json::to_value(&response).unwrap();
        assert_eq!(result["result"]["isError"], json!(true));
    }

    #[tokio::test]
    async fn tools_list_matches_the_tool_surface() {
        let mut server = McpServer::new(Settings::default());
        let response = server
            .handle_request(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: Some(json!(2)),
                method: "tools/list".to_string(),
                params: None,
            })
            .await;
        let result = serde_json::to_value(&response).unwrap();
        let names: Vec<&str> = result["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec!["get_showtimes", "get_theater_showtimes", "get_movie_details"]
        );
    }
}
