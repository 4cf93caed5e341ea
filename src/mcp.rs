//! img2palette MCP (Model Context Protocol) server
//!
//! Standalone MCP server binary that exposes palette extraction through the
//! Model Context Protocol over stdio, one JSON-RPC message per line.

use img2palette::{extract_palette, generate_svg, RenderOptions};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// MCP Request structure
#[derive(Debug, serde::Deserialize)]
struct McpRequest {
    #[serde(default)]
    #[allow(dead_code)]
    jsonrpc: String,
    #[serde(flatten)]
    kind: RequestKind,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
enum RequestKind {
    Initialize {
        id: Value,
        #[serde(default)]
        params: Value,
    },
    ToolsList { id: Value },
    ToolsCall { id: Value, params: ToolCallParams },
}

#[derive(Debug, serde::Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// MCP Response structure
#[derive(Debug, serde::Serialize)]
struct McpResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, serde::Serialize)]
struct McpError {
    code: i32,
    message: String,
}

impl McpResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
            }),
        }
    }
}

struct Img2PaletteMcpServer;

impl Img2PaletteMcpServer {
    fn handle_initialize(&self, _params: Value, id: Value) -> McpResponse {
        McpResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "serverInfo": {
                    "name": "img2palette",
                    "version": env!("CARGO_PKG_VERSION")
                },
                "capabilities": {
                    "tools": {
                        "listChanged": false
                    }
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Value) -> McpResponse {
        McpResponse::success(
            id,
            json!({
                "tools": [
                    {
                        "name": "extract_palette",
                        "description": "Extract a 16-color design palette from a raster image (PNG, JPEG, etc.) using median-cut quantization. Returns the palette sorted by luminance together with complementary and analogous (+/-30 degree hue) colors.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "input_path": {
                                    "type": "string",
                                    "description": "Path to the input image file (PNG, JPEG, etc.)"
                                },
                                "output_path": {
                                    "type": "string",
                                    "description": "Optional path where an SVG swatch sheet will be saved"
                                }
                            },
                            "required": ["input_path"]
                        }
                    }
                ]
            }),
        )
    }

    fn handle_tools_call(&self, params: ToolCallParams, id: Value) -> McpResponse {
        if params.name != "extract_palette" {
            return McpResponse::failure(id, -32601, format!("Unknown tool: {}", params.name));
        }

        let Value::Object(args) = params.arguments else {
            return McpResponse::failure(id, -32602, "Invalid arguments: expected object");
        };

        let Some(input) = args.get("input_path").and_then(|v| v.as_str()) else {
            return McpResponse::failure(id, -32602, "Missing required parameter: input_path");
        };
        let output = args.get("output_path").and_then(|v| v.as_str());

        let design = match extract_palette(Path::new(input)) {
            Ok(design) => design,
            Err(e) => {
                return McpResponse::failure(id, -32000, format!("Extraction failed: {}", e));
            }
        };

        if let Some(output) = output {
            if let Err(e) = generate_svg(&design, Path::new(output), &RenderOptions::default()) {
                return McpResponse::failure(
                    id,
                    -32000,
                    format!("Writing swatch sheet failed: {}", e),
                );
            }
        }

        match design.to_json() {
            Ok(text) => McpResponse::success(
                id,
                json!({
                    "content": [
                        {
                            "type": "text",
                            "text": text
                        }
                    ]
                }),
            ),
            Err(e) => McpResponse::failure(id, -32000, format!("Serialization failed: {}", e)),
        }
    }

    fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let req = match serde_json::from_str::<McpRequest>(line) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!("ignoring malformed request: {}", e);
                return None;
            }
        };
        Some(match req.kind {
            RequestKind::Initialize { id, params } => self.handle_initialize(params, id),
            RequestKind::ToolsList { id } => self.handle_tools_list(id),
            RequestKind::ToolsCall { id, params } => self.handle_tools_call(params, id),
        })
    }

    fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut stdout_lock = stdout.lock();

        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line) {
                let response_json = serde_json::to_string(&response)?;
                writeln!(stdout_lock, "{}", response_json)?;
                stdout_lock.flush()?;
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // stdout carries JSON-RPC, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let server = Img2PaletteMcpServer;
    server.run()?;
    Ok(())
}
