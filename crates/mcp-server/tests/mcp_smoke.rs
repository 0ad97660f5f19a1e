use anyhow::{Context, Result};
use rmcp::model::CallToolResult;
use rmcp::service::RunningService;
use rmcp::{RoleClient, ServiceError};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

fn locate_query_json_file_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_query-json-file") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/query-json-file`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("query-json-file");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/query-json-file", "target/release/query-json-file"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate query-json-file binary")
}

async fn start_server() -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_query_json_file_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("QUERY_JSON_FILE_TRANSPORT");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

async fn call(
    service: &RunningService<RoleClient, ()>,
    tool: &str,
    args: Value,
) -> Result<CallToolResult> {
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: tool.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {tool}"))??;
    Ok(result)
}

fn text_json(result: &CallToolResult) -> Result<Value> {
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool did not return text content")?;
    serde_json::from_str(text).context("tool output is not valid JSON")
}

fn write_fixture(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("test.json");
    let data = json!({
        "posts": [
            { "content": "Content 1", "id": 1, "title": "Post 1", "user_id": 1 },
            { "content": "Content 2", "id": 2, "title": "Post 2", "user_id": 2 },
            { "content": "Content 3", "id": 3, "title": "Post 3", "user_id": 1 },
        ],
        "users": [
            { "email": "john@example.com", "id": 1, "name": "John Doe" },
            { "email": "jane@example.com", "id": 2, "name": "Jane Doe" },
        ],
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&data)?).context("write fixture")?;
    Ok(path)
}

#[tokio::test]
async fn mcp_exposes_both_tools() -> Result<()> {
    let service = start_server().await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(
        tool_names,
        HashSet::from(["generate-json-schema", "query-json-file"]),
        "unexpected tool inventory"
    );

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn mcp_queries_and_describes_a_file() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let path = write_fixture(tmp.path())?;
    let file_path = path.to_string_lossy().into_owned();
    let service = start_server().await?;

    let result = call(
        &service,
        "query-json-file",
        json!({ "filePath": file_path, "query": "$.posts[?(@.user_id == 1)].title" }),
    )
    .await?;
    assert_ne!(result.is_error, Some(true), "query returned error");
    assert_eq!(
        text_json(&result)?,
        json!({
            "count": 2,
            "data": ["Post 1", "Post 3"],
            "error": null,
            "query": "$.posts[?(@.user_id == 1)].title",
            "status": "success",
        })
    );

    let result = call(
        &service,
        "query-json-file",
        json!({ "filePath": file_path, "query": "$.nonexistent" }),
    )
    .await?;
    let empty = text_json(&result)?;
    assert_eq!(empty["count"], json!(0));
    assert_eq!(empty["data"], json!([]));
    assert_eq!(empty["status"], json!("success"));

    let result = call(
        &service,
        "generate-json-schema",
        json!({ "filePath": file_path }),
    )
    .await?;
    assert_ne!(result.is_error, Some(true), "schema generation returned error");
    let schema = text_json(&result)?;
    assert_eq!(schema["success"], json!(true));
    assert_eq!(schema["data"]["type"], json!("object"));
    assert_eq!(
        schema["data"]["properties"]["posts"]["items"]["properties"]["user_id"]["type"],
        json!("integer")
    );

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn mcp_reports_failures_as_envelopes() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let path = write_fixture(tmp.path())?;
    let missing = tmp.path().join("missing.json");
    let broken = tmp.path().join("broken.json");
    std::fs::write(&broken, "{ not json").context("write broken fixture")?;
    let service = start_server().await?;

    for (tool, args, code) in [
        (
            "generate-json-schema",
            json!({ "filePath": missing.to_string_lossy() }),
            "NOT_FOUND",
        ),
        (
            "query-json-file",
            json!({ "filePath": broken.to_string_lossy(), "query": "$.a" }),
            "INVALID_FORMAT",
        ),
        (
            "query-json-file",
            json!({ "filePath": path.to_string_lossy(), "query": "$.posts[" }),
            "QUERY_ERROR",
        ),
    ] {
        let result = call(&service, tool, args).await?;
        assert_eq!(result.is_error, Some(true), "{tool} should fail with {code}");
        let envelope = text_json(&result)?;
        assert_eq!(envelope["success"], json!(false));
        assert_eq!(envelope["code"], json!(code));
        assert!(envelope["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    let rejected = call(
        &service,
        "query-json-file",
        json!({ "filePath": path.to_string_lossy(), "query": "   " }),
    )
    .await;
    assert!(rejected.is_err(), "blank query must be rejected by the protocol layer");

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn mcp_rejects_undecodable_arguments_with_envelopes() -> Result<()> {
    let service = start_server().await?;

    for (tool, args) in [
        ("generate-json-schema", json!({})),
        ("query-json-file", json!({ "query": "$.a" })),
        ("query-json-file", json!({ "filePath": 42, "query": "$.a" })),
    ] {
        let outcome = tokio::time::timeout(
            Duration::from_secs(10),
            service.call_tool(CallToolRequestParam {
                name: tool.to_string().into(),
                arguments: args.as_object().cloned(),
            }),
        )
        .await
        .with_context(|| format!("timeout calling {tool}"))?;

        let err = match outcome {
            Err(ServiceError::McpError(err)) => err,
            other => anyhow::bail!("{tool} with {args}: expected a protocol error, got {other:?}"),
        };
        let envelope: Value =
            serde_json::from_str(&err.message).context("error message is not a JSON envelope")?;
        assert_eq!(envelope["code"], json!("INVALID_ARGUMENTS"), "{tool} with {args}");
        assert_eq!(envelope["success"], json!(false));
        assert_eq!(err.data, Some(envelope));
    }

    service.cancel().await?;
    Ok(())
}
