//! Raw API call handler.

use anyhow::Result;
use pyload_rpc::RpcRequest;
use serde_json::Value;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Call `method` with positional `args` and `key=value` keyword arguments,
/// then print the JSON result.
pub async fn execute(
    ctx: &CliContext,
    method: &str,
    args: &[String],
    kwargs: &[String],
) -> Result<()> {
    let mut request = RpcRequest::new(method).args(args);
    for raw in kwargs {
        let (key, value) = parse_kwarg(raw)?;
        request = request.kwarg(key, value);
    }

    let result = ctx.rpc().invoke(request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Split `key=value`. The value is parsed as JSON and sent as a plain
/// string when it is not valid JSON.
pub fn parse_kwarg(raw: &str) -> Result<(String, Value), CliError> {
    let (key, value) = raw
        .split_once('=')
        .filter(|(k, _)| !k.trim().is_empty())
        .ok_or_else(|| CliError::Arguments(format!("expected KEY=VALUE, got '{raw}'")))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}
