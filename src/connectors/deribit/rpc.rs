// @file: src/connectors/deribit/rpc.rs
// @description: JSON-RPC 2.0 wire envelopes and response unpacking for the Deribit v2 API.
// @author: LAS.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::core::errors::RpcClientError;

pub const JSONRPC_VERSION: &str = "2.0";

pub type Params = Map<String, Value>;


//
// WIRE MODELS
//

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a Params,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a Params) -> Self {
        RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)] pub id: Option<u64>,
    #[serde(default)] pub result: Option<Value>,
    // Kept raw: any non-null error is a remote failure, whatever its shape
    #[serde(default)] pub error: Option<Value>,
}


//
// RESPONSE UNPACKING
//

pub fn parse_response(body: &str) -> Result<RpcResponse, RpcClientError> {
    serde_json::from_str::<RpcResponse>(body)
        .map_err(|e| RpcClientError::InvalidResponse(format!("Malformed JSON-RPC envelope: {}", e)))
}

impl RpcResponse {
    // #1. Error takes precedence over result
    // A missing or null result is returned as Value::Null.
    pub fn into_result(self) -> Result<Value, RpcClientError> {
        match self.error {
            None | Some(Value::Null) => {}
            Some(err) => return Err(remote_error(err)),
        }

        Ok(self.result.unwrap_or(Value::Null))
    }
}

// #2. Lenient Error Descriptor
// `{"code": 10, "message": ..}` is the norm; a string code is parsed and a bare
// string (or any other value) becomes the message.
fn remote_error(err: Value) -> RpcClientError {
    let code: Option<i64> = err.get("code").and_then(|c| {
        c.as_i64().or_else(|| c.as_str().and_then(|s| s.trim().parse().ok()))
    });

    let message: String = match err.get("message") {
        Some(Value::String(m)) => m.clone(),
        Some(other) => other.to_string(),
        None => match &err {
            Value::String(m) => m.clone(),
            other => other.to_string(),
        },
    };

    RpcClientError::RemoteProcedure {
        code,
        message,
        data: err.get("data").cloned(),
    }
}

/// `public/get_book_summary_by_instrument` answers with a one-element array.
/// Non-empty arrays yield their first element; anything else is returned as-is.
pub fn unwrap_single(value: Value) -> Value {
    match value {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    }
}
