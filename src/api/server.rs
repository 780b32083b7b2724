//! API Server Module
//!
//! This module implements a JSON-RPC 2.0 server in front of the order board.
//!
//! # Methods
//! - `getInput`: Return the working input text
//! - `setInput`: Replace the working input text
//! - `produceOrder`: Derive a sheet from the working input and keep it
//! - `getOrder`: Return the last derived sheet (or `null`)
//! - `deriveOrders`: Derive lines from a payload in the params, without touching the board

use crate::{
    board::OrderBoard,
    config::Config,
    input::{InputError, OrderInput},
    policy::BatchSizePolicy,
};
use axum::{extract::State, routing::post, Json, Router};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
/// Input text is not a valid payload
pub const INPUT_MALFORMED: i32 = -32001;
/// Input text is blank
pub const INPUT_EMPTY: i32 = -32002;

/// Shared application state that is accessible across all request handlers
#[derive(Clone)]
pub struct AppState {
    board: OrderBoard,
}

/// The main API server struct
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server instance
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port, etc.)
    /// * `board` - The board holding the working input and last sheet
    pub fn new(config: Config, board: OrderBoard) -> Self {
        Self {
            config,
            state: AppState { board },
        }
    }

    /// Starts the API server and begins listening for incoming requests
    ///
    /// # Returns
    /// `Ok(())` when the server shuts down, or an error if binding fails
    pub async fn start(self) -> anyhow::Result<()> {
        let app = router(self.state.board);

        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the router with a single POST endpoint at "/"
pub fn router(board: OrderBoard) -> Router {
    Router::new()
        .route("/", post(handle_rpc))
        .with_state(AppState { board })
}

/// JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` is populated, never both.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn failure(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }

    /// Serialize `result` into a success response
    fn from_result<T: Serialize>(id: Value, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::success(id, value),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                Self::failure(id, INTERNAL_ERROR, "Internal error")
            }
        }
    }

    fn from_input_error(id: Value, e: &InputError) -> Self {
        let code = match e {
            InputError::Empty => INPUT_EMPTY,
            InputError::Malformed { .. } => INPUT_MALFORMED,
        };
        Self::failure(id, code, e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct SetInputParams {
    input: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProduceOrderParams {
    #[serde(default)]
    use_maximum_batch_size: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeriveOrdersParams {
    input: Value,
    #[serde(default)]
    use_maximum_batch_size: Option<bool>,
}

/// Decode params, treating absent params as the default value
fn params_or_default<T: DeserializeOwned + Default>(params: Value) -> Result<T, serde_json::Error> {
    if params.is_null() {
        Ok(T::default())
    } else {
        serde_json::from_value(params)
    }
}

fn invalid_params(id: Value, e: serde_json::Error) -> Json<JsonRpcResponse> {
    warn!("Invalid params: {}", e);
    Json(JsonRpcResponse::failure(
        id,
        INVALID_PARAMS,
        format!("Invalid params: {}", e),
    ))
}

/// Main RPC request handler
///
/// Routes the request to the handler for its method.
///
/// # Arguments
/// * `state` - Shared application state (injected by Axum)
/// * `request` - The JSON-RPC request
///
/// # Returns
/// A JSON-RPC response (either success or error)
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);

    if request.jsonrpc != "2.0" {
        return Json(JsonRpcResponse::failure(
            request.id,
            INVALID_REQUEST,
            "Invalid request: jsonrpc must be \"2.0\"",
        ));
    }

    match request.method.as_str() {
        "getInput" => handle_get_input(state, request).await,
        "setInput" => handle_set_input(state, request).await,
        "produceOrder" => handle_produce_order(state, request).await,
        "getOrder" => handle_get_order(state, request).await,
        "deriveOrders" => handle_derive_orders(state, request),
        _ => Json(JsonRpcResponse::failure(
            request.id,
            METHOD_NOT_FOUND,
            "Method not found",
        )),
    }
}

/// Handles the "getInput" RPC method
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request (params are ignored)
///
/// # Returns
/// `{ "input": <text> }` with the board's working input
async fn handle_get_input(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    let input = state.board.input().await;
    Json(JsonRpcResponse::success(request.id, json!({ "input": input })))
}

/// Handles the "setInput" RPC method
///
/// The text replaces the working input unparsed; errors in it surface on
/// the next "produceOrder".
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request with `{ "input": <text> }` params
///
/// # Returns
/// `{ "accepted": true }`, or an invalid params error if `input` is not a string
async fn handle_set_input(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    let params: SetInputParams = match serde_json::from_value(request.params) {
        Ok(params) => params,
        Err(e) => return invalid_params(request.id, e),
    };

    state.board.set_input(params.input).await;
    Json(JsonRpcResponse::success(request.id, json!({ "accepted": true })))
}

/// Handles the "produceOrder" RPC method
///
/// `useMaximumBatchSize` in the params overrides the input's own flag;
/// omitting it derives with the policy the input (or configuration) picks.
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request with optional `{ "useMaximumBatchSize": bool }` params
///
/// # Returns
/// The new `OrderSheet`, or an input error (-32001 malformed, -32002 empty)
/// with the previous sheet left on the board
async fn handle_produce_order(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    let params: ProduceOrderParams = match params_or_default(request.params) {
        Ok(params) => params,
        Err(e) => return invalid_params(request.id, e),
    };

    let explicit = params
        .use_maximum_batch_size
        .map(BatchSizePolicy::from_use_maximum);

    match state.board.produce(explicit).await {
        Ok(sheet) => Json(JsonRpcResponse::from_result(request.id, &sheet)),
        Err(e) => Json(JsonRpcResponse::from_input_error(request.id, &e)),
    }
}

/// Handles the "getOrder" RPC method
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request (params are ignored)
///
/// # Returns
/// The last derived `OrderSheet`, or `null` if none has been produced yet
async fn handle_get_order(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    match state.board.latest().await {
        Some(sheet) => Json(JsonRpcResponse::from_result(request.id, &sheet)),
        None => Json(JsonRpcResponse::success(request.id, Value::Null)),
    }
}

/// Handles the "deriveOrders" RPC method
///
/// Derives from the payload carried in the params. The board is not read
/// or written; only its default policy is used.
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request with `{ "input": <payload>, "useMaximumBatchSize"?: bool }` params
///
/// # Returns
/// The derived `OrderLine` list
fn handle_derive_orders(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    let params: DeriveOrdersParams = match serde_json::from_value(request.params) {
        Ok(params) => params,
        Err(e) => return invalid_params(request.id, e),
    };

    let input = match OrderInput::from_value(params.input) {
        Ok(input) => input,
        Err(e) => {
            warn!("Rejected deriveOrders payload: {}", e);
            return Json(JsonRpcResponse::from_input_error(request.id, &e));
        }
    };

    let explicit = params
        .use_maximum_batch_size
        .map(BatchSizePolicy::from_use_maximum);
    let policy = input.policy(explicit, state.board.default_policy());
    let lines = input.derive(policy);
    debug!("Derived {} order lines statelessly", lines.len());

    Json(JsonRpcResponse::from_result(request.id, &lines))
}
