use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use monument_catalog::MonumentCatalog;
use serde::{Deserialize, Serialize};

use crate::controls::command::{CommandSource, ViewerCommand, ViewerCommandEvent};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following the specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Outbound messages queued by systems and flushed to the parent window
/// once per frame.
#[derive(Debug)]
enum Outbound {
    Notification(RpcNotification),
    Response(RpcResponse),
}

/// Resource mediating RPC traffic between the page and the viewer.
#[derive(Resource, Default)]
pub struct RpcBridge {
    outbound: Vec<Outbound>,
}

impl RpcBridge {
    /// Send a notification to the page without expecting a response.
    pub fn notify(&mut self, method: &str, params: serde_json::Value) {
        self.outbound.push(Outbound::Notification(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }));
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outbound.push(Outbound::Response(response));
    }
}

/// What a routed request resolves to before touching any engine state.
#[derive(Debug, PartialEq)]
pub enum RoutedRequest {
    Command(ViewerCommand),
    CatalogList,
    GetFps,
}

/// Map a JSON-RPC request onto the viewer's command surface. Pure so the
/// routing table is unit-testable without an app.
pub fn route_request(request: &RpcRequest) -> Result<RoutedRequest, RpcError> {
    match request.method.as_str() {
        "viewer.zoom_in" => Ok(RoutedRequest::Command(ViewerCommand::ZoomIn)),
        "viewer.zoom_out" => Ok(RoutedRequest::Command(ViewerCommand::ZoomOut)),
        "viewer.reset_view" => Ok(RoutedRequest::Command(ViewerCommand::ResetView)),
        "viewer.toggle_info" => Ok(RoutedRequest::Command(ViewerCommand::ToggleInfo)),
        "viewer.toggle_fullscreen" => {
            Ok(RoutedRequest::Command(ViewerCommand::ToggleFullscreen))
        }
        "viewer.set_zoom" => {
            #[derive(Deserialize)]
            struct SetZoomParams {
                zoom: f32,
            }
            let params = serde_json::from_value::<SetZoomParams>(request.params.clone())
                .map_err(|_| RpcError::invalid_params("Expected 'zoom' parameter"))?;
            Ok(RoutedRequest::Command(ViewerCommand::SetZoom(params.zoom)))
        }
        "viewer.select_monument" => {
            #[derive(Deserialize)]
            struct SelectParams {
                id: String,
            }
            let params = serde_json::from_value::<SelectParams>(request.params.clone())
                .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))?;
            Ok(RoutedRequest::Command(ViewerCommand::SelectMonument(
                params.id,
            )))
        }
        "catalog.list" => Ok(RoutedRequest::CatalogList),
        "viewer.get_fps" => Ok(RoutedRequest::GetFps),
        other => Err(RpcError::method_not_found(other)),
    }
}

/// Plugin establishing the postMessage RPC layer for iframe deployment.
pub struct RpcBridgePlugin;

impl Plugin for RpcBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RpcBridge>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe queue bridging the JS event callback into the ECS.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            // Cheap pre-filter before JSON parsing happens on the ECS side
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Ownership moves to JS for the lifetime of the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping the thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Incoming RPC message from the embedding page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    catalog: Option<Res<MonumentCatalog>>,
    mut rpc: ResMut<RpcBridge>,
    mut commands_out: EventWriter<ViewerCommandEvent>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                // Only requests carrying an id get a response
                let Some(id) = request.id.clone() else {
                    continue;
                };
                let result = execute_request(
                    &request,
                    &diagnostics,
                    catalog.as_deref(),
                    &mut commands_out,
                );
                rpc.queue_response(match result {
                    Ok(value) => RpcResponse {
                        jsonrpc: "2.0".to_string(),
                        result: Some(value),
                        error: None,
                        id: Some(id),
                    },
                    Err(error) => RpcResponse {
                        jsonrpc: "2.0".to_string(),
                        result: None,
                        error: Some(error),
                        id: Some(id),
                    },
                });
            }
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {parse_error}");
            }
        }
    }
}

fn execute_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    catalog: Option<&MonumentCatalog>,
    commands_out: &mut EventWriter<ViewerCommandEvent>,
) -> Result<serde_json::Value, RpcError> {
    match route_request(request)? {
        RoutedRequest::Command(command) => {
            info!("RPC command: {:?}", command);
            commands_out.write(ViewerCommandEvent {
                command,
                source: CommandSource::Rpc,
            });
            Ok(serde_json::json!({ "success": true }))
        }
        RoutedRequest::CatalogList => {
            let catalog = catalog
                .ok_or_else(|| RpcError::invalid_params("Catalog not loaded yet"))?;
            Ok(serde_json::json!({ "monuments": catalog.monuments }))
        }
        RoutedRequest::GetFps => {
            let fps = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
                .unwrap_or(0.0) as f32;
            Ok(serde_json::json!({ "fps": fps }))
        }
    }
}

/// Flush queued notifications and responses to the parent window, in the
/// order they were produced.
fn send_outgoing_messages(mut rpc: ResMut<RpcBridge>) {
    for message in rpc.outbound.drain(..) {
        match message {
            Outbound::Notification(notification) => send_message_to_parent(&notification),
            Outbound::Response(response) => send_message_to_parent(&response),
        }
    }
}

/// Serialize and post one message to the parent window (the site).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op sink on native targets.
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: Some(serde_json::json!(1)),
        }
    }

    #[test]
    fn routes_parameterless_commands() {
        let routed = route_request(&request("viewer.zoom_in", serde_json::Value::Null)).unwrap();
        assert_eq!(routed, RoutedRequest::Command(ViewerCommand::ZoomIn));

        let routed = route_request(&request("viewer.reset_view", serde_json::Value::Null)).unwrap();
        assert_eq!(routed, RoutedRequest::Command(ViewerCommand::ResetView));
    }

    #[test]
    fn routes_select_monument_with_id() {
        let routed = route_request(&request(
            "viewer.select_monument",
            serde_json::json!({ "id": "taj-mahal" }),
        ))
        .unwrap();
        assert_eq!(
            routed,
            RoutedRequest::Command(ViewerCommand::SelectMonument("taj-mahal".to_string()))
        );
    }

    #[test]
    fn missing_params_map_to_invalid_params() {
        let error =
            route_request(&request("viewer.select_monument", serde_json::Value::Null)).unwrap_err();
        assert_eq!(error.code, -32602);

        let error = route_request(&request(
            "viewer.set_zoom",
            serde_json::json!({ "level": 2.0 }),
        ))
        .unwrap_err();
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn unknown_method_maps_to_method_not_found() {
        let error = route_request(&request("viewer.explode", serde_json::Value::Null)).unwrap_err();
        assert_eq!(error.code, -32601);
        assert_eq!(
            error.data,
            Some(serde_json::json!({ "method": "viewer.explode" }))
        );
    }

    #[test]
    fn request_envelope_deserializes_without_params() {
        let request: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"viewer.zoom_in","id":7}"#).unwrap();
        assert_eq!(request.method, "viewer.zoom_in");
        assert!(request.params.is_null());
        let routed = route_request(&request).unwrap();
        assert_eq!(routed, RoutedRequest::Command(ViewerCommand::ZoomIn));
    }
}
