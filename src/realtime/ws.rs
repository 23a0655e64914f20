/**
 * WebSocket Gateway
 *
 * This module implements the WebSocket endpoint at GET /ws. A connection
 * may authenticate by passing `?token=<jwt>` in the upgrade request; a
 * missing or invalid token still gets a connection, but one that can only
 * listen, not submit.
 *
 * # Connection Lifecycle
 *
 * 1. Upgrade request arrives, token (if any) is verified
 * 2. Connection registers with the fan-out hub
 * 3. A writer task forwards hub events to the socket
 * 4. The read loop parses client events until the socket closes
 * 5. On close the connection unregisters, dropping all subscriptions
 *
 * # Submission Policy
 *
 * An unauthenticated `submit` is governed by the configured policy:
 * `silent` drops it with a log line, `strict` replies with an error event
 * on the same connection. Submissions that fail domain validation follow
 * the same policy.
 */

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::auth::tokens::verify_token;
use crate::realtime::events::{ClientEvent, ServerEvent};
use crate::realtime::hub::ConnId;
use crate::server::config::SubmitPolicy;
use crate::server::state::AppState;

/// Verified identity attached to a WebSocket connection
#[derive(Debug, Clone)]
pub struct WsIdentity {
    /// Authenticated user's ID
    pub user_id: uuid::Uuid,
    /// Authenticated user's email
    pub email: String,
}

/// Query parameters for the upgrade request
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// Optional JWT token
    pub token: Option<String>,
}

/// WebSocket upgrade handler (GET /ws)
///
/// Verifies the optional `token` query parameter and hands the socket off
/// to the connection loop. A bad token downgrades the connection to
/// listen-only rather than rejecting the upgrade.
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let identity = query.token.as_deref().and_then(|token| match verify_token(token) {
        Ok(claims) => match uuid::Uuid::parse_str(&claims.sub) {
            Ok(user_id) => Some(WsIdentity {
                user_id,
                email: claims.email,
            }),
            Err(_) => None,
        },
        Err(err) => {
            tracing::warn!("WebSocket token rejected: {}", err);
            None
        }
    });

    ws.on_upgrade(move |socket| handle_socket(socket, state, identity))
}

/// Drive one WebSocket connection until it closes
async fn handle_socket(socket: WebSocket, state: AppState, identity: Option<WsIdentity>) {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ServerEvent>();
    let conn_id = state.hub.register(event_tx).await;

    match &identity {
        Some(id) => tracing::info!("WebSocket connected: {} as {}", conn_id, id.email),
        None => tracing::info!("WebSocket connected: {} (unauthenticated)", conn_id),
    }

    let (mut sender, mut receiver) = socket.split();

    let mut writer_task = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };
            if sender.send(WsMessage::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(msg)) = receiver.next().await {
        let Ok(event) = serde_json::from_slice::<ClientEvent>(&msg.into_data()) else {
            continue;
        };
        handle_client_event(&state, conn_id, identity.as_ref(), event).await;
    }

    state.hub.unregister(conn_id).await;
    writer_task.abort();
    let _ = (&mut writer_task).await;

    tracing::info!("WebSocket disconnected: {}", conn_id);
}

/// Apply one client event to the hub and chat service
///
/// Join and leave need no authentication; submit does. What happens to a
/// rejected submit depends on the configured policy.
pub async fn handle_client_event(
    state: &AppState,
    conn_id: ConnId,
    identity: Option<&WsIdentity>,
    event: ClientEvent,
) {
    match event {
        ClientEvent::Join { room_id } => {
            state.hub.join(conn_id, room_id).await;
        }
        ClientEvent::Leave { room_id } => {
            state.hub.leave(conn_id, room_id).await;
        }
        ClientEvent::Submit { room_id, content } => {
            let Some(identity) = identity else {
                tracing::debug!("Unauthenticated submit dropped: conn {}", conn_id);
                if state.config.ws_submit_policy == SubmitPolicy::Strict {
                    state
                        .hub
                        .send_to(
                            conn_id,
                            ServerEvent::Error {
                                message: "Authentication required".to_string(),
                            },
                        )
                        .await;
                }
                return;
            };

            if let Err(err) = state
                .chat
                .post_message(room_id, identity.user_id, content)
                .await
            {
                tracing::debug!("Submit rejected for {}: {}", identity.email, err);
                if state.config.ws_submit_policy == SubmitPolicy::Strict {
                    state
                        .hub
                        .send_to(
                            conn_id,
                            ServerEvent::Error {
                                message: err.to_string(),
                            },
                        )
                        .await;
                }
            }
        }
    }
}
