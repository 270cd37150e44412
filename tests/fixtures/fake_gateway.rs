#![allow(unused)]

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::Value;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

pub type Received = Arc<Mutex<Vec<ReceivedRequest>>>;

#[derive(Clone)]
struct FakeGateway {
    status: StatusCode,
    reply: &'static str,
    received: Received,
}

async fn record(
    State(gateway): State<FakeGateway>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    gateway.received.lock().await.push(ReceivedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (gateway.status, gateway.reply)
}

/// Serves every path with `status` and `reply`, recording what it receives.
pub async fn start_fake_gateway(
    status: StatusCode,
    reply: &'static str,
) -> Result<(SocketAddr, Received)> {
    let received = Arc::new(Mutex::new(vec![]));
    let app = Router::new().fallback(record).with_state(FakeGateway {
        status,
        reply,
        received: received.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((addr, received))
}
