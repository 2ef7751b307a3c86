#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use revelia::AppConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral local port and returns a config pointing at it.
pub async fn serve(app: Router) -> AppConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    config_for(&format!("http://{addr}"))
}

/// A config whose backend refuses connections.
pub async fn unreachable_backend() -> AppConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    config_for(&format!("http://{addr}"))
}

pub fn config_for(base: &str) -> AppConfig {
    let base = base.to_string();
    AppConfig::from_lookup(move |key| (key == "BACKEND_URL").then(|| base.clone()))
        .unwrap()
}

pub fn with_timeout(mut config: AppConfig, timeout: Duration) -> AppConfig {
    config.request_timeout = timeout;
    config
}

/// Request bodies received by a stub route, in arrival order.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Value>>>);

impl Recorder {
    pub fn push(&self, body: Value) {
        self.0.lock().unwrap().push(body);
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

pub fn sample_analysis() -> Value {
    json!({
        "analysis": {
            "summary": { "es": "X", "en": "You are seeking freedom", "pt": "Você busca liberdade" },
            "themes": ["t1", "t2"],
            "recommendations": {
                "es": ["r1", "r2"],
                "en": ["Keep a journal", "Sleep earlier"]
            }
        }
    })
}
