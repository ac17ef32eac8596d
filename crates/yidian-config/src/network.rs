use std::env;

use serde::{Deserialize, Serialize};

fn default_ws_url() -> String {
    "ws://127.0.0.1:8765/events".to_string()
}

/// Connection to the page relay.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let ws_url = env::var("WS_URL").unwrap_or_else(|_| default_ws_url());

        Self { ws_url }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
        }
    }
}
