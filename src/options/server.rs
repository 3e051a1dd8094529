use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Development static file server settings.
pub struct ServerOptions {
    /// Socket address to listen on.
    pub bind: String,
    /// Directory files are served from.
    pub root: PathBuf,
    /// Document served for `/`.
    pub index: String,
    /// Send permissive CORS headers so module scripts load cross-origin.
    pub cors: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".into(),
            root: PathBuf::from("."),
            index: "index.html".into(),
            cors: true,
        }
    }
}
