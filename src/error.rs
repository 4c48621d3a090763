use std::fmt;

/// The asynchronous setup phase that produced a failing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakePhase {
    /// Creation of the browser-engine environment.
    Environment,
    /// Creation of the embedding controller bound to the window.
    Controller,
}

impl fmt::Display for HandshakePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandshakePhase::Environment => write!(f, "environment creation"),
            HandshakePhase::Controller => write!(f, "controller creation"),
        }
    }
}

/// Errors surfaced by the embedding engine.
///
/// Construction errors are fatal: no partially-initialized window is ever
/// returned. Malformed bridge traffic is not an error at all; the codec
/// drops it internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to register the window class")]
    ClassRegistration,

    #[error("failed to create the native window: {0}")]
    WindowCreation(String),

    #[error("WebView2 runtime is not installed")]
    RuntimeMissing,

    #[error("no writable per-application data directory")]
    DataDirectory,

    #[error("{phase} failed with status {status:#010x}")]
    Handshake { phase: HandshakePhase, status: i32 },

    #[error("message source closed before initialization completed")]
    MessageSourceClosed,

    #[error("correlation index pool exhausted")]
    IndexPoolExhausted,

    #[error("webview call failed: {0}")]
    Engine(String),

    #[error("unsupported platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
