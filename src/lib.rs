//! Embed a WebView2 browser in a native window, with a bidirectional
//! script↔native call bridge.
//!
//! The interesting part is not the window; it is reconciling an
//! asynchronous, callback-driven engine with a cooperative single-threaded
//! execution model:
//!
//! - [`handshake`] turns the engine's two-phase asynchronous setup into a
//!   blocking constructor by pumping native messages until each completion
//!   signal fires.
//! - [`event_loop`] interleaves native messages, deferred tasks from the
//!   [`task_queue`], and an idle hook, giving native input strict priority.
//! - [`bridge`] correlates calls and replies across the script/native
//!   boundary by index, with a FIFO [`allocator`] pool on each side.
//!
//! See [`App`] for the embedding surface.

mod app;
mod options;
mod platform;

pub mod allocator;
pub mod bounds;
pub mod bridge;
pub mod error;
pub mod event_loop;
pub mod handshake;
pub mod runtime;
pub mod script;
pub mod task_queue;

pub use app::{App, Handle};
pub use error::{Error, HandshakePhase, Result};
pub use options::AppOptions;
pub use runtime::{check_runtime, RuntimeInfo};
