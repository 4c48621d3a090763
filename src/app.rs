//! Public facade over the platform window.

use serde_json::Value;

use crate::bridge::CallReply;
use crate::error::Result;
use crate::options::AppOptions;
use crate::platform;

/// A native window with an embedded browser engine and a bidirectional
/// script↔native call bridge.
///
/// Construction blocks until the engine's asynchronous two-phase handshake
/// completes; a returned `App` is fully usable. [`App::run`] then takes
/// over the calling thread until the window closes.
///
/// ```no_run
/// use edgeview::{App, AppOptions};
///
/// let mut app = App::new(AppOptions {
///     title: "demo".into(),
///     ..AppOptions::default()
/// })?;
/// let handle = app.handle();
/// app.bind("greet", move |index, args| {
///     println!("greet({args})");
///     handle.result(index, true, "\"hello from native\"");
/// });
/// app.run("https://example.com")?;
/// # Ok::<(), edgeview::Error>(())
/// ```
pub struct App {
    inner: platform::Window,
}

impl App {
    /// Create the window and initialize the embedded engine.
    pub fn new(options: AppOptions) -> Result<Self> {
        Ok(Self {
            inner: platform::Window::create(options)?,
        })
    }

    /// A cloneable, `Send` handle for driving the window while
    /// [`App::run`] holds the thread. Handle operations are deferred onto
    /// the event loop's task queue and execute on its idle slices.
    pub fn handle(&self) -> Handle {
        Handle {
            inner: self.inner.handle(),
        }
    }

    /// Expose `name` to page script. The handler receives the correlation
    /// index and the argument array, still serialized; it is expected to
    /// eventually answer with [`App::result`] (or [`Handle::result`])
    /// keyed by the same index.
    ///
    /// Page side: `webview.invoke(name, ...args)` returns a promise
    /// settled by that reply.
    pub fn bind(&mut self, name: &str, handler: impl FnMut(u64, &str) + 'static) {
        self.inner.bind(name, handler);
    }

    /// Remove a binding. Calls already in flight keep their index until
    /// answered.
    pub fn unbind(&mut self, name: &str) {
        self.inner.unbind(name);
    }

    /// Answer a script-originated call. `data` is the reply payload as
    /// JSON text; `ok` selects resolution or rejection.
    pub fn result(&self, index: u64, ok: bool, data: &str) {
        self.inner.result(index, ok, data);
    }

    /// Fire an event at the page-side handler registered under `event`
    /// with `webview.event(name, fn)`. No reply is expected.
    pub fn emit(&self, event: &str, data: &str) {
        self.inner.emit(event, data);
    }

    /// Call a page-side handler and await its reply. The continuation
    /// receives the serialized reply value or rejection reason; a
    /// correlation-index pool exhausted error rejects it immediately.
    pub fn invoke(
        &self,
        func: &str,
        args: Vec<Value>,
        on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        self.inner.invoke(func, args, on_reply);
    }

    /// Execute raw script in the page, immediately.
    pub fn execute_script(&self, js: &str) -> Result<()> {
        self.inner.execute_script(js)
    }

    /// Register the hook invoked once per loop iteration when no native
    /// message and no queued task remain.
    pub fn on_idle(&mut self, hook: impl FnMut() + 'static) {
        self.inner.on_idle(hook);
    }

    /// Resize the window. Logical units; the construction-time scale
    /// factor is applied.
    pub fn set_size(&self, width: u32, height: u32) -> Result<()> {
        self.inner.set_size(width, height)
    }

    /// Set the minimum window extent. Logical units.
    pub fn set_min_size(&self, width: u32, height: u32) {
        self.inner.set_min_size(width, height);
    }

    /// Set the maximum window extent. Logical units; `(0, 0)` clears the
    /// constraint and re-enables the maximize affordance.
    pub fn set_max_size(&self, width: u32, height: u32) {
        self.inner.set_max_size(width, height);
    }

    /// Load `location`, an `http(s)` URL or a path relative to the
    /// working directory, and run the event loop until the window
    /// closes.
    pub fn run(&mut self, location: &str) -> Result<()> {
        self.inner.run(location)
    }

    /// Request loop shutdown.
    pub fn quit(&self) {
        self.inner.quit();
    }
}

/// Deferred-operation handle to a running [`App`]. Clone it freely and
/// move clones into bound handlers, the idle hook, or other threads.
#[derive(Clone)]
pub struct Handle {
    inner: platform::WindowHandle,
}

impl Handle {
    /// Deferred [`App::result`].
    pub fn result(&self, index: u64, ok: bool, data: &str) {
        self.inner.result(index, ok, data);
    }

    /// Deferred [`App::emit`].
    pub fn emit(&self, event: &str, data: &str) {
        self.inner.emit(event, data);
    }

    /// Deferred [`App::invoke`].
    pub fn invoke(
        &self,
        func: &str,
        args: Vec<Value>,
        on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        self.inner.invoke(func, args, on_reply);
    }

    /// Deferred [`App::execute_script`]; failures are logged, not
    /// returned.
    pub fn execute_script(&self, js: &str) {
        self.inner.execute_script(js);
    }

    /// Deferred [`App::bind`]. The handler runs on the loop thread.
    pub fn bind(&self, name: &str, handler: impl FnMut(u64, &str) + Send + 'static) {
        self.inner.bind(name, handler);
    }

    /// Deferred [`App::unbind`].
    pub fn unbind(&self, name: &str) {
        self.inner.unbind(name);
    }

    /// Deferred [`App::set_size`].
    pub fn set_size(&self, width: u32, height: u32) {
        self.inner.set_size(width, height);
    }

    /// Deferred [`App::set_min_size`].
    pub fn set_min_size(&self, width: u32, height: u32) {
        self.inner.set_min_size(width, height);
    }

    /// Deferred [`App::set_max_size`].
    pub fn set_max_size(&self, width: u32, height: u32) {
        self.inner.set_max_size(width, height);
    }

    /// Deferred [`App::quit`].
    pub fn quit(&self) {
        self.inner.quit();
    }
}
