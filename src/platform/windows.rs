//! Win32 + WebView2 backend.
//!
//! Everything here runs on the thread that created the window. The two
//! construction-time handshake waits and the event loop all pump the same
//! Win32 message queue; asynchronous engine callbacks arrive as ordinary
//! messages and are only observed from inside one of those pumps.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, error, warn};

use windows::core::{w, PCWSTR, PWSTR};
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWA_USE_IMMERSIVE_DARK_MODE};
use windows::Win32::Graphics::Gdi::{MonitorFromWindow, UpdateWindow, MONITOR_DEFAULTTONEAREST};
use windows::Win32::System::Com::{CoInitializeEx, CoTaskMemFree, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{SetProcessDpiAwareness, PROCESS_PER_MONITOR_DPI_AWARE};
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::Shell::GetScaleFactorForMonitor;
use windows::Win32::UI::WindowsAndMessaging::*;

use webview2_com::Microsoft::Web::WebView2::Win32::*;
use webview2_com::{
    CreateCoreWebView2ControllerCompletedHandler, CreateCoreWebView2EnvironmentCompletedHandler,
    NavigationCompletedEventHandler, WebMessageReceivedEventHandler,
};

use crate::bounds::{Extent, SizeConstraints};
use crate::bridge::{self, Bridge, CallReply, PendingCall};
use crate::error::{Error, HandshakePhase, Result};
use crate::event_loop::{EventLoop, Poll};
use crate::handshake::Completion;
use crate::options::AppOptions;
use crate::runtime;
use crate::script;
use crate::task_queue::TaskHandle;

const WINDOW_CLASS: PCWSTR = w!("EdgeViewWindow");

/// State the window procedure needs, keyed by HWND in [`WINDOWS`].
/// Replaces the classic untyped `GWLP_USERDATA` pointer with a typed
/// per-thread registry.
struct WindowShared {
    controller: RefCell<Option<ICoreWebView2Controller>>,
    constraints: Cell<SizeConstraints>,
    /// Set by the first successful content-load completion.
    initialized: Cell<bool>,
}

thread_local! {
    static WINDOWS: RefCell<HashMap<isize, Rc<WindowShared>>> = RefCell::new(HashMap::new());
    static CLASS_REGISTERED: Cell<bool> = Cell::new(false);
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn engine_err(context: &str, err: windows::core::Error) -> Error {
    Error::Engine(format!("{context}: {err}"))
}

unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let shared = WINDOWS.with(|map| map.borrow().get(&(hwnd.0 as isize)).cloned());
    let Some(shared) = shared else {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    };

    match msg {
        WM_DESTROY => {
            PostQuitMessage(0);
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        WM_SIZE => {
            // Re-fit the embedded view to the new client rectangle.
            if let Some(controller) = shared.controller.borrow().as_ref() {
                let mut rect = RECT::default();
                if GetClientRect(hwnd, &mut rect).is_ok() {
                    let _ = controller.SetBounds(rect);
                }
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        WM_GETMINMAXINFO => {
            let constraints = shared.constraints.get();
            let mmi = lparam.0 as *mut MINMAXINFO;
            if !mmi.is_null() {
                let (min_w, min_h) = constraints.min_track();
                (*mmi).ptMinTrackSize.x = min_w;
                (*mmi).ptMinTrackSize.y = min_h;
                if let Some((max_w, max_h)) = constraints.max_track() {
                    (*mmi).ptMaxTrackSize.x = max_w;
                    (*mmi).ptMaxTrackSize.y = max_h;
                }
            }
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Retrieve and dispatch one pending message. `false` once the message
/// source is closed, which the handshake waits treat as loop exit.
fn pump_one() -> bool {
    unsafe {
        let mut msg = MSG::default();
        if GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
            true
        } else {
            false
        }
    }
}

/// Remove and dispatch at most one pending message without blocking.
fn poll_message() -> Poll {
    unsafe {
        let mut msg = MSG::default();
        if PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            if msg.message == WM_QUIT {
                return Poll::CloseRequested;
            }
            if !msg.hwnd.is_invalid() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
            Poll::Dispatched
        } else {
            Poll::Empty
        }
    }
}

/// The webview plus the bridge state tasks operate on. Handed to every
/// task-queue entry and the idle hook at drain time, which keeps the
/// non-`Send` COM handles out of the queued closures.
pub(crate) struct Engine {
    webview: ICoreWebView2,
    bridge: Rc<RefCell<Bridge>>,
    shared: Rc<WindowShared>,
    hwnd: HWND,
    scale: u32,
}

impl Engine {
    pub fn execute_script(&self, js: &str) -> Result<()> {
        let js_wide = wide(js);
        unsafe { self.webview.ExecuteScript(PCWSTR(js_wide.as_ptr()), None) }
            .map_err(|e| engine_err("ExecuteScript failed", e))
    }

    fn post_envelope(&self, json: &str) -> Result<()> {
        let json_wide = wide(json);
        unsafe { self.webview.PostWebMessageAsJson(PCWSTR(json_wide.as_ptr())) }
            .map_err(|e| engine_err("PostWebMessageAsJson failed", e))
    }

    /// Reply to a script-originated call: settle the page-side promise
    /// stored under `index` and free the script-side index.
    pub fn resolve_call(&self, index: u64, ok: bool, data: &str) {
        if let Err(err) = self.execute_script(&script::resolve_call(index, ok, data)) {
            warn!(index, "bridge reply failed: {err}");
        }
    }

    /// Fire-and-forget event to the page-side handler registered under
    /// `event`.
    pub fn emit(&self, event: &str, data: &str) {
        if let Err(err) = self.execute_script(&script::emit_event(event, data)) {
            warn!(event, "event emit failed: {err}");
        }
    }

    /// Native-originated call: allocate a correlation index, record the
    /// continuation, and post the envelope to the page. Pool exhaustion
    /// rejects the continuation instead of silently dropping the call.
    pub fn invoke(&self, func: &str, args: Vec<Value>, on_reply: Box<dyn FnOnce(CallReply)>) {
        let index = match self.bridge.borrow_mut().begin_call(PendingCall::new(on_reply)) {
            Ok(index) => index,
            Err((err, call)) => {
                error!(func, "outbound call refused: {err}");
                call.settle(Err(err.to_string()));
                return;
            }
        };

        let envelope = bridge::Envelope::new(index, func, args);
        if let Err(err) = self.post_envelope(&envelope.to_json()) {
            warn!(func, index, "outbound call not delivered: {err}");
            if let Some(call) = self.bridge.borrow_mut().take_pending(index) {
                call.settle(Err(err.to_string()));
            }
        }
    }

    pub fn bind(&self, name: &str, handler: impl FnMut(u64, &str) + 'static) {
        self.bridge.borrow_mut().bind(name, handler);
    }

    pub fn unbind(&self, name: &str) {
        self.bridge.borrow_mut().unbind(name);
    }

    pub fn set_size(&self, width: u32, height: u32) -> Result<()> {
        let physical = Extent::new(width, height).scaled(self.scale);
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                0,
                0,
                physical.width as i32,
                physical.height as i32,
                SWP_NOMOVE | SWP_NOZORDER,
            )
        }
        .map_err(|e| engine_err("SetWindowPos failed", e))
    }

    pub fn set_min_size(&self, width: u32, height: u32) {
        let mut constraints = self.shared.constraints.get();
        constraints.min = Extent::new(width, height).scaled(self.scale);
        self.shared.constraints.set(constraints);
    }

    /// A zero extent clears the bound and re-enables the maximize
    /// affordance; anything else records it and disables maximize.
    pub fn set_max_size(&self, width: u32, height: u32) {
        let mut constraints = self.shared.constraints.get();
        constraints.max = Extent::new(width, height).scaled(self.scale);
        self.shared.constraints.set(constraints);

        unsafe {
            let style = GetWindowLongW(self.hwnd, GWL_STYLE) as u32;
            let maximizable = style & WS_MAXIMIZEBOX.0 != 0;
            if constraints.maximize_enabled() != maximizable {
                let style = if constraints.maximize_enabled() {
                    style | WS_MAXIMIZEBOX.0
                } else {
                    style & !WS_MAXIMIZEBOX.0
                };
                SetWindowLongW(self.hwnd, GWL_STYLE, style as i32);
            }
        }
    }

    pub fn quit(&self) {
        unsafe { PostQuitMessage(0) };
    }
}

/// Cloneable, `Send` producer of deferred engine work. Everything funnels
/// through the task queue and executes on the loop thread during idle
/// slices, so the bridge state stays thread-confined without locks.
pub(crate) struct WindowHandle {
    tasks: TaskHandle<Engine>,
}

impl Clone for WindowHandle {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

impl WindowHandle {
    pub fn result(&self, index: u64, ok: bool, data: &str) {
        let data = data.to_string();
        self.tasks
            .dispatch(move |engine| engine.resolve_call(index, ok, &data));
    }

    pub fn emit(&self, event: &str, data: &str) {
        let event = event.to_string();
        let data = data.to_string();
        self.tasks.dispatch(move |engine| engine.emit(&event, &data));
    }

    pub fn invoke(
        &self,
        func: &str,
        args: Vec<Value>,
        on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        let func = func.to_string();
        self.tasks
            .dispatch(move |engine| engine.invoke(&func, args, Box::new(on_reply)));
    }

    pub fn execute_script(&self, js: &str) {
        let js = js.to_string();
        self.tasks.dispatch(move |engine| {
            if let Err(err) = engine.execute_script(&js) {
                warn!("deferred script failed: {err}");
            }
        });
    }

    pub fn bind(&self, name: &str, handler: impl FnMut(u64, &str) + Send + 'static) {
        let name = name.to_string();
        self.tasks
            .dispatch(move |engine| engine.bind(&name, handler));
    }

    pub fn unbind(&self, name: &str) {
        let name = name.to_string();
        self.tasks.dispatch(move |engine| engine.unbind(&name));
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.tasks.dispatch(move |engine| {
            if let Err(err) = engine.set_size(width, height) {
                warn!("deferred resize failed: {err}");
            }
        });
    }

    pub fn set_min_size(&self, width: u32, height: u32) {
        self.tasks
            .dispatch(move |engine| engine.set_min_size(width, height));
    }

    pub fn set_max_size(&self, width: u32, height: u32) {
        self.tasks
            .dispatch(move |engine| engine.set_max_size(width, height));
    }

    pub fn quit(&self) {
        self.tasks.dispatch(|engine| engine.quit());
    }
}

/// A native window with an embedded, fully initialized WebView2 instance.
pub(crate) struct Window {
    engine: Engine,
    event_loop: EventLoop<Engine>,
    // Held for the window's lifetime; the controller alone does not pin it.
    _environment: ICoreWebView2Environment,
}

impl Window {
    /// Create the window and drive the two-phase engine handshake to
    /// completion before returning. Any failure aborts construction; the
    /// window never becomes visible.
    pub fn create(options: AppOptions) -> Result<Self> {
        unsafe {
            CoInitializeEx(None, COINIT_APARTMENTTHREADED)
                .ok()
                .map_err(|e| Error::WindowCreation(format!("COM initialization failed: {e}")))?;
            // Already-set awareness is fine.
            let _ = SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE);
        }

        if !runtime::check_runtime().available {
            return Err(Error::RuntimeMissing);
        }

        let hwnd = create_window(&options)?;
        let scale = monitor_scale(hwnd);
        debug!(scale, "window created");

        let initial = Extent::new(options.width, options.height).scaled(scale);
        unsafe {
            SetWindowPos(
                hwnd,
                None,
                0,
                0,
                initial.width as i32,
                initial.height as i32,
                SWP_NOMOVE | SWP_NOZORDER,
            )
            .map_err(|e| Error::WindowCreation(format!("SetWindowPos failed: {e}")))?;

            let enabled = BOOL(1);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWA_USE_IMMERSIVE_DARK_MODE,
                &enabled as *const _ as *const _,
                std::mem::size_of::<BOOL>() as u32,
            );
        }

        let shared = Rc::new(WindowShared {
            controller: RefCell::new(None),
            constraints: Cell::new(SizeConstraints::default()),
            initialized: Cell::new(false),
        });
        WINDOWS.with(|map| {
            map.borrow_mut().insert(hwnd.0 as isize, Rc::clone(&shared));
        });

        let created = init_webview(hwnd, &shared, &options);
        let (environment, controller, webview, bridge) = match created {
            Ok(parts) => parts,
            Err(err) => {
                WINDOWS.with(|map| {
                    map.borrow_mut().remove(&(hwnd.0 as isize));
                });
                unsafe {
                    let _ = DestroyWindow(hwnd);
                }
                return Err(err);
            }
        };
        shared.controller.replace(Some(controller));

        Ok(Self {
            engine: Engine {
                webview,
                bridge,
                shared,
                hwnd,
                scale,
            },
            event_loop: EventLoop::new(),
            _environment: environment,
        })
    }

    pub fn handle(&self) -> WindowHandle {
        WindowHandle {
            tasks: self.event_loop.handle(),
        }
    }

    pub fn bind(&mut self, name: &str, handler: impl FnMut(u64, &str) + 'static) {
        self.engine.bind(name, handler);
    }

    pub fn unbind(&mut self, name: &str) {
        self.engine.unbind(name);
    }

    pub fn result(&self, index: u64, ok: bool, data: &str) {
        let data = data.to_string();
        self.event_loop
            .queue()
            .push(move |engine| engine.resolve_call(index, ok, &data));
    }

    pub fn emit(&self, event: &str, data: &str) {
        let event = event.to_string();
        let data = data.to_string();
        self.event_loop
            .queue()
            .push(move |engine| engine.emit(&event, &data));
    }

    pub fn invoke(
        &self,
        func: &str,
        args: Vec<Value>,
        on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        let func = func.to_string();
        self.event_loop
            .queue()
            .push(move |engine| engine.invoke(&func, args, Box::new(on_reply)));
    }

    pub fn execute_script(&self, js: &str) -> Result<()> {
        self.engine.execute_script(js)
    }

    pub fn on_idle(&mut self, mut hook: impl FnMut() + 'static) {
        self.event_loop.set_idle(Box::new(move |_engine| hook()));
    }

    pub fn set_size(&self, width: u32, height: u32) -> Result<()> {
        self.engine.set_size(width, height)
    }

    pub fn set_min_size(&self, width: u32, height: u32) {
        self.engine.set_min_size(width, height);
    }

    pub fn set_max_size(&self, width: u32, height: u32) {
        self.engine.set_max_size(width, height);
    }

    pub fn quit(&self) {
        self.engine.quit();
    }

    /// Inject the bridge bootstrap, navigate, and run the event loop until
    /// a close request arrives. Returns once the controller is released.
    pub fn run(&mut self, location: &str) -> Result<()> {
        let bootstrap = wide(script::BOOTSTRAP);
        unsafe {
            self.engine
                .webview
                .AddScriptToExecuteOnDocumentCreated(PCWSTR(bootstrap.as_ptr()), None)
        }
        .map_err(|e| engine_err("bootstrap injection failed", e))?;

        let url = resolve_location(location)?;
        let url_wide = wide(&url);
        unsafe { self.engine.webview.Navigate(PCWSTR(url_wide.as_ptr())) }
            .map_err(|e| engine_err("Navigate failed", e))?;

        debug!(%url, "entering event loop");
        self.event_loop.run(&mut self.engine, poll_message);
        debug!("event loop stopped");

        if let Some(controller) = self.engine.shared.controller.borrow().as_ref() {
            unsafe { controller.Close() }.map_err(|e| engine_err("controller close failed", e))?;
        }
        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        WINDOWS.with(|map| {
            map.borrow_mut().remove(&(self.engine.hwnd.0 as isize));
        });
        self.engine.shared.controller.replace(None);
        unsafe {
            let _ = DestroyWindow(self.engine.hwnd);
        }
    }
}

fn create_window(options: &AppOptions) -> Result<HWND> {
    unsafe {
        let hinstance = GetModuleHandleW(None)
            .map_err(|e| Error::WindowCreation(format!("GetModuleHandle failed: {e}")))?;

        if !CLASS_REGISTERED.with(|c| c.get()) {
            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                lpfnWndProc: Some(wnd_proc),
                hInstance: hinstance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                lpszClassName: WINDOW_CLASS,
                ..Default::default()
            };
            if RegisterClassExW(&wc) == 0 {
                return Err(Error::ClassRegistration);
            }
            CLASS_REGISTERED.with(|c| c.set(true));
        }

        let mut style = WS_OVERLAPPED | WS_SYSMENU | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;
        if options.resizable {
            style |= WS_THICKFRAME;
        }

        let title_wide = wide(&options.title);
        CreateWindowExW(
            WS_EX_DLGMODALFRAME,
            WINDOW_CLASS,
            PCWSTR(title_wide.as_ptr()),
            style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            None,
            None,
            hinstance,
            None,
        )
        .map_err(|e| Error::WindowCreation(format!("CreateWindow failed: {e}")))
    }
}

/// Display scale of the monitor under the window as an integer percentage.
fn monitor_scale(hwnd: HWND) -> u32 {
    unsafe {
        let monitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST);
        match GetScaleFactorForMonitor(monitor) {
            Ok(factor) if factor.0 > 0 => factor.0 as u32,
            _ => 100,
        }
    }
}

type WebViewParts = (
    ICoreWebView2Environment,
    ICoreWebView2Controller,
    ICoreWebView2,
    Rc<RefCell<Bridge>>,
);

/// Drive the two-phase handshake: environment creation, then controller
/// creation. Each wait pumps the message queue one message at a time so
/// the completion callback, itself delivered as a message, can run.
fn init_webview(hwnd: HWND, shared: &Rc<WindowShared>, options: &AppOptions) -> Result<WebViewParts> {
    let data_dir = dirs::data_dir()
        .ok_or(Error::DataDirectory)?
        .join(&options.app_name);
    let data_dir_wide = wide(&data_dir.display().to_string());

    let (env_completion, env_signal) = Completion::new(HandshakePhase::Environment);
    let env_handler = CreateCoreWebView2EnvironmentCompletedHandler::create(Box::new(
        move |status: windows::core::Result<()>, environment: Option<ICoreWebView2Environment>| {
            env_signal.complete(match (status, environment) {
                (Ok(()), Some(environment)) => Ok(environment),
                (Err(err), _) => Err(err.code().0),
                (Ok(()), None) => Err(E_FAIL.0),
            });
            Ok(())
        },
    ));
    unsafe {
        CreateCoreWebView2EnvironmentWithOptions(
            PCWSTR::null(),
            PCWSTR(data_dir_wide.as_ptr()),
            None,
            &env_handler,
        )
    }
    .map_err(|e| Error::Handshake {
        phase: HandshakePhase::Environment,
        status: e.code().0,
    })?;
    let environment = env_completion.wait(pump_one)?;
    debug!("engine environment ready");

    let (controller_completion, controller_signal) = Completion::new(HandshakePhase::Controller);
    let controller_handler = CreateCoreWebView2ControllerCompletedHandler::create(Box::new(
        move |status: windows::core::Result<()>, controller: Option<ICoreWebView2Controller>| {
            controller_signal.complete(match (status, controller) {
                (Ok(()), Some(controller)) => Ok(controller),
                (Err(err), _) => Err(err.code().0),
                (Ok(()), None) => Err(E_FAIL.0),
            });
            Ok(())
        },
    ));
    unsafe { environment.CreateCoreWebView2Controller(hwnd, &controller_handler) }.map_err(|e| {
        Error::Handshake {
            phase: HandshakePhase::Controller,
            status: e.code().0,
        }
    })?;
    let controller = controller_completion.wait(pump_one)?;
    debug!("embedding controller ready");

    let webview = unsafe { controller.CoreWebView2() }
        .map_err(|e| engine_err("CoreWebView2 unavailable", e))?;

    // First successful load: show the window and fit the view. Later
    // completions are no-ops.
    let nav_shared = Rc::clone(shared);
    let nav_controller = controller.clone();
    let nav_handler = NavigationCompletedEventHandler::create(Box::new(
        move |_webview, args: Option<ICoreWebView2NavigationCompletedEventArgs>| {
            let mut success = BOOL::default();
            if let Some(args) = args.as_ref() {
                unsafe { args.IsSuccess(&mut success) }?;
            }
            if success.as_bool() && !nav_shared.initialized.replace(true) {
                unsafe {
                    let _ = ShowWindow(hwnd, SW_SHOWNORMAL);
                    let _ = UpdateWindow(hwnd);
                    let _ = SetFocus(hwnd);
                    nav_controller.SetIsVisible(true)?;
                    let mut rect = RECT::default();
                    GetClientRect(hwnd, &mut rect)?;
                    nav_controller.SetBounds(rect)?;
                }
            }
            Ok(())
        },
    ));
    let mut token = unsafe { std::mem::zeroed() };
    unsafe { webview.add_NavigationCompleted(&nav_handler, &mut token) }
        .map_err(|e| engine_err("NavigationCompleted registration failed", e))?;

    let bridge = Rc::new(RefCell::new(Bridge::new()));
    let bridge_rx = Rc::clone(&bridge);
    let message_handler = WebMessageReceivedEventHandler::create(Box::new(
        move |_webview, args: Option<ICoreWebView2WebMessageReceivedEventArgs>| {
            if let Some(args) = args {
                let mut message = PWSTR::null();
                unsafe {
                    args.TryGetWebMessageAsString(&mut message)?;
                    let text = message.to_string()?;
                    CoTaskMemFree(Some(message.0 as *const _));
                    bridge::dispatch(&bridge_rx, &text);
                }
            }
            Ok(())
        },
    ));
    let mut token = unsafe { std::mem::zeroed() };
    unsafe { webview.add_WebMessageReceived(&message_handler, &mut token) }
        .map_err(|e| engine_err("WebMessageReceived registration failed", e))?;

    if let Ok(settings) = unsafe { webview.Settings() } {
        unsafe {
            let _ = settings.SetAreDevToolsEnabled(options.debug);
            let _ = settings.SetAreDefaultContextMenusEnabled(options.debug);
        }
    }

    Ok((environment, controller, webview, bridge))
}

fn resolve_location(location: &str) -> Result<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(location.to_string());
    }
    let path = std::env::current_dir()
        .map_err(|e| Error::Engine(format!("cannot resolve working directory: {e}")))?
        .join(location);
    Ok(format!(
        "file:///{}",
        path.display().to_string().replace('\\', "/")
    ))
}
