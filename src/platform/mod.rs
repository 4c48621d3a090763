//! Platform backends. Windows is the only real one; everywhere else the
//! stub compiles the same surface but refuses construction.

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub(crate) use self::windows::{Window, WindowHandle};

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub(crate) use self::unsupported::{Window, WindowHandle};
