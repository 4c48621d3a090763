//! Browser-engine runtime detection.
//!
//! The embedded engine is the evergreen WebView2 runtime, which ships
//! separately from the application. Probing for it up front turns a
//! missing runtime into a clean construction error instead of an opaque
//! handshake failure.

/// Information about the WebView2 runtime on this machine.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// Whether the runtime is available.
    pub available: bool,
    /// The version string of the runtime, if available.
    pub version: Option<String>,
}

/// Check if the WebView2 runtime is available. On non-Windows platforms
/// this always reports unavailable.
pub fn check_runtime() -> RuntimeInfo {
    #[cfg(target_os = "windows")]
    {
        check_runtime_windows()
    }

    #[cfg(not(target_os = "windows"))]
    {
        RuntimeInfo {
            available: false,
            version: None,
        }
    }
}

#[cfg(target_os = "windows")]
fn check_runtime_windows() -> RuntimeInfo {
    use webview2_com::Microsoft::Web::WebView2::Win32::GetAvailableCoreWebView2BrowserVersionString;
    use windows::core::PWSTR;

    unsafe {
        let mut version: PWSTR = PWSTR::null();
        let hr = GetAvailableCoreWebView2BrowserVersionString(None, &mut version);

        if hr.is_ok() && !version.is_null() {
            let version_str = version.to_string().unwrap_or_default();
            windows::Win32::System::Com::CoTaskMemFree(Some(version.0 as *const _));

            if !version_str.is_empty() && version_str != "0.0.0.0" {
                return RuntimeInfo {
                    available: true,
                    version: Some(version_str),
                };
            }
        }

        RuntimeInfo {
            available: false,
            version: None,
        }
    }
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_unavailable_off_windows() {
        let info = check_runtime();
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
