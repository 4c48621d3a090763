/// Options for creating an [`App`](crate::App).
///
/// `width` and `height` are logical units; the display scale factor of the
/// monitor under the window is applied at construction time.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Name of the per-application storage directory under the user data dir.
    pub app_name: String,
    /// Window title.
    pub title: String,
    /// Initial inner width in logical units. Default: 800
    pub width: u32,
    /// Initial inner height in logical units. Default: 600
    pub height: u32,
    /// Allow resizing (adds a thick frame). Default: false
    pub resizable: bool,
    /// Enable developer tools and default context menus. Default: false
    pub debug: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            app_name: "edgeview".to_string(),
            title: String::new(),
            width: 800,
            height: 600,
            resizable: false,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AppOptions::default();
        assert_eq!(opts.width, 800);
        assert_eq!(opts.height, 600);
        assert!(!opts.resizable);
        assert!(!opts.debug);
        assert_eq!(opts.app_name, "edgeview");
    }
}
