//! Window extent arithmetic: display scaling and size constraints.
//!
//! All public size operations take logical units; the platform stores and
//! applies physical pixels obtained through [`Extent::scaled`].

/// A width/height pair. Units depend on context (logical or physical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const ZERO: Extent = Extent {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Apply an integer-percentage scale factor (100 = no scaling).
    pub fn scaled(self, scale: u32) -> Extent {
        Extent {
            width: self.width * scale / 100,
            height: self.height * scale / 100,
        }
    }
}

/// Minimum and maximum window extents in physical pixels.
///
/// A zero maximum means "unconstrained": the maximize affordance stays
/// enabled and size queries ignore the maximum entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeConstraints {
    pub min: Extent,
    pub max: Extent,
}

impl SizeConstraints {
    /// The minimum track size, always applied.
    pub fn min_track(&self) -> (i32, i32) {
        (self.min.width as i32, self.min.height as i32)
    }

    /// The maximum track size, or `None` when unconstrained.
    pub fn max_track(&self) -> Option<(i32, i32)> {
        if self.max == Extent::ZERO {
            None
        } else {
            Some((self.max.width as i32, self.max.height as i32))
        }
    }

    /// Whether the window may be maximized under these constraints.
    pub fn maximize_enabled(&self) -> bool {
        self.max == Extent::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_identity() {
        let e = Extent::new(800, 600).scaled(100);
        assert_eq!(e, Extent::new(800, 600));
    }

    #[test]
    fn test_scaled_150_percent() {
        let e = Extent::new(800, 600).scaled(150);
        assert_eq!(e, Extent::new(1200, 900));
    }

    #[test]
    fn test_scaled_125_percent_truncates() {
        let e = Extent::new(10, 10).scaled(125);
        assert_eq!(e, Extent::new(12, 12));
    }

    #[test]
    fn test_default_max_is_unconstrained() {
        let c = SizeConstraints::default();
        assert!(c.maximize_enabled());
        assert_eq!(c.max_track(), None);
        assert_eq!(c.min_track(), (0, 0));
    }

    #[test]
    fn test_nonzero_max_disables_maximize() {
        let c = SizeConstraints {
            min: Extent::new(320, 240),
            max: Extent::new(1920, 1080),
        };
        assert!(!c.maximize_enabled());
        assert_eq!(c.max_track(), Some((1920, 1080)));
        assert_eq!(c.min_track(), (320, 240));
    }

    #[test]
    fn test_clearing_max_restores_maximize() {
        let mut c = SizeConstraints {
            min: Extent::ZERO,
            max: Extent::new(1024, 768),
        };
        assert!(!c.maximize_enabled());
        c.max = Extent::ZERO;
        assert!(c.maximize_enabled());
        assert_eq!(c.max_track(), None);
    }
}
