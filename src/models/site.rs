//! Site footprint that bounds a synthesized layout.

use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_SITE_DEPTH_MM, REFERENCE_SITE_WIDTH_MM};
use crate::error::{LayoutError, Result};

/// Square millimeters per square meter.
const MM2_PER_M2: f64 = 1_000_000.0;

/// Rectangular site boundary in millimeters.
///
/// All room coordinates are offsets from the site's `(0, 0)` corner.
///
/// # Validation
///
/// - width and depth must both be greater than zero
/// - both must fit in `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    width: u32,
    depth: u32,
}

impl Site {
    /// Creates a validated site.
    ///
    /// # Examples
    ///
    /// ```
    /// use archsense::models::Site;
    ///
    /// let site = Site::new(10_000, 15_000).unwrap();
    /// assert_eq!(site.width(), 10_000);
    /// assert!(Site::new(0, 15_000).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSiteDimensions`] if either dimension is
    /// zero, negative, or larger than `u32::MAX`.
    pub fn new(width: i64, depth: i64) -> Result<Self> {
        let invalid = || LayoutError::InvalidSiteDimensions { width, depth };

        let w = u32::try_from(width).map_err(|_| invalid())?;
        let d = u32::try_from(depth).map_err(|_| invalid())?;
        if w == 0 || d == 0 {
            return Err(invalid());
        }

        Ok(Self { width: w, depth: d })
    }

    /// The 10 m x 15 m site the fixed topology was drawn for.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            width: REFERENCE_SITE_WIDTH_MM,
            depth: REFERENCE_SITE_DEPTH_MM,
        }
    }

    /// Site width (x extent) in millimeters.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Site depth (y extent) in millimeters.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Site area in square meters.
    #[must_use]
    pub fn area_m2(&self) -> f64 {
        f64::from(self.width) * f64::from(self.depth) / MM2_PER_M2
    }

    /// Returns true if the rectangle at `(x, y)` with the given extents lies
    /// inside the site boundary.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32, width: u32, depth: u32) -> bool {
        u64::from(x) + u64::from(width) <= u64::from(self.width)
            && u64::from(y) + u64::from(depth) <= u64::from(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let site = Site::new(10_000, 15_000).unwrap();
        assert_eq!(site, Site::reference());
        assert_eq!(site.depth(), 15_000);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            Site::new(0, 100),
            Err(LayoutError::InvalidSiteDimensions {
                width: 0,
                depth: 100
            })
        );
        assert!(Site::new(100, -1).is_err());
        assert!(Site::new(-5, -5).is_err());
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert!(Site::new(i64::from(u32::MAX) + 1, 100).is_err());
        assert!(Site::new(i64::from(u32::MAX), 1).is_ok());
    }

    #[test]
    fn test_area() {
        assert!((Site::reference().area_m2() - 150.0).abs() < f64::EPSILON);
        assert!((Site::new(1000, 1000).unwrap().area_m2() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains() {
        let site = Site::reference();
        assert!(site.contains(0, 0, 10_000, 15_000));
        assert!(site.contains(7000, 3500, 3000, 3000));
        assert!(!site.contains(7000, 3500, 3001, 3000));

        let small = Site::new(1000, 1000).unwrap();
        assert!(!small.contains(0, 0, 5000, 3500));
    }
}
