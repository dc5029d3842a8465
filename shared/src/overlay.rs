//! Detection-box overlay geometry.
//!
//! The AI service returns `[x1, y1, x2, y2]` boxes in the pixel space of the
//! uploaded image. The preview is rendered at an arbitrary display size, so
//! the overlay is expressed in percentages of the image's natural dimensions
//! and scales with it.

/// A detection box as CSS percentage offsets within the preview container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBox {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
}

impl OverlayBox {
    /// Convert a pixel-space box to percentages of the image's natural size.
    /// Returns `None` until the image has loaded (dimensions unknown/zero).
    pub fn from_bbox(bbox: [f64; 4], natural_width: f64, natural_height: f64) -> Option<Self> {
        if natural_width <= 0.0 || natural_height <= 0.0 {
            return None;
        }
        let [x1, y1, x2, y2] = bbox;
        Some(Self {
            left_pct: x1 / natural_width * 100.0,
            top_pct: y1 / natural_height * 100.0,
            width_pct: (x2 - x1) / natural_width * 100.0,
            height_pct: (y2 - y1) / natural_height * 100.0,
        })
    }

    /// Inline style positioning the box inside a `position: relative` parent.
    pub fn style(&self) -> String {
        format!(
            "left:{:.4}%;top:{:.4}%;width:{:.4}%;height:{:.4}%",
            self.left_pct, self.top_pct, self.width_pct, self.height_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_pixel_box_to_percentages() {
        let overlay = OverlayBox::from_bbox([100.0, 50.0, 300.0, 150.0], 400.0, 200.0).unwrap();
        assert_eq!(overlay.left_pct, 25.0);
        assert_eq!(overlay.top_pct, 25.0);
        assert_eq!(overlay.width_pct, 50.0);
        assert_eq!(overlay.height_pct, 50.0);
    }

    #[test]
    fn unknown_dimensions_yield_no_overlay() {
        assert!(OverlayBox::from_bbox([0.0, 0.0, 10.0, 10.0], 0.0, 100.0).is_none());
        assert!(OverlayBox::from_bbox([0.0, 0.0, 10.0, 10.0], 100.0, 0.0).is_none());
    }

    #[test]
    fn full_frame_box_covers_the_image() {
        let overlay = OverlayBox::from_bbox([0.0, 0.0, 640.0, 480.0], 640.0, 480.0).unwrap();
        assert_eq!(overlay.style(), "left:0.0000%;top:0.0000%;width:100.0000%;height:100.0000%");
    }
}
