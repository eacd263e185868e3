//! Fitting result thumbnails into fixed frames.
//!
//! Pure rect math: no pixels are decoded. `Fill` scales the image to
//! cover the frame and crops via the alignment; `Fit` letterboxes.

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Placement of the scaled image relative to the frame origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// How the image relates to its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Cover the frame completely, cropping overflow
    Fill,
    /// Show the whole image, leaving letterbox bands
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Computes where a scaled image lands inside a frame.
///
/// Degenerate inputs (zero-sized image or frame) collapse to an empty
/// rect at the frame origin.
pub fn fit_rect(
    image: Size,
    frame: Size,
    mode: FitMode,
    h_align: HorizontalAlign,
    v_align: VerticalAlign,
) -> Rect {
    if image.width <= 0.0 || image.height <= 0.0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
    }

    let scale_x = frame.width / image.width;
    let scale_y = frame.height / image.height;
    let scale = match mode {
        FitMode::Fill => scale_x.max(scale_y),
        FitMode::Fit => scale_x.min(scale_y),
    };

    let width = image.width * scale;
    let height = image.height * scale;

    let x = match h_align {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center => (frame.width - width) / 2.0,
        HorizontalAlign::Right => frame.width - width,
    };
    let y = match v_align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Center => (frame.height - height) / 2.0,
        VerticalAlign::Bottom => frame.height - height,
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_covers_the_frame() {
        // Wide image in a square frame: height drives the scale.
        let rect = fit_rect(
            Size::new(200.0, 100.0),
            Size::new(100.0, 100.0),
            FitMode::Fill,
            HorizontalAlign::Center,
            VerticalAlign::Center,
        );
        assert_eq!(rect.height, 100.0);
        assert_eq!(rect.width, 200.0);
        // Centered crop: half the overflow sticks out on each side.
        assert_eq!(rect.x, -50.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_fit_letterboxes() {
        let rect = fit_rect(
            Size::new(200.0, 100.0),
            Size::new(100.0, 100.0),
            FitMode::Fit,
            HorizontalAlign::Center,
            VerticalAlign::Center,
        );
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 25.0);
    }

    #[test]
    fn test_alignment() {
        let rect = fit_rect(
            Size::new(100.0, 100.0),
            Size::new(200.0, 100.0),
            FitMode::Fit,
            HorizontalAlign::Right,
            VerticalAlign::Top,
        );
        assert_eq!(rect.x, 100.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_degenerate_input() {
        let rect = fit_rect(
            Size::new(0.0, 100.0),
            Size::new(100.0, 100.0),
            FitMode::Fill,
            HorizontalAlign::Center,
            VerticalAlign::Center,
        );
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn test_exact_fit_is_identity() {
        let rect = fit_rect(
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            FitMode::Fill,
            HorizontalAlign::Center,
            VerticalAlign::Center,
        );
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 100.0);
    }
}
