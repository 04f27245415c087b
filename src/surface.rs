//! Canvas2D-like drawing surface abstraction
//!
//! The scene core never talks to a real canvas, GPU, or window. It draws
//! through the [`Surface`] trait, which the host implements over whatever
//! 2D backend it has. A [`RecordingSurface`] double is provided for tests
//! and for running the scene headless.

use glam::Vec2;
use std::fmt;

/// A straight-alpha RGBA color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 24-bit hex value (0xRRGGBB)
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Opaque color from HSL (hue in degrees, saturation/lightness in percent)
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Color from HSL plus alpha
    pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: r + m,
            g: g + m,
            b: b + m,
            a,
        }
    }

    /// Same color with its alpha scaled by `factor`
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// A gradient color stop (offset in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Fill style for a draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Linear gradient between two points with ordered color stops
    LinearGradient {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    pub fn linear_gradient(from: Vec2, to: Vec2, stops: Vec<ColorStop>) -> Self {
        Paint::LinearGradient { from, to, stops }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

/// Errors a drawing surface can report
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A polygon fill was requested with fewer than 3 vertices
    DegeneratePath { points: usize },
    /// `pop` was called with an empty transform stack
    UnbalancedTransform,
    /// Backend-specific failure (lost context, device error, ...)
    Backend(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::DegeneratePath { points } => {
                write!(f, "polygon fill needs at least 3 points, got {points}")
            }
            SurfaceError::UnbalancedTransform => {
                write!(f, "transform pop without matching push")
            }
            SurfaceError::Backend(msg) => write!(f, "surface backend error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Immediate-mode 2D drawing surface
///
/// Coordinates are in pixels, origin top-left, y down. All fills are
/// subject to the current transform stack. Implementations are expected
/// to be cheap to call; the scene issues a few hundred calls per frame.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint)
    -> Result<(), SurfaceError>;

    /// Fill a closed polygon (the path is implicitly closed back to points[0])
    fn fill_path(&mut self, points: &[Vec2], paint: &Paint) -> Result<(), SurfaceError>;

    fn fill_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        paint: &Paint,
    ) -> Result<(), SurfaceError>;

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint)
    -> Result<(), SurfaceError>;

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        px_size: f32,
        paint: &Paint,
    ) -> Result<(), SurfaceError>;

    // Transform stack
    fn push(&mut self);
    fn pop(&mut self) -> Result<(), SurfaceError>;
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
}

/// Per-kind draw call totals recorded by [`RecordingSurface`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawCounts {
    pub rects: u64,
    pub paths: u64,
    pub ellipses: u64,
    pub circles: u64,
    pub texts: u64,
}

impl DrawCounts {
    pub fn total(&self) -> u64 {
        self.rects + self.paths + self.ellipses + self.circles + self.texts
    }
}

/// Surface double that records draw calls instead of painting
///
/// Validates path arity and transform-stack balance so tests catch
/// malformed geometry and leaked push/pop pairs.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    counts: DrawCounts,
    texts: Vec<String>,
    transform_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            counts: DrawCounts::default(),
            texts: Vec::new(),
            transform_depth: 0,
        }
    }

    pub fn counts(&self) -> DrawCounts {
        self.counts
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// True when every push has been matched by a pop
    pub fn transforms_balanced(&self) -> bool {
        self.transform_depth == 0
    }

    /// Resize the recording area (mirrors a host canvas resize)
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(
        &mut self,
        _x: f32,
        _y: f32,
        _w: f32,
        _h: f32,
        _paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.counts.rects += 1;
        Ok(())
    }

    fn fill_path(&mut self, points: &[Vec2], _paint: &Paint) -> Result<(), SurfaceError> {
        if points.len() < 3 {
            return Err(SurfaceError::DegeneratePath {
                points: points.len(),
            });
        }
        self.counts.paths += 1;
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        _cx: f32,
        _cy: f32,
        _rx: f32,
        _ry: f32,
        _rotation: f32,
        _paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.counts.ellipses += 1;
        Ok(())
    }

    fn fill_circle(
        &mut self,
        _cx: f32,
        _cy: f32,
        _r: f32,
        _paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.counts.circles += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _x: f32,
        _y: f32,
        _px_size: f32,
        _paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.counts.texts += 1;
        self.texts.push(text.to_string());
        Ok(())
    }

    fn push(&mut self) {
        self.transform_depth += 1;
    }

    fn pop(&mut self) -> Result<(), SurfaceError> {
        if self.transform_depth == 0 {
            return Err(SurfaceError::UnbalancedTransform);
        }
        self.transform_depth -= 1;
        Ok(())
    }

    fn translate(&mut self, _dx: f32, _dy: f32) {}

    fn rotate(&mut self, _radians: f32) {}

    fn scale(&mut self, _sx: f32, _sy: f32) {}
}
