//! Normalized RGB colors and their distance metric.

/// An RGB color with each channel normalized to `[0.0, 1.0]`.
///
/// Plain value type: cheap to copy, no identity beyond its channels.
///
/// # Examples
///
/// ```
/// use simpix::Color;
///
/// let black = Color::BLACK;
/// let white = Color::WHITE;
/// assert!((black.distance(white) - 3.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel in `[0.0, 1.0]`.
    pub r: f64,
    /// Green channel in `[0.0, 1.0]`.
    pub g: f64,
    /// Blue channel in `[0.0, 1.0]`.
    pub b: f64,
}

impl Color {
    /// All channels at 0.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// All channels at 1.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Builds a color from normalized channels. No clamping is applied.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Converts back to 8-bit channels, truncating toward zero.
    ///
    /// Channels outside `[0.0, 1.0]` saturate.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Euclidean distance between two colors. Same as [`Color::distance`].
#[inline]
pub fn distance(a: Color, b: Color) -> f64 {
    a.distance(b)
}

fn to_byte(channel: f64) -> u8 {
    // `as` saturates for floats, NaN maps to 0
    (channel * 255.0) as u8
}
