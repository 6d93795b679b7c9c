//! Conversion between packed 32-bit ARGB pixels and [`Color`] buffers.
//!
//! Image codecs typically hand out pixels as `0xAARRGGBB` words. The
//! annealer only works on RGB, so the alpha byte of every position is kept
//! aside in [`PixelBuffer`] and re-attached on the way out.

use crate::color::Color;

impl Color {
    /// Unpacks the RGB part of a `0xAARRGGBB` word. Alpha is ignored.
    pub fn from_argb(word: u32) -> Self {
        let [_, r, g, b] = word.to_be_bytes();
        Self::from_rgb8(r, g, b)
    }

    /// Packs this color into a `0xAARRGGBB` word with the given alpha.
    pub fn to_argb(self, alpha: u8) -> u32 {
        let [r, g, b] = self.to_rgb8();
        u32::from_be_bytes([alpha, r, g, b])
    }
}

/// A flattened image split into RGB colors and per-position alpha.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelBuffer {
    /// Row-major RGB colors.
    pub colors: Vec<Color>,
    /// Alpha byte of each position, same length as `colors`.
    pub alpha: Vec<u8>,
}

impl PixelBuffer {
    /// Splits packed ARGB words into colors and alpha.
    pub fn from_argb(words: &[u32]) -> Self {
        let colors = words.iter().map(|&w| Color::from_argb(w)).collect();
        let alpha = words.iter().map(|&w| (w >> 24) as u8).collect();
        Self { colors, alpha }
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Re-packs colors and alpha into ARGB words.
    ///
    /// Alpha stays attached to its position: after a morph the pixel at
    /// index `i` keeps the alpha the buffer had at `i`.
    pub fn to_argb(&self) -> Vec<u32> {
        self.colors
            .iter()
            .zip(&self.alpha)
            .map(|(c, &a)| c.to_argb(a))
            .collect()
    }
}
