//! In-memory image storage for render output.

use crate::{BucketResult, Color};

/// Row-major grid of linear colors, one per output pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into its region of the image.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let row_len = bucket.width as usize;
        if row_len == 0 {
            return;
        }

        for (local_y, row) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.index(bucket.x, bucket.y + local_y as u32);
            self.pixels[start..start + row_len].copy_from_slice(row);
        }
    }

    /// Number of pixels in the image.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bucket;

    #[test]
    fn test_get_set_row_major() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.len(), 12);

        fb.set(3, 1, Color::ONE);
        assert_eq!(fb.get(3, 1), Color::ONE);
        assert_eq!(fb.pixels[4 + 3], Color::ONE);
        assert_eq!(fb.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_write_bucket() {
        let mut fb = Framebuffer::new(5, 4);
        let bucket = Bucket::new(3, 1, 2, 2);
        let pixels = vec![Color::X, Color::Y, Color::Z, Color::ONE];

        fb.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(fb.get(3, 1), Color::X);
        assert_eq!(fb.get(4, 1), Color::Y);
        assert_eq!(fb.get(3, 2), Color::Z);
        assert_eq!(fb.get(4, 2), Color::ONE);

        // Everything else untouched
        let written = fb.pixels.iter().filter(|c| **c != Color::ZERO).count();
        assert_eq!(written, 4);
    }
}
