//! Frame buffer for one LED strip

use crate::OutputDriver;
use crate::color::{OFF, Rgb};
use crate::error::ConfigError;

/// Pixels of one strip, flushed to its driver only when something changed.
///
/// `MAX` is the compile-time capacity; the configured length may be shorter.
/// Every index is checked against the configured length, so writes past the
/// end are ignored instead of panicking.
#[derive(Debug, Clone)]
pub struct PixelStrip<const MAX: usize> {
    pixels: [Rgb; MAX],
    output: [Rgb; MAX],
    len: usize,
    brightness: u8,
    dirty: bool,
}

impl<const MAX: usize> PixelStrip<MAX> {
    /// Create a blank strip of `len` pixels.
    ///
    /// The strip starts dirty so the first flush clears whatever the hardware
    /// showed before reset.
    pub const fn new(len: usize, brightness: u8) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if len > MAX {
            return Err(ConfigError::StripTooLong { len, max: MAX });
        }
        Ok(Self {
            pixels: [OFF; MAX],
            output: [OFF; MAX],
            len,
            brightness,
            dirty: true,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pixel at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels().get(index).copied()
    }

    /// Set one pixel
    pub fn set(&mut self, index: usize, color: Rgb) {
        let len = self.len;
        if let Some(pixel) = self.pixels[..len].get_mut(index) {
            if *pixel != color {
                *pixel = color;
                self.dirty = true;
            }
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        let len = self.len;
        for pixel in &mut self.pixels[..len] {
            if *pixel != color {
                *pixel = color;
                self.dirty = true;
            }
        }
    }

    /// Turn every pixel off
    pub fn blank(&mut self) {
        self.fill(OFF);
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.pixels().iter().all(|pixel| *pixel == OFF)
    }

    /// Configured pixels
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Whether there are changes not yet written to the driver
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write pending changes to `driver`, scaled by the strip brightness.
    ///
    /// Returns whether anything was written.
    pub fn flush<O: OutputDriver>(&mut self, driver: &mut O) -> bool {
        if !self.dirty {
            return false;
        }
        let len = self.len;
        let scaled = smart_leds::brightness(self.pixels[..len].iter().copied(), self.brightness);
        for (out, pixel) in self.output[..len].iter_mut().zip(scaled) {
            *out = pixel;
        }
        driver.write(&self.output[..len]);
        self.dirty = false;
        true
    }
}
