mod gamma;
mod palette;

use smart_leds::RGB8;

pub use gamma::gamma_adjust;
pub use palette::{Palette, PaletteConfig, PaletteSelector};

pub type Rgb = RGB8;

/// All channels off
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full scale, uncorrected
pub const FULL_WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
