//! Gamma-corrected color table selected by the rotary encoder

use super::{FULL_WHITE, Rgb, gamma_adjust, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Number of selectable colors
pub const PALETTE_LEN: usize = 7;

#[allow(clippy::unreadable_literal)]
const BASE_COLORS: [Rgb; PALETTE_LEN] = hex_palette![
    0xFF0000, // Red
    0xFFA500, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x0000FF, // Blue
    0x800080, // Purple
    0xFFFFFF  // White
];

const GREEN_SLOT: usize = 3;
const BLUE_SLOT: usize = 4;
const WHITE_SLOT: usize = 6;

/// Palette brightness scaling
#[derive(Debug, Clone, Copy)]
pub struct PaletteConfig {
    /// Per-channel output level (red, green, blue), each in `0.0..=1.0`
    pub channel_levels: [f32; 3],
    /// Gamma exponent
    pub gamma: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            channel_levels: [0.25, 0.3, 0.15],
            gamma: 2.5,
        }
    }
}

/// Fixed, ordered table of corrected colors
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    /// Build the table by correcting every base color once.
    pub fn new(config: &PaletteConfig) -> Self {
        let mut colors = BASE_COLORS;
        for color in &mut colors {
            *color = gamma_adjust(*color, config.gamma, config.channel_levels);
        }
        Self { colors }
    }

    pub const fn len(&self) -> usize {
        PALETTE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        PALETTE_LEN == 0
    }

    /// Color at `index`, wrapping around the table
    pub const fn color(&self, index: usize) -> Rgb {
        self.colors[index % PALETTE_LEN]
    }

    /// Corrected white
    pub const fn white(&self) -> Rgb {
        self.colors[WHITE_SLOT]
    }

    /// Marker for the previous power meter ceiling
    pub const fn marker(&self) -> Rgb {
        self.colors[GREEN_SLOT]
    }

    /// Power meter fill color
    pub const fn meter(&self) -> Rgb {
        self.colors[BLUE_SLOT]
    }

    /// Brightest available color, used to flag speed changes and resets
    pub const fn spark(&self) -> Rgb {
        FULL_WHITE
    }

    /// Palette slot for an absolute encoder position (may be negative)
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn index_for(position: i32) -> usize {
        position.rem_euclid(PALETTE_LEN as i32) as usize
    }
}

/// Tracks the encoder and keeps the selected palette slot.
///
/// The slot only changes when the encoder reports a position different from
/// the previous reading.
#[derive(Debug, Clone, Default)]
pub struct PaletteSelector {
    last_position: Option<i32>,
    index: usize,
}

impl PaletteSelector {
    pub const fn new() -> Self {
        Self {
            last_position: None,
            index: 0,
        }
    }

    /// Selected palette slot
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Feed an encoder reading. Returns true if the slot was recomputed.
    pub fn update(&mut self, position: i32) -> bool {
        if self.last_position == Some(position) {
            return false;
        }
        self.last_position = Some(position);
        self.index = Palette::index_for(position);
        log!("ring color set to #{} from encoder {}", self.index, position);
        true
    }
}
