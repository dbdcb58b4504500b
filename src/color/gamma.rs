use super::Rgb;

/// Gamma-correct a color and scale each channel by its own level.
///
/// Every channel is normalized to `0.0..=1.0`, raised to `gamma`, multiplied
/// by the matching entry of `levels` (red, green, blue) and rounded back to
/// 8 bits. Per-channel levels balance LEDs whose blue die is much brighter
/// than the red one, so that white does not look tinted.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn gamma_adjust(color: Rgb, gamma: f32, levels: [f32; 3]) -> Rgb {
    let channel = |value: u8, level: f32| -> u8 {
        let normalized = value as f32 / 255.0;
        let corrected = libm::powf(normalized, gamma) * level.clamp(0.0, 1.0);
        (corrected * 255.0 + 0.5).clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: channel(color.r, levels[0]),
        g: channel(color.g, levels[1]),
        b: channel(color.b, levels[2]),
    }
}
