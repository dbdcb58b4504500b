//! Console logging
//!
//! Prints through `esp_println` when the `esp32-log` feature is enabled.
//! Without it, `log!` still type-checks its arguments but emits nothing.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        {
            esp_println::println!($($arg)*);
        }
        #[cfg(not(feature = "esp32-log"))]
        {
            $crate::log::discard(core::format_args!($($arg)*));
        }
    }};
}

#[cfg(not(feature = "esp32-log"))]
#[inline(always)]
pub(crate) fn discard(_args: core::fmt::Arguments<'_>) {}
