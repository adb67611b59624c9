//! Condition code → emoji glyph table.
//!
//! Codes follow OpenWeather's condition groups: 2xx thunderstorm, 3xx drizzle,
//! 5xx rain, 6xx snow, 7xx atmosphere, 800 clear, 80x clouds.

pub const THUNDERSTORM: &str = "🌩️";
pub const DRIZZLE: &str = "🌦️";
pub const RAIN: &str = "🌧️";
pub const SNOW: &str = "❄️";
pub const MIST: &str = "🌫️";
pub const VOLCANIC_ASH: &str = "🌋";
pub const SQUALL: &str = "💨";
pub const TORNADO: &str = "🌪️";
pub const CLEAR: &str = "☀️";
pub const CLOUDS: &str = "☁️";

/// Glyph for a provider condition code, or `""` when the code is not in any known group.
///
/// Ranges are checked lowest bound first and never overlap.
pub fn emoji_for(code: i64) -> &'static str {
    match code {
        200..232 => THUNDERSTORM,
        300..321 => DRIZZLE,
        500..531 => RAIN,
        600..622 => SNOW,
        701..741 => MIST,
        762 => VOLCANIC_ASH,
        771 => SQUALL,
        781 => TORNADO,
        800 => CLEAR,
        801..=804 => CLOUDS,
        _ => "",
    }
}
