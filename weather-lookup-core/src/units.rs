//! Unit conversion and display helpers.

const ABSOLUTE_ZERO_C: f64 = 273.15;

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - ABSOLUTE_ZERO_C) * 9.0 / 5.0 + 32.0
}

/// Fahrenheit rounded to the nearest whole degree, as shown to users.
pub fn display_fahrenheit(kelvin: f64) -> i64 {
    whole_degrees(kelvin_to_fahrenheit(kelvin))
}

// Exact halves go to the even neighbour, like `{:.0f}` formatting does.
fn whole_degrees(degrees: f64) -> i64 {
    degrees.round_ties_even() as i64
}

/// Upper-case the first character and lower-case the rest: `"light rain"` → `"Light rain"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_from_kelvin() {
        assert_eq!(display_fahrenheit(300.15), 80);
        assert_eq!(display_fahrenheit(273.15), 32);
        assert_eq!(display_fahrenheit(295.0), 71);
        assert_eq!(display_fahrenheit(0.0), -460);
        assert!((kelvin_to_fahrenheit(373.15) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(whole_degrees(0.5), 0);
        assert_eq!(whole_degrees(1.5), 2);
        assert_eq!(whole_degrees(2.5), 2);
        assert_eq!(whole_degrees(-0.5), 0);
        assert_eq!(whole_degrees(-1.5), -2);
        assert_eq!(whole_degrees(70.6), 71);
    }

    #[test]
    fn capitalize_description() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize("HEAVY Snow"), "Heavy snow");
        assert_eq!(capitalize("ébauche"), "Ébauche");
        assert_eq!(capitalize(""), "");
    }
}
