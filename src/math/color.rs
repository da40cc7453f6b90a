//! RGB color helpers shared by palette extraction and guideline synthesis

/// Format an RGB triple as an uppercase `#RRGGBB` string
pub fn format_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Parse a `#RRGGBB` or `RRGGBB` string into an RGB triple
///
/// Returns `None` when the value is not exactly six hex digits after the optional `#`
pub fn parse_hex(value: &str) -> Option<[u8; 3]> {
    let digits = value.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
    };

    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Rec. 709 weighted brightness in `[0, 1]`
pub fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb.map(f64::from);
    0.0722f64.mul_add(b, 0.2126f64.mul_add(r, 0.7152 * g)) / 255.0
}

/// Brightness of a hex color, or `None` if the hex cannot be parsed
pub fn hex_luminance(value: &str) -> Option<f64> {
    parse_hex(value).map(relative_luminance)
}

/// Euclidean distance between two colors in RGB space
pub fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let delta = f64::from(x) - f64::from(y);
            delta * delta
        })
        .sum::<f64>()
        .sqrt()
}
