//! Dominant color extraction with named-color labelling

use crate::evidence::model::ColorSwatch;
use crate::io::configuration::{
    ACCENT_PROMINENCE, DOMINANT_PROMINENCE, PRIMARY_PROMINENCE, THUMBNAIL_BOUND,
};
use crate::math::color::{format_hex, rgb_distance};
use crate::math::quantize::median_cut;
use image::DynamicImage;

/// Brand-relevant color anchors used to label extracted swatches
pub const NAMED_COLORS: [(&str, [u8; 3]); 17] = [
    ("Bynder Blue", [0, 161, 222]),
    ("Deep Blue", [0, 102, 204]),
    ("Navy", [17, 34, 68]),
    ("Sky", [102, 204, 255]),
    ("Midnight", [2, 20, 43]),
    ("Sunrise Orange", [255, 149, 0]),
    ("Vivid Red", [220, 20, 60]),
    ("Warm Red", [200, 48, 48]),
    ("Slate", [112, 128, 144]),
    ("Charcoal", [54, 69, 79]),
    ("Stone", [189, 195, 199]),
    ("Cloud", [236, 240, 241]),
    ("Emerald", [46, 204, 113]),
    ("Mint", [171, 235, 198]),
    ("Lavender", [187, 143, 206]),
    ("Magenta", [214, 41, 118]),
    ("Gold", [255, 195, 0]),
];

/// Return up to `max_colors` swatches ranked by prominence, descending
///
/// Large images are downscaled to fit the thumbnail bound first, and
/// transparent pixels are composited over white. An image with no pixels
/// yields an empty list.
pub fn extract_colors(image: &DynamicImage, max_colors: usize) -> Vec<ColorSwatch> {
    let rgba = if image.width() > THUMBNAIL_BOUND || image.height() > THUMBNAIL_BOUND {
        image.thumbnail(THUMBNAIL_BOUND, THUMBNAIL_BOUND).to_rgba8()
    } else {
        image.to_rgba8()
    };

    let pixels: Vec<[u8; 3]> = rgba.pixels().map(|p| flatten_over_white(p.0)).collect();
    let quantized = median_cut(&pixels, max_colors);
    let total = quantized.total();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<([u8; 3], usize)> = quantized
        .palette
        .iter()
        .copied()
        .zip(quantized.counts.iter().copied())
        .filter(|&(_, count)| count > 0)
        .collect();
    // Stable: equal counts keep palette order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(max_colors)
        .map(|(rgb, count)| {
            let prominence = count as f64 / total as f64;
            ColorSwatch {
                hex: format_hex(rgb),
                name: closest_named_color(rgb).to_string(),
                prominence,
                usage_hint: usage_hint(prominence).to_string(),
            }
        })
        .collect()
}

/// Composite an RGBA pixel over an opaque white background
pub fn flatten_over_white(rgba: [u8; 4]) -> [u8; 3] {
    let alpha = u32::from(rgba[3]);
    let blend = |channel: u8| {
        let value = (u32::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
        value.min(255) as u8
    };
    [blend(rgba[0]), blend(rgba[1]), blend(rgba[2])]
}

/// Nearest anchor name by Euclidean RGB distance; the earliest anchor wins ties
pub fn closest_named_color(rgb: [u8; 3]) -> &'static str {
    let mut best: Option<(&'static str, f64)> = None;
    for (name, anchor) in NAMED_COLORS {
        let distance = rgb_distance(rgb, anchor);
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((name, distance));
        }
    }
    best.map_or("Unnamed", |(name, _)| name)
}

/// Usage tier for a swatch covering `prominence` of the image
pub fn usage_hint(prominence: f64) -> &'static str {
    if prominence >= DOMINANT_PROMINENCE {
        "Dominant background or hero coverage"
    } else if prominence >= PRIMARY_PROMINENCE {
        "Primary supporting block"
    } else if prominence >= ACCENT_PROMINENCE {
        "Accent or typography highlight"
    } else {
        "Detail accent"
    }
}
