//! Adaptive palette quantization using median cut
//!
//! The pixel population is split recursively along the channel with the widest
//! range until the requested palette size is reached or no box can be split.
//! Splits happen on a value boundary, so a color is never shared by two boxes.

/// Palette produced by quantization with the population of each entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantized {
    /// Representative color of each box (mean of its pixels)
    pub palette: Vec<[u8; 3]>,
    /// Number of pixels assigned to each palette entry
    pub counts: Vec<usize>,
}

impl Quantized {
    /// Total number of quantized pixels
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Reduce `pixels` to at most `max_colors` representative colors
pub fn median_cut(pixels: &[[u8; 3]], max_colors: usize) -> Quantized {
    if pixels.is_empty() || max_colors == 0 {
        return Quantized {
            palette: Vec::new(),
            counts: Vec::new(),
        };
    }

    let mut boxes: Vec<Vec<[u8; 3]>> = vec![pixels.to_vec()];

    while boxes.len() < max_colors {
        let Some(index) = most_populous_splittable(&boxes) else {
            break;
        };
        let Some(candidate) = boxes.get_mut(index) else {
            break;
        };
        let Some(upper) = split_box(candidate) else {
            break;
        };
        boxes.push(upper);
    }

    let palette = boxes.iter().map(|b| mean_color(b)).collect();
    let counts = boxes.iter().map(Vec::len).collect();

    Quantized { palette, counts }
}

fn channel_range(pixels: &[[u8; 3]], channel: usize) -> u8 {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for pixel in pixels {
        let value = pixel.get(channel).copied().unwrap_or(0);
        min = min.min(value);
        max = max.max(value);
    }
    max.saturating_sub(min)
}

fn widest_channel(pixels: &[[u8; 3]]) -> (usize, u8) {
    (0..3)
        .map(|channel| (channel, channel_range(pixels, channel)))
        .fold((0, 0), |best, current| if current.1 > best.1 { current } else { best })
}

// Largest box that still holds more than one distinct color; ties go to the earliest
fn most_populous_splittable(boxes: &[Vec<[u8; 3]>]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, pixels) in boxes.iter().enumerate() {
        if widest_channel(pixels).1 == 0 {
            continue;
        }
        if best.is_none_or(|(_, len)| pixels.len() > len) {
            best = Some((index, pixels.len()));
        }
    }
    best.map(|(index, _)| index)
}

// Splits in place, returning the upper half
fn split_box(pixels: &mut Vec<[u8; 3]>) -> Option<Vec<[u8; 3]>> {
    let (channel, range) = widest_channel(pixels);
    if range == 0 {
        return None;
    }

    let value = |p: &[u8; 3]| p.get(channel).copied().unwrap_or(0);
    pixels.sort_unstable_by_key(value);

    let pivot = pixels.get(pixels.len() / 2).map(value)?;
    let mut split = pixels.partition_point(|p| value(p) < pivot);
    if split == 0 {
        split = pixels.partition_point(|p| value(p) <= pivot);
    }
    if split == 0 || split >= pixels.len() {
        return None;
    }

    Some(pixels.split_off(split))
}

fn mean_color(pixels: &[[u8; 3]]) -> [u8; 3] {
    if pixels.is_empty() {
        return [0, 0, 0];
    }
    let mut sums = [0u64; 3];
    for pixel in pixels {
        for (sum, &value) in sums.iter_mut().zip(pixel.iter()) {
            *sum += u64::from(value);
        }
    }
    let len = pixels.len() as f64;
    sums.map(|sum| (sum as f64 / len).round() as u8)
}
