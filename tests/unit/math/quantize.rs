//! Tests for median-cut palette quantization

#[cfg(test)]
mod tests {
    use brandlens::math::quantize::median_cut;

    fn repeat(color: [u8; 3], count: usize) -> Vec<[u8; 3]> {
        vec![color; count]
    }

    // Tests empty input and zero palette size yield nothing
    // Verified by removing the early return
    #[test]
    fn test_empty_inputs() {
        let empty = median_cut(&[], 5);
        assert!(empty.palette.is_empty());
        assert_eq!(empty.total(), 0);

        let zero = median_cut(&[[1, 2, 3]], 0);
        assert!(zero.palette.is_empty());
    }

    // Tests a uniform image collapses to one exact color
    // Verified by splitting boxes with zero range
    #[test]
    fn test_uniform_single_color() {
        let pixels = repeat([12, 34, 56], 100);
        let quantized = median_cut(&pixels, 5);
        assert_eq!(quantized.palette, vec![[12, 34, 56]]);
        assert_eq!(quantized.counts, vec![100]);
    }

    // Tests two distinct colors separate cleanly with exact counts
    // Verified by splitting at the midpoint index instead of a value boundary
    #[test]
    fn test_two_colors_separate() {
        let mut pixels = repeat([200, 48, 48], 30);
        pixels.extend(repeat([0, 161, 222], 70));
        let quantized = median_cut(&pixels, 5);

        assert_eq!(quantized.palette.len(), 2);
        assert_eq!(quantized.total(), 100);
        let blue = quantized.palette.iter().position(|c| *c == [0, 161, 222]);
        let red = quantized.palette.iter().position(|c| *c == [200, 48, 48]);
        assert_eq!(blue.and_then(|i| quantized.counts.get(i)).copied(), Some(70));
        assert_eq!(red.and_then(|i| quantized.counts.get(i)).copied(), Some(30));
    }

    // Tests the palette never exceeds the requested size and pixels are conserved
    // Verified by allowing one extra split
    #[test]
    fn test_palette_size_bound() {
        let pixels: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, 255 - v, v / 2]).collect();
        for k in 1..=8 {
            let quantized = median_cut(&pixels, k);
            assert!(quantized.palette.len() <= k);
            assert_eq!(quantized.palette.len(), quantized.counts.len());
            assert_eq!(quantized.total(), pixels.len());
        }
    }

    // Tests palette entries are box means
    // Verified by using the first pixel of each box instead of the mean
    #[test]
    fn test_single_box_is_mean() {
        let pixels = vec![[0, 0, 0], [10, 20, 30]];
        let quantized = median_cut(&pixels, 1);
        assert_eq!(quantized.palette, vec![[5, 10, 15]]);
    }
}
