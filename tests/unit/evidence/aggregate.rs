//! Tests for cross-image evidence aggregation

#[cfg(test)]
mod tests {
    use brandlens::evidence::aggregate::aggregate;
    use brandlens::evidence::model::{
        Casing, Classification, ColorSwatch, ImageExtraction, LayoutSummary, Orientation,
        TypographySample, Weight,
    };
    use std::path::PathBuf;

    fn swatch(hex: &str, prominence: f64) -> ColorSwatch {
        ColorSwatch {
            hex: hex.to_string(),
            name: format!("name-{prominence}"),
            prominence,
            usage_hint: "Detail accent".to_string(),
        }
    }

    fn sample(text: &str) -> TypographySample {
        TypographySample {
            text: text.to_string(),
            casing: Casing::Title,
            weight: Weight::Medium,
            classification: Classification::Headline,
        }
    }

    fn layout(orientation: Orientation, whitespace_ratio: f64) -> LayoutSummary {
        LayoutSummary {
            aspect_ratio: 1.0,
            dominant_orientation: orientation,
            whitespace_ratio,
            focal_regions: Vec::new(),
        }
    }

    fn extraction(name: &str) -> ImageExtraction {
        ImageExtraction {
            source: PathBuf::from(format!("assets/{name}")),
            colors: Vec::new(),
            typography: Vec::new(),
            layout: Some(layout(Orientation::Square, 0.5)),
            detected_copy: Vec::new(),
            notes: Vec::new(),
        }
    }

    // Tests aggregating nothing yields empty collections
    // Verified by returning an error for empty input
    #[test]
    fn test_empty_input() {
        let evidence = aggregate(&[]);
        assert!(evidence.images.is_empty());
        assert!(evidence.palette.is_empty());
        assert!(evidence.typography.is_empty());
        assert!(evidence.layout_patterns.is_empty());
        assert!(evidence.copy_observations.is_empty());
        assert!(evidence.production_notes.is_empty());
    }

    // Tests the higher prominence wins for a shared hex regardless of input order
    // Verified by keeping the first swatch unconditionally
    #[test]
    fn test_palette_max_prominence_commutes() {
        let mut first = extraction("a.png");
        first.colors = vec![swatch("#00A1DE", 0.2)];
        let mut second = extraction("b.png");
        second.colors = vec![swatch("#00a1de", 0.6)];

        for order in [
            vec![first.clone(), second.clone()],
            vec![second.clone(), first.clone()],
        ] {
            let evidence = aggregate(&order);
            assert_eq!(evidence.palette.len(), 1);
            let kept = evidence.palette.first().map(|s| s.prominence);
            assert_eq!(kept, Some(0.6));
        }
    }

    // Tests exact prominence ties keep the earlier image's swatch
    // Verified by replacing on greater-or-equal
    #[test]
    fn test_palette_tie_first_wins() {
        let mut first = extraction("a.png");
        first.colors = vec![ColorSwatch {
            name: "first".to_string(),
            ..swatch("#123456", 0.3)
        }];
        let mut second = extraction("b.png");
        second.colors = vec![ColorSwatch {
            name: "second".to_string(),
            ..swatch("#123456", 0.3)
        }];

        let evidence = aggregate(&[first, second]);
        assert_eq!(
            evidence.palette.first().map(|s| s.name.as_str()),
            Some("first")
        );
    }

    // Tests palette ranking is descending and stable for equal prominence
    // Verified by sorting ascending
    #[test]
    fn test_palette_sorted_stable() {
        let mut first = extraction("a.png");
        first.colors = vec![swatch("#111111", 0.1), swatch("#222222", 0.4)];
        let mut second = extraction("b.png");
        second.colors = vec![swatch("#333333", 0.4), swatch("#444444", 0.7)];

        let evidence = aggregate(&[first, second]);
        let hexes: Vec<&str> = evidence.palette.iter().map(|s| s.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#444444", "#222222", "#333333", "#111111"]);
    }

    // Tests identical typography keys collapse to the first-seen sample
    // Verified by keying typography on text
    #[test]
    fn test_typography_dedup_first_seen() {
        let mut first = extraction("a.png");
        first.typography = vec![sample("Meet the team")];
        let mut second = extraction("b.png");
        second.typography = vec![sample("Join us today")];

        let evidence = aggregate(&[first, second]);
        assert_eq!(evidence.typography.len(), 1);
        assert_eq!(
            evidence.typography.first().map(|s| s.text.as_str()),
            Some("Meet the team")
        );
    }

    // Tests whitespace below 25% adds a note naming the image and threshold
    // Verified by using less-than-or-equal for the threshold
    #[test]
    fn test_low_whitespace_note_threshold() {
        let mut dense = extraction("dense.png");
        dense.layout = Some(layout(Orientation::Landscape, 0.24));
        let mut boundary = extraction("boundary.png");
        boundary.layout = Some(layout(Orientation::Portrait, 0.25));

        let evidence = aggregate(&[dense, boundary]);
        assert_eq!(evidence.production_notes.len(), 1);
        let note = evidence.production_notes.first().cloned().unwrap_or_default();
        assert!(note.contains("dense.png"));
        assert!(note.contains("25%"));
        assert!(!note.contains("boundary.png"));
    }

    // Tests layout patterns, copy and notes concatenate in image order
    // Verified by deduplicating layout patterns
    #[test]
    fn test_concatenation_preserves_order() {
        let mut first = extraction("a.png");
        first.layout = Some(layout(Orientation::Portrait, 0.6));
        first.detected_copy = vec!["Hello".to_string()];
        first.notes = vec!["note a".to_string()];
        let mut second = extraction("b.png");
        second.layout = Some(layout(Orientation::Portrait, 0.6));
        second.detected_copy = vec!["World".to_string()];
        second.notes = vec!["note b".to_string()];
        let mut third = extraction("c.png");
        third.layout = None;

        let evidence = aggregate(&[first, second, third]);
        assert_eq!(
            evidence.layout_patterns,
            vec![Orientation::Portrait, Orientation::Portrait]
        );
        assert_eq!(evidence.copy_observations, vec!["Hello", "World"]);
        assert_eq!(evidence.production_notes, vec!["note a", "note b"]);
        assert_eq!(evidence.images.len(), 3);
    }

    // Tests repeated aggregation of the same input is identical
    // Verified by iterating a HashMap when emitting the palette
    #[test]
    fn test_idempotent() {
        let mut first = extraction("a.png");
        first.colors = vec![swatch("#AA0000", 0.5), swatch("#00AA00", 0.5)];
        first.typography = vec![sample("Alpha beta")];
        let mut second = extraction("b.png");
        second.colors = vec![swatch("#0000AA", 0.5), swatch("#AA0000", 0.2)];
        second.layout = Some(layout(Orientation::Landscape, 0.1));

        let input = vec![first, second];
        assert_eq!(aggregate(&input), aggregate(&input));
    }
}
