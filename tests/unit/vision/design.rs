//! Tests for per-image design data

#[cfg(test)]
mod tests {
    use brandlens::vision::design::{DesignData, ImageryStyle, LayoutComponents, VoiceAndCopy};

    // Tests an empty object decodes to defaults
    // Verified by requiring every field
    #[test]
    fn test_empty_object_defaults() {
        let data: DesignData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, DesignData::default());
    }

    // Tests unknown keys are tolerated
    // Verified by denying unknown fields
    #[test]
    fn test_unknown_keys_ignored() {
        let data: DesignData =
            serde_json::from_str(r#"{"confidence":"ok","extra":{"nested":true}}"#).unwrap();
        assert_eq!(data.confidence, "ok");
    }

    // Tests imagery fields are labelled in a fixed order
    // Verified by reordering the labels
    #[test]
    fn test_imagery_fields() {
        let imagery = ImageryStyle {
            iconography: vec!["line icons".to_string()],
            ..ImageryStyle::default()
        };
        let labels: Vec<&str> = imagery.fields().iter().map(|(label, _)| *label).collect();

        assert_eq!(
            labels,
            vec!["photography", "illustration", "iconography", "textures and patterns"]
        );
        assert_eq!(imagery.fields()[2].1.len(), 1);
    }

    // Tests list accessors follow declaration order
    // Verified by swapping two accessor entries
    #[test]
    fn test_list_accessors() {
        let layout = LayoutComponents {
            call_to_action_treatment: vec!["pill buttons".to_string()],
            ..LayoutComponents::default()
        };
        assert_eq!(layout.fields()[2], ["pill buttons".to_string()]);

        let voice = VoiceAndCopy {
            donts: vec!["jargon".to_string()],
            ..VoiceAndCopy::default()
        };
        assert_eq!(voice.fields()[3], ["jargon".to_string()]);
        assert!(voice.fields()[0].is_empty());
    }
}
