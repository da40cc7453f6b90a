//! Structured design data returned by the vision model for one image
//!
//! Every field is optional on the wire and defaults to an empty value.

use serde::{Deserialize, Serialize};

/// Complete design reading of a single image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignData {
    /// Brand naming and personality cues
    pub brand_identity: BrandIdentity,
    /// Palette, type, logo and imagery observations
    pub visual_identity: VisualIdentity,
    /// Grid, component and interaction observations
    pub layout_and_components: LayoutComponents,
    /// Tone and messaging observations
    pub voice_and_copy: VoiceAndCopy,
    /// Handoff caveats
    pub production_notes: Vec<String>,
    /// Statement on confidence or areas needing confirmation
    pub confidence: String,
}

/// Brand naming and personality cues
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandIdentity {
    /// Inferred or explicit brand or product name
    pub brand_name: String,
    /// Usage scenarios inferred from the layout
    pub design_context: Vec<String>,
    /// Keywords describing the brand personality
    pub core_attributes: Vec<String>,
    /// Visible headline or slogan
    pub tagline: String,
}

/// One palette entry as described by the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteColor {
    /// Descriptive label
    pub name: String,
    /// Hex approximation
    pub hex: String,
    /// Finish or texture hint
    pub finish: String,
    /// Where and how the color appears
    pub usage: String,
    /// Free-form notes
    pub notes: String,
}

/// One typeface observation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypefaceObservation {
    /// Font family
    pub family: String,
    /// Weight or stylistic treatment
    pub style: String,
    /// Point sizes or hierarchy
    pub size_range: String,
    /// Typical use
    pub usage: String,
    /// Letter-spacing observations
    pub tracking: String,
    /// Free-form notes
    pub notes: String,
}

/// Imagery style cues grouped by medium
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageryStyle {
    /// Photography treatment
    pub photography: Vec<String>,
    /// Illustration treatment
    pub illustration: Vec<String>,
    /// Icon motifs
    pub iconography: Vec<String>,
    /// Textures and patterns
    pub textures_and_patterns: Vec<String>,
}

impl ImageryStyle {
    /// Each medium with a human-readable label, in a fixed order
    pub const fn fields(&self) -> [(&'static str, &[String]); 4] {
        [
            ("photography", self.photography.as_slice()),
            ("illustration", self.illustration.as_slice()),
            ("iconography", self.iconography.as_slice()),
            ("textures and patterns", self.textures_and_patterns.as_slice()),
        ]
    }
}

/// Palette, type, logo and imagery observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualIdentity {
    /// Palette entries
    pub color_palette: Vec<PaletteColor>,
    /// Typeface observations
    pub typography: Vec<TypefaceObservation>,
    /// Logo placement and treatment notes
    pub logo_usage: Vec<String>,
    /// Imagery cues
    pub imagery_style: ImageryStyle,
}

/// Grid, component and interaction observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutComponents {
    /// Grid and spacing cues
    pub grid_and_spacing: Vec<String>,
    /// Prominent modules
    pub key_components: Vec<String>,
    /// Call-to-action handling
    pub call_to_action_treatment: Vec<String>,
    /// Interaction cues
    pub interaction_notes: Vec<String>,
}

impl LayoutComponents {
    /// Every list in declaration order
    pub const fn fields(&self) -> [&[String]; 4] {
        [
            self.grid_and_spacing.as_slice(),
            self.key_components.as_slice(),
            self.call_to_action_treatment.as_slice(),
            self.interaction_notes.as_slice(),
        ]
    }
}

/// Tone and messaging observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceAndCopy {
    /// Adjectives describing tone
    pub tone_descriptors: Vec<String>,
    /// Recurring message themes
    pub messaging_pillars: Vec<String>,
    /// Recommended practices
    pub dos: Vec<String>,
    /// Practices to avoid
    pub donts: Vec<String>,
}

impl VoiceAndCopy {
    /// Every list in declaration order
    pub const fn fields(&self) -> [&[String]; 4] {
        [
            self.tone_descriptors.as_slice(),
            self.messaging_pillars.as_slice(),
            self.dos.as_slice(),
            self.donts.as_slice(),
        ]
    }
}
