//! Guideline synthesis from aggregated evidence and compiled design specs
//!
//! Both entry points feed the same section builders. Local evidence always
//! supplies layout patterns, copy lines and whitespace data; a compiled
//! design spec, when present, replaces the palette and adds voice, layout and imagery
//! notes. Where the two disagree the design spec wins without reconciliation.

use crate::evidence::model::{AggregatedEvidence, ColorSwatch, Orientation};
use crate::guidelines::document::{GuidelineDocument, Section};
use crate::io::configuration::{
    BALANCED_LUMINANCE, DEFAULT_WHITESPACE, FALLBACK_COLOR_NAME, FALLBACK_HEX, FOCAL_HOTSPOTS,
    PREMIUM_LUMINANCE, PUNCHY_MAX_WORDS, SOFT_RADIUS_WHITESPACE, STANDARD_RADIUS_WHITESPACE,
    UPPERCASE_HEAVY_RATIO, UPPERCASE_LIGHT_RATIO,
};
use crate::math::color::hex_luminance;
use crate::math::frequency::{mean, most_common};
use crate::vision::compile::{CompiledColor, CompiledDesign, ConfidenceNote, DesignSpec};

/// Title of the voice and messaging section
pub const TONE_OF_VOICE: &str = "Tone of Voice";
/// Title of the social publishing section
pub const SOCIAL_MEDIA: &str = "Social Media";
/// Title of the composition section
pub const VISUAL_SYSTEM: &str = "Visual System";
/// Title of the corner radius section
pub const CORNER_RADIUS: &str = "Corner Radius";
/// Title of the iconography section
pub const ICONOGRAPHY: &str = "Iconography";
/// Title of the logo usage section
pub const LOGO: &str = "Logo";
/// Title of the palette section
pub const COLOR: &str = "Color";
/// Title of the optional notes section
pub const PRODUCTION_REFERENCES: &str = "Production References";

/// Section titles in document order
pub const SECTION_TITLES: [&str; 8] = [
    TONE_OF_VOICE,
    SOCIAL_MEDIA,
    VISUAL_SYSTEM,
    CORNER_RADIUS,
    ICONOGRAPHY,
    LOGO,
    COLOR,
    PRODUCTION_REFERENCES,
];

const FALLBACK_PROMINENCE: f64 = 0.6;
const FALLBACK_USAGE: &str = "Primary anchor";
const SPEC_USAGE_DEFAULT: &str = "Detail accent";
const EMPTY_CELL: &str = "—";

struct Inputs<'a> {
    palette: Vec<ColorSwatch>,
    evidence: Option<&'a AggregatedEvidence>,
    design: &'a CompiledDesign,
    production_notes: &'a [String],
    confidence_notes: &'a [ConfidenceNote],
}

impl Inputs<'_> {
    fn copy_lines(&self) -> &[String] {
        self.evidence
            .map(|evidence| evidence.copy_observations.as_slice())
            .unwrap_or_default()
    }

    fn layout_patterns(&self) -> &[Orientation] {
        self.evidence
            .map(|evidence| evidence.layout_patterns.as_slice())
            .unwrap_or_default()
    }
}

/// Build a guideline document from locally extracted evidence
pub fn build_document(evidence: &AggregatedEvidence, brand_name: &str) -> GuidelineDocument {
    let design = CompiledDesign::default();
    let inputs = Inputs {
        palette: evidence.palette.clone(),
        evidence: Some(evidence),
        design: &design,
        production_notes: &evidence.production_notes,
        confidence_notes: &[],
    };
    synthesize(&inputs, brand_name)
}

/// Build a guideline document from a compiled vision spec
///
/// Local evidence, when supplied, contributes layout patterns, copy lines and
/// whitespace data only.
pub fn build_document_from_spec(
    spec: &DesignSpec,
    brand_name: &str,
    evidence: Option<&AggregatedEvidence>,
) -> GuidelineDocument {
    let design = &spec.compiled;
    let inputs = Inputs {
        palette: swatches_from_palette_spec(&design.visual_identity.color_palette),
        evidence,
        design,
        production_notes: &design.production_notes,
        confidence_notes: &design.confidence_notes,
    };
    synthesize(&inputs, brand_name)
}

fn synthesize(inputs: &Inputs<'_>, brand_name: &str) -> GuidelineDocument {
    let mut sections = vec![
        tone_of_voice_section(inputs),
        social_media_section(inputs, brand_name),
        visual_system_section(inputs),
        corner_radius_section(inputs),
        iconography_section(inputs),
        logo_section(inputs),
        color_section(inputs),
    ];

    if !inputs.production_notes.is_empty() || !inputs.confidence_notes.is_empty() {
        sections.push(production_references_section(
            inputs.production_notes,
            inputs.confidence_notes,
        ));
    }

    GuidelineDocument {
        title: format!("{brand_name} Brand Guidelines (Auto-generated)"),
        sections,
    }
}

/// Display swatches for a compiled spec palette, or the fallback anchor when it is empty
///
/// Prominence is synthetic: 0.5 for the first entry, dropping by 0.1 per entry
/// down to a floor of 0.1.
pub fn swatches_from_palette_spec(palette: &[CompiledColor]) -> Vec<ColorSwatch> {
    if palette.is_empty() {
        return vec![ColorSwatch {
            hex: FALLBACK_HEX.to_string(),
            name: FALLBACK_COLOR_NAME.to_string(),
            prominence: FALLBACK_PROMINENCE,
            usage_hint: FALLBACK_USAGE.to_string(),
        }];
    }

    palette
        .iter()
        .enumerate()
        .map(|(index, color)| ColorSwatch {
            hex: color.hex.clone(),
            name: color.names.first().unwrap_or(&color.hex).clone(),
            prominence: 0.1f64.mul_add(-(index as f64), 0.5).max(0.1),
            usage_hint: if color.usage_notes.is_empty() {
                SPEC_USAGE_DEFAULT.to_string()
            } else {
                color.usage_notes.join(", ")
            },
        })
        .collect()
}

/// Share of alphabetic characters that are uppercase across all lines
pub fn uppercase_ratio(lines: &[String]) -> f64 {
    let (letters, uppercase) = lines
        .iter()
        .flat_map(|line| line.chars())
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(letters, uppercase), c| {
            (letters + 1, uppercase + usize::from(c.is_uppercase()))
        });
    if letters == 0 {
        return 0.0;
    }
    uppercase as f64 / letters as f64
}

/// Tone label for a dominant color's relative luminance
pub fn tone_for_luminance(luminance: f64) -> &'static str {
    if luminance < PREMIUM_LUMINANCE {
        "confident and premium"
    } else if luminance < BALANCED_LUMINANCE {
        "assured and balanced"
    } else {
        "open and energizing"
    }
}

/// Most frequent orientation, earliest first among ties, defaulting to landscape
pub fn dominant_orientation(patterns: &[Orientation]) -> Orientation {
    let ranked = most_common(patterns.iter().map(|orientation| orientation.label()));
    match ranked.first().map(|(label, _)| label.as_str()) {
        Some("portrait") => Orientation::Portrait,
        Some("square") => Orientation::Square,
        _ => Orientation::Landscape,
    }
}

/// Mean whitespace ratio across images with a layout, or the default when none exist
pub fn average_whitespace(evidence: Option<&AggregatedEvidence>) -> f64 {
    evidence
        .and_then(|evidence| mean(evidence.layouts().map(|layout| layout.whitespace_ratio)))
        .unwrap_or(DEFAULT_WHITESPACE)
}

fn tone_of_voice_section(inputs: &Inputs<'_>) -> Section {
    let copy_lines = inputs.copy_lines();
    let voice = &inputs.design.voice_and_copy;
    let attributes = &inputs.design.brand_identity.core_attributes;

    let mut lines = vec!["### What Defines the Voice".to_string()];
    match inputs
        .palette
        .first()
        .and_then(|swatch| hex_luminance(&swatch.hex))
    {
        Some(luminance) => lines.push(format!(
            "- Dominant palette leans {}; mirror this energy in written narratives.",
            tone_for_luminance(luminance)
        )),
        None => lines
            .push("- Palette analysis unavailable; retain neutral authoritative tone.".to_string()),
    }

    if !attributes.is_empty() {
        lines.push(format!(
            "- Core attributes surfaced: {}.",
            attributes.join(", ")
        ));
    }

    let ratio = uppercase_ratio(copy_lines);
    if ratio > UPPERCASE_HEAVY_RATIO {
        lines.push("- High uppercase usage; maintain bold, declarative headlines.".to_string());
    } else if ratio < UPPERCASE_LIGHT_RATIO && !copy_lines.is_empty() {
        lines.push(
            "- Predominantly sentence case; emphasize conversational clarity.".to_string(),
        );
    } else {
        lines.push(
            "- Mixed casing observed; adapt tone per channel while staying precise.".to_string(),
        );
    }

    if !voice.tone_descriptors.is_empty() {
        lines.push(format!(
            "- Noted tone descriptors: {}.",
            voice.tone_descriptors.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("### Key Voice Principles".to_string());
    if voice.messaging_pillars.is_empty() {
        let average_words = mean(
            copy_lines
                .iter()
                .map(|line| line.split_whitespace().count() as f64),
        )
        .unwrap_or(0.0);
        if average_words <= PUNCHY_MAX_WORDS {
            lines.push("1. **Punchy Headlines** — Lead with sharp benefit statements.".to_string());
        } else {
            lines.push(
                "1. **Clarity First** — Summaries should surface the outcome immediately."
                    .to_string(),
            );
        }
        lines.push(
            "2. **Evidence-backed Claims** — Support impact points with data where available."
                .to_string(),
        );
        lines.push(
            "3. **Partner Mindset** — Use second-person framing to reinforce collaboration."
                .to_string(),
        );
    } else {
        for (number, pillar) in voice.messaging_pillars.iter().enumerate() {
            lines.push(format!("{}. **{pillar}**", number + 1));
        }
    }

    if !voice.dos.is_empty() || !voice.donts.is_empty() {
        lines.push(String::new());
        if !voice.dos.is_empty() {
            lines.push(format!("- **Do:** {}", voice.dos.join(", ")));
        }
        if !voice.donts.is_empty() {
            lines.push(format!("- **Don't:** {}", voice.donts.join(", ")));
        }
    }

    Section::new(TONE_OF_VOICE, lines)
}

fn social_media_section(inputs: &Inputs<'_>, brand_name: &str) -> Section {
    let layout = &inputs.design.layout_and_components;
    let design_context = &inputs.design.brand_identity.design_context;

    let mut lines = vec!["### Channel Focus".to_string()];
    let channel_lines = match dominant_orientation(inputs.layout_patterns()) {
        Orientation::Portrait => [
            "- Prioritize Instagram Stories/Reels and mobile-first LinkedIn posts.",
            "- Repurpose vertical cuts for event live coverage on X.",
        ],
        Orientation::Square => [
            "- Square treatments adapt well to Instagram feed and LinkedIn carousels.",
            "- Ensure captions highlight value quickly for mobile consumption.",
        ],
        Orientation::Landscape => [
            "- Landscape layouts suit webinars, YouTube explainers, and LinkedIn banners.",
            "- Maintain responsive crops for Instagram and short-form platforms.",
        ],
    };
    lines.extend(channel_lines.map(str::to_string));

    if !design_context.is_empty() {
        lines.push(format!(
            "- Observed design contexts: {}; tailor copy for these audiences.",
            design_context.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("### Publishing Checklist".to_string());
    lines.push(format!(
        "- Tag {brand_name} master accounts to amplify reach."
    ));
    lines.push("- Validate stats and claims before post scheduling.".to_string());
    lines.push("- Secure approvals for any customer visuals or quotes.".to_string());
    if !layout.key_components.is_empty() {
        lines.push(format!(
            "- Spotlight key modules: {}.",
            layout.key_components.join(", ")
        ));
    }
    if !layout.call_to_action_treatment.is_empty() {
        lines.push(format!(
            "- Reinforce CTAs using: {}.",
            layout.call_to_action_treatment.join(", ")
        ));
    }

    Section::new(SOCIAL_MEDIA, lines)
}

fn visual_system_section(inputs: &Inputs<'_>) -> Section {
    let palette = &inputs.palette;
    let grid = &inputs.design.layout_and_components.grid_and_spacing;
    let imagery = &inputs.design.visual_identity.imagery_style;

    let regions = inputs.evidence.map_or_else(Vec::new, |evidence| {
        most_common(
            evidence
                .layouts()
                .flat_map(|layout| layout.focal_regions.iter().map(|region| region.label())),
        )
    });

    let mut lines = vec!["### Datastream Principles".to_string()];
    if regions.is_empty() {
        lines.push(
            "- Layout scans evenly; introduce focal anchors aligned to brand icon nodes."
                .to_string(),
        );
    } else {
        let hotspots: Vec<&str> = regions
            .iter()
            .take(FOCAL_HOTSPOTS)
            .map(|(label, _)| label.as_str())
            .collect();
        lines.push(format!(
            "- Visual weight concentrates around {}; maintain consistent rhythm across assets.",
            hotspots.join(", ")
        ));
    }

    if let Some(dominant) = palette.first() {
        lines.push(format!(
            "- Anchor hero compositions with {} ({}); deploy secondary hues for supporting datablocks.",
            dominant.name, dominant.hex
        ));
    }
    if let Some(accent) = palette.get(2) {
        lines.push(format!(
            "- Use {} as a thrive accent within charts, chips, or callouts.",
            accent.name.to_lowercase()
        ));
    }

    if !grid.is_empty() {
        lines.push(format!("- Grid cues detected: {}.", grid.join(", ")));
    }

    lines.push(String::new());
    lines.push("### Motion & Composition".to_string());
    lines.push(
        "- Stack datablocks into coherent streams; avoid fragmented visual noise.".to_string(),
    );
    lines.push(
        "- Apply progressive offsets (25%-75%) to reinforce depth and motion cues.".to_string(),
    );

    let imagery_notes: Vec<String> = imagery
        .fields()
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| format!("{label}: {}", items.join(", ")))
        .collect();
    if !imagery_notes.is_empty() {
        lines.push(format!("- Imagery cues: {}.", imagery_notes.join("; ")));
    }

    Section::new(VISUAL_SYSTEM, lines)
}

fn corner_radius_section(inputs: &Inputs<'_>) -> Section {
    let interaction = &inputs.design.layout_and_components.interaction_notes;
    let whitespace = average_whitespace(inputs.evidence);

    let mut lines = vec!["### Radius Guidance".to_string()];
    let tier = if whitespace >= SOFT_RADIUS_WHITESPACE {
        "- Embrace softer 16px-20px radii for hero containers; whitespace supports openness."
    } else if whitespace >= STANDARD_RADIUS_WHITESPACE {
        "- Standard 12px-16px radii keep content structured while preserving flow."
    } else {
        "- Use tighter 8px radii on dense modules to maintain precision."
    };
    lines.push(tier.to_string());
    lines.push(
        "- Datastream datablocks: default to 20% of block height for rounded corners.".to_string(),
    );
    lines.push(
        "- Physical deliverables: scale corner radius to 1.5% of the shortest edge as baseline."
            .to_string(),
    );

    if !interaction.is_empty() {
        lines.push(format!("- Interaction cues: {}.", interaction.join(", ")));
    }

    Section::new(CORNER_RADIUS, lines)
}

fn primary_hex(palette: &[ColorSwatch]) -> &str {
    palette
        .first()
        .map_or(FALLBACK_HEX, |swatch| swatch.hex.as_str())
}

fn iconography_section(inputs: &Inputs<'_>) -> Section {
    let motifs = &inputs.design.visual_identity.imagery_style.iconography;

    let mut lines = vec![
        "### Icon Library".to_string(),
        "- Leverage Material Symbols Rounded set at optical size 40 for accessibility."
            .to_string(),
        format!(
            "- Primary tint: {} with white fill for contrast.",
            primary_hex(&inputs.palette)
        ),
    ];
    if let Some(secondary) = inputs.palette.get(1) {
        lines.push(format!(
            "- Secondary tint: {} for hover states or SMB contexts.",
            secondary.hex
        ));
    }
    lines.push(String::new());
    lines.push("### Usage".to_string());
    lines.push(
        "- Nest icons within datablocks; reserve standalone usage for favicons or app shortcuts."
            .to_string(),
    );
    lines.push(
        "- Maintain icon containers at 150%-200% of icon bounding box for breathing room."
            .to_string(),
    );
    if !motifs.is_empty() {
        lines.push(format!("- Icon motifs emphasised: {}.", motifs.join(", ")));
    }

    Section::new(ICONOGRAPHY, lines)
}

fn logo_section(inputs: &Inputs<'_>) -> Section {
    let usage = &inputs.design.visual_identity.logo_usage;

    let mut lines = vec![
        "### Logo Lockups".to_string(),
        format!(
            "- Primary lockup: symbol + wordmark in {} on white or deep navy.",
            primary_hex(&inputs.palette)
        ),
        "- Maintain 1x clearspace buffer around the combined lockup.".to_string(),
        "- Minimum size: 24px height digital, 12mm print.".to_string(),
        String::new(),
        "### Symbol Guidance".to_string(),
        "- Reserve mono symbol for avatars and favicons where scale is restricted.".to_string(),
        "- When color is limited, default to black/white paired set.".to_string(),
    ];
    if !usage.is_empty() {
        lines.push(format!("- Additional notes: {}.", usage.join(", ")));
    }

    Section::new(LOGO, lines)
}

fn cell(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        values.join(", ")
    }
}

fn color_section(inputs: &Inputs<'_>) -> Section {
    let spec_palette = &inputs.design.visual_identity.color_palette;

    let mut lines = vec!["### Palette Overview".to_string()];
    if !spec_palette.is_empty() {
        lines.push("| Hex | Names | Usage | Finishes | Notes |".to_string());
        lines.push("| --- | ----- | ----- | -------- | ----- |".to_string());
        for color in spec_palette {
            let hex = if color.hex.is_empty() {
                EMPTY_CELL
            } else {
                color.hex.as_str()
            };
            lines.push(format!(
                "| {hex} | {} | {} | {} | {} |",
                cell(&color.names),
                cell(&color.usage_notes),
                cell(&color.finishes),
                cell(&color.additional_notes)
            ));
        }
    } else if inputs.palette.is_empty() {
        lines.push("- No colors detected; verify source assets and rerun analysis.".to_string());
        return Section::new(COLOR, lines);
    } else {
        lines.push("| Hex | Name | Recommended Usage |".to_string());
        lines.push("| --- | ---- | ----------------- |".to_string());
        for swatch in &inputs.palette {
            lines.push(format!(
                "| {} | {} | {} |",
                swatch.hex, swatch.name, swatch.usage_hint
            ));
        }
    }

    lines.push(String::new());
    lines.push("- Ensure minimum 4.5:1 contrast for primary copy against backgrounds.".to_string());
    lines.push(
        "- Assign accent hues to thrive data streams; limit to 20% coverage per layout."
            .to_string(),
    );

    Section::new(COLOR, lines)
}

fn production_references_section(
    production_notes: &[String],
    confidence_notes: &[ConfidenceNote],
) -> Section {
    let mut lines = Vec::new();
    if !production_notes.is_empty() {
        lines.push("### Production Notes".to_string());
        lines.extend(production_notes.iter().map(|note| format!("- {note}")));
    }
    if !confidence_notes.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("### Confidence & Follow-ups".to_string());
        lines.extend(
            confidence_notes
                .iter()
                .map(|entry| format!("- **{}:** {}", entry.image, entry.note)),
        );
    }
    if lines.is_empty() {
        lines.push("- No outstanding notes.".to_string());
    }

    Section::new(PRODUCTION_REFERENCES, lines)
}
