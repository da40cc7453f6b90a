//! Cross-image compilation of vision-model design data
//!
//! String collections are trimmed, blanks dropped, and emitted deduplicated in
//! sorted order. Palette entries merge by uppercase hex; typefaces merge by
//! lowercased (family, style).

use crate::vision::design::{DesignData, ImageryStyle, LayoutComponents, VoiceAndCopy};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

const UNSPECIFIED_STYLE: &str = "unspecified";

/// Vision result for one image, tagged with its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDesign {
    /// Source image path as displayed in notes
    pub image: String,
    /// Structured reading returned by the model
    pub guidelines: DesignData,
}

/// Compiled design data across every analyzed image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    /// Number of images that produced a result
    pub images_analyzed: usize,
    /// Merged view across images
    pub compiled: CompiledDesign,
    /// Raw per-image results in input order
    pub per_image: Vec<ImageDesign>,
}

/// Merged design data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompiledDesign {
    /// Brand naming and personality cues
    pub brand_identity: CompiledBrandIdentity,
    /// Palette, type, logo and imagery observations
    pub visual_identity: CompiledVisualIdentity,
    /// Grid, component and interaction observations
    pub layout_and_components: LayoutComponents,
    /// Tone and messaging observations
    pub voice_and_copy: VoiceAndCopy,
    /// Handoff caveats
    pub production_notes: Vec<String>,
    /// Per-image confidence statements in input order
    pub confidence_notes: Vec<ConfidenceNote>,
}

/// Merged brand naming and personality cues
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompiledBrandIdentity {
    /// Distinct brand names
    pub brand_names: Vec<String>,
    /// Distinct usage scenarios
    pub design_context: Vec<String>,
    /// Distinct personality keywords
    pub core_attributes: Vec<String>,
    /// Distinct taglines
    pub taglines: Vec<String>,
}

/// Merged palette entry for one hex value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompiledColor {
    /// Uppercase hex
    pub hex: String,
    /// Every label the color was given
    pub names: Vec<String>,
    /// Every usage description
    pub usage_notes: Vec<String>,
    /// Every finish description
    pub finishes: Vec<String>,
    /// Every free-form note
    pub additional_notes: Vec<String>,
    /// Images the color was seen in
    pub source_images: Vec<String>,
}

/// Merged typeface entry for one family and style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompiledTypeface {
    /// Family as first written
    pub family: String,
    /// Styles, excluding the unspecified placeholder unless it is the only one
    pub styles: Vec<String>,
    /// Typical uses
    pub usage: Vec<String>,
    /// Size observations
    pub size_ranges: Vec<String>,
    /// Letter-spacing observations
    pub tracking: Vec<String>,
    /// Free-form notes
    pub notes: Vec<String>,
    /// Images the typeface was seen in
    pub source_images: Vec<String>,
}

/// Merged palette, type, logo and imagery observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompiledVisualIdentity {
    /// Palette sorted by hex
    pub color_palette: Vec<CompiledColor>,
    /// Typefaces sorted by family, case-insensitively
    pub typography: Vec<CompiledTypeface>,
    /// Logo usage notes
    pub logo_usage: Vec<String>,
    /// Imagery cues
    pub imagery_style: ImageryStyle,
}

/// Confidence statement attached to one image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceNote {
    /// Source image
    pub image: String,
    /// Statement reported by the model
    pub note: String,
}

type StringSet = BTreeSet<String>;

fn merge(source: &[String], target: &mut StringSet) {
    target.extend(
        source
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string),
    );
}

fn merge_one(value: &str, target: &mut StringSet) {
    let cleaned = value.trim();
    if !cleaned.is_empty() {
        target.insert(cleaned.to_string());
    }
}

fn finish(set: StringSet) -> Vec<String> {
    set.into_iter().collect()
}

#[derive(Default)]
struct ColorEntry {
    names: StringSet,
    usages: StringSet,
    finishes: StringSet,
    notes: StringSet,
    source_images: StringSet,
}

struct TypefaceEntry {
    family: String,
    styles: StringSet,
    usages: StringSet,
    size_ranges: StringSet,
    tracking: StringSet,
    notes: StringSet,
    source_images: StringSet,
}

impl TypefaceEntry {
    fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            styles: StringSet::new(),
            usages: StringSet::new(),
            size_ranges: StringSet::new(),
            tracking: StringSet::new(),
            notes: StringSet::new(),
            source_images: StringSet::new(),
        }
    }

    fn finish(self) -> CompiledTypeface {
        let mut styles: Vec<String> = self
            .styles
            .iter()
            .filter(|style| style.as_str() != UNSPECIFIED_STYLE)
            .cloned()
            .collect();
        if styles.is_empty() && self.styles.contains(UNSPECIFIED_STYLE) {
            styles.push(UNSPECIFIED_STYLE.to_string());
        }
        CompiledTypeface {
            family: self.family,
            styles,
            usage: finish(self.usages),
            size_ranges: finish(self.size_ranges),
            tracking: finish(self.tracking),
            notes: finish(self.notes),
            source_images: finish(self.source_images),
        }
    }
}

#[derive(Default)]
struct Accumulator {
    brand_names: StringSet,
    design_context: StringSet,
    core_attributes: StringSet,
    taglines: StringSet,
    palette: BTreeMap<String, ColorEntry>,
    typefaces: Vec<TypefaceEntry>,
    typeface_index: HashMap<(String, String), usize>,
    logo_usage: StringSet,
    imagery: [StringSet; 4],
    layout: [StringSet; 4],
    voice: [StringSet; 4],
    production_notes: StringSet,
    confidence_notes: Vec<ConfidenceNote>,
}

impl Accumulator {
    fn add(&mut self, record: &ImageDesign) {
        let data = &record.guidelines;
        let image = record.image.as_str();

        let identity = &data.brand_identity;
        merge_one(&identity.brand_name, &mut self.brand_names);
        merge(&identity.design_context, &mut self.design_context);
        merge(&identity.core_attributes, &mut self.core_attributes);
        merge_one(&identity.tagline, &mut self.taglines);

        let visual = &data.visual_identity;
        for color in &visual.color_palette {
            let hex = color.hex.trim().to_uppercase();
            if hex.is_empty() {
                continue;
            }
            let entry = self.palette.entry(hex).or_default();
            merge_one(image, &mut entry.source_images);
            merge_one(&color.name, &mut entry.names);
            merge_one(&color.usage, &mut entry.usages);
            merge_one(&color.finish, &mut entry.finishes);
            merge_one(&color.notes, &mut entry.notes);
        }

        for typeface in &visual.typography {
            let family = typeface.family.trim();
            if family.is_empty() {
                continue;
            }
            let style = match typeface.style.trim() {
                "" => UNSPECIFIED_STYLE,
                style => style,
            };
            let key = (family.to_lowercase(), style.to_lowercase());
            let index = *self.typeface_index.entry(key).or_insert_with(|| {
                self.typefaces.push(TypefaceEntry::new(family));
                self.typefaces.len() - 1
            });
            let Some(entry) = self.typefaces.get_mut(index) else {
                continue;
            };
            entry.styles.insert(style.to_string());
            merge_one(&typeface.usage, &mut entry.usages);
            merge_one(&typeface.size_range, &mut entry.size_ranges);
            merge_one(&typeface.tracking, &mut entry.tracking);
            merge_one(&typeface.notes, &mut entry.notes);
            merge_one(image, &mut entry.source_images);
        }

        merge(&visual.logo_usage, &mut self.logo_usage);
        for ((_, source), target) in visual.imagery_style.fields().iter().zip(&mut self.imagery) {
            merge(source, target);
        }
        for (source, target) in data.layout_and_components.fields().iter().zip(&mut self.layout) {
            merge(source, target);
        }
        for (source, target) in data.voice_and_copy.fields().iter().zip(&mut self.voice) {
            merge(source, target);
        }

        merge(&data.production_notes, &mut self.production_notes);

        let confidence = data.confidence.trim();
        if !confidence.is_empty() && !image.is_empty() {
            self.confidence_notes.push(ConfidenceNote {
                image: image.to_string(),
                note: confidence.to_string(),
            });
        }
    }

    fn finish(self) -> CompiledDesign {
        let color_palette = self
            .palette
            .into_iter()
            .map(|(hex, entry)| CompiledColor {
                hex,
                names: finish(entry.names),
                usage_notes: finish(entry.usages),
                finishes: finish(entry.finishes),
                additional_notes: finish(entry.notes),
                source_images: finish(entry.source_images),
            })
            .collect();

        let mut typography: Vec<CompiledTypeface> =
            self.typefaces.into_iter().map(TypefaceEntry::finish).collect();
        typography.sort_by_cached_key(|typeface| typeface.family.to_lowercase());

        let [photography, illustration, iconography, textures_and_patterns] =
            self.imagery.map(finish);
        let [grid_and_spacing, key_components, call_to_action_treatment, interaction_notes] =
            self.layout.map(finish);
        let [tone_descriptors, messaging_pillars, dos, donts] = self.voice.map(finish);

        CompiledDesign {
            brand_identity: CompiledBrandIdentity {
                brand_names: finish(self.brand_names),
                design_context: finish(self.design_context),
                core_attributes: finish(self.core_attributes),
                taglines: finish(self.taglines),
            },
            visual_identity: CompiledVisualIdentity {
                color_palette,
                typography,
                logo_usage: finish(self.logo_usage),
                imagery_style: ImageryStyle {
                    photography,
                    illustration,
                    iconography,
                    textures_and_patterns,
                },
            },
            layout_and_components: LayoutComponents {
                grid_and_spacing,
                key_components,
                call_to_action_treatment,
                interaction_notes,
            },
            voice_and_copy: VoiceAndCopy {
                tone_descriptors,
                messaging_pillars,
                dos,
                donts,
            },
            production_notes: finish(self.production_notes),
            confidence_notes: self.confidence_notes,
        }
    }
}

/// Merge per-image vision results into a single design spec
pub fn compile_design_data(per_image: Vec<ImageDesign>) -> DesignSpec {
    let mut accumulator = Accumulator::default();
    for record in &per_image {
        accumulator.add(record);
    }
    DesignSpec {
        images_analyzed: per_image.len(),
        compiled: accumulator.finish(),
        per_image,
    }
}
