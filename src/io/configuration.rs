//! Extraction thresholds and runtime configuration defaults

// Palette extraction
/// Default number of swatches extracted per image
pub const DEFAULT_MAX_COLORS: usize = 5;
/// Bounding box edge used to downscale images before quantization
pub const THUMBNAIL_BOUND: u32 = 600;

// Prominence tiers for swatch usage hints
/// Prominence at or above which a swatch reads as the hero color
pub const DOMINANT_PROMINENCE: f64 = 0.45;
/// Prominence at or above which a swatch reads as a supporting block
pub const PRIMARY_PROMINENCE: f64 = 0.25;
/// Prominence at or above which a swatch reads as an accent
pub const ACCENT_PROMINENCE: f64 = 0.10;

// Layout analysis
/// Gaussian blur sigma applied to the grayscale image before density analysis
pub const LAYOUT_BLUR_SIGMA: f32 = 1.5;
/// Normalized brightness at or above which a pixel counts as whitespace
pub const WHITESPACE_BRIGHTNESS: f64 = 0.9;
/// Mean darkness above which a grid cell is a focal region
pub const FOCAL_DARKNESS: f64 = 0.35;
/// Aspect ratio above which a layout is landscape
pub const LANDSCAPE_RATIO: f64 = 1.15;
/// Aspect ratio below which a layout is portrait
pub const PORTRAIT_RATIO: f64 = 0.85;

// Text heuristics
/// Shortest OCR line retained as copy
pub const MIN_LINE_LENGTH: usize = 3;
/// Longest fully uppercase line still treated as bold
pub const BOLD_MAX_LENGTH: usize = 12;
/// Word count at which a line reads as regular-weight running text
pub const REGULAR_MIN_WORDS: usize = 8;
/// Largest word count for an uppercase display line
pub const DISPLAY_MAX_WORDS: usize = 4;
/// Largest word count for a headline
pub const HEADLINE_MAX_WORDS: usize = 8;

// Aggregation
/// Whitespace ratio below which a production note flags a dense composition
pub const LOW_WHITESPACE_RATIO: f64 = 0.25;

// Guideline synthesis
/// Luminance below which the dominant palette reads as premium
pub const PREMIUM_LUMINANCE: f64 = 0.35;
/// Luminance below which the dominant palette reads as balanced
pub const BALANCED_LUMINANCE: f64 = 0.6;
/// Uppercase letter ratio above which headlines read as bold
pub const UPPERCASE_HEAVY_RATIO: f64 = 0.55;
/// Uppercase letter ratio below which copy reads as conversational
pub const UPPERCASE_LIGHT_RATIO: f64 = 0.25;
/// Mean whitespace at or above which soft radii are recommended
pub const SOFT_RADIUS_WHITESPACE: f64 = 0.5;
/// Mean whitespace at or above which standard radii are recommended
pub const STANDARD_RADIUS_WHITESPACE: f64 = 0.3;
/// Mean whitespace assumed when no layout data exists
pub const DEFAULT_WHITESPACE: f64 = 0.35;
/// Mean words per copy line at or below which headlines are punchy
pub const PUNCHY_MAX_WORDS: f64 = 4.0;
/// Number of focal regions named in the visual system section
pub const FOCAL_HOTSPOTS: usize = 3;
/// Hex used when no palette evidence exists
pub const FALLBACK_HEX: &str = "#00A1DE";
/// Name paired with the fallback hex
pub const FALLBACK_COLOR_NAME: &str = "Bynder Blue";

// Runtime defaults
/// Brand name used in document titles when none is supplied
pub const DEFAULT_BRAND_NAME: &str = "Bynder";
/// Dotenv file consulted for credentials
pub const DEFAULT_ENV_FILE: &str = ".env";
/// Environment variable holding the vision API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Vision-capable model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Sampling temperature for the vision model
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
/// Token ceiling for each vision response
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
/// Base URL of the OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Timeout for a single vision request
pub const REQUEST_TIMEOUT_SECS: u64 = 120;
/// Executable invoked for optical character recognition
pub const TESSERACT_BINARY: &str = "tesseract";
/// Image file extensions accepted during input discovery
pub const SUPPORTED_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
