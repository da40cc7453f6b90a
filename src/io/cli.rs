//! Command-line interface for batch brand guideline extraction

use crate::evidence::aggregate::aggregate;
use crate::evidence::model::ImageExtraction;
use crate::extraction::extract_from_path;
use crate::guidelines::render::{LocalReport, VisionReport, render_json, render_markdown};
use crate::guidelines::synthesis::{build_document, build_document_from_spec};
use crate::guidelines::document::GuidelineDocument;
use crate::io::batch::run_ordered;
use crate::io::configuration::{
    DEFAULT_BASE_URL, DEFAULT_BRAND_NAME, DEFAULT_ENV_FILE, DEFAULT_MAX_COLORS,
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::io::discovery::collect_image_paths;
use crate::io::env::{EnvFile, resolve_api_key};
use crate::io::error::{BrandError, Result, file_system, invalid_parameter};
use crate::io::ocr::{NoOcr, TesseractCli, TextRecognizer};
use crate::io::progress::ProgressManager;
use crate::vision::client::{VisionClient, VisionSettings};
use crate::vision::compile::{ImageDesign, compile_design_data};
use crate::vision::design::DesignData;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Serialization format for the generated guidelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Document plus its supporting evidence as pretty JSON
    Json,
    /// Markdown guideline document
    #[value(name = "md", alias = "markdown")]
    Markdown,
}

/// Evidence source for guideline synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Offline palette, layout and OCR heuristics
    Local,
    /// Multimodal vision model, supplemented by local layout evidence
    Vision,
}

#[derive(Parser, Debug)]
#[command(name = "brandlens")]
#[command(
    author,
    version,
    about = "Extract brand guidelines from a set of design assets"
)]
/// Command-line arguments for the guideline extraction tool
// Independent feature switches are naturally expressed as flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image files or directories to analyze
    #[arg(value_name = "IMAGES")]
    pub inputs: Vec<PathBuf>,

    /// Additional directory to scan for images
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Evidence source
    #[arg(short, long, value_enum, default_value_t = Engine::Local)]
    pub engine: Engine,

    /// Brand name used in the document title and checklist
    #[arg(short, long, default_value = DEFAULT_BRAND_NAME)]
    pub brand_name: String,

    /// Maximum swatches extracted per image
    #[arg(long, default_value_t = DEFAULT_MAX_COLORS)]
    pub max_colors: usize,

    /// Skip optical character recognition
    #[arg(long)]
    pub no_ocr: bool,

    /// Number of images analyzed concurrently
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Abort on the first image that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Dotenv file consulted for the API key
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// API key for the vision engine
    #[arg(long)]
    pub api_key: Option<String>,

    /// Vision model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature for the vision model
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Token ceiling for each vision response
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    pub max_output_tokens: u32,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject argument values that cannot produce a meaningful run
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the offending flag
    pub fn validate(&self) -> Result<()> {
        if self.max_colors == 0 {
            return Err(invalid_parameter(
                "max-colors",
                &self.max_colors,
                &"must be at least 1",
            ));
        }
        if self.jobs == 0 {
            return Err(invalid_parameter("jobs", &self.jobs, &"must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid_parameter(
                "temperature",
                &self.temperature,
                &"must be between 0 and 2",
            ));
        }
        if self.brand_name.trim().is_empty() {
            return Err(invalid_parameter(
                "brand-name",
                &self.brand_name,
                &"must not be blank",
            ));
        }
        Ok(())
    }

    /// Vision request settings taken from the arguments
    pub fn vision_settings(&self) -> VisionSettings {
        VisionSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            base_url: self.base_url.clone(),
        }
    }
}

/// Orchestrates discovery, extraction, synthesis and output for one run
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the analysis and write the rendered result
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, no images are found, every
    /// image fails (or any does under `--fail-fast`), or the output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let rendered = self.run()?;
        self.write_output(&rendered)
    }

    /// Run the analysis and return the rendered result
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::process`], excluding output writing
    pub fn run(&mut self) -> Result<String> {
        self.cli.validate()?;
        let paths = collect_image_paths(
            &self.cli.inputs,
            self.cli.input_dir.as_deref(),
            self.cli.recursive,
        )?;
        info!(images = paths.len(), engine = ?self.cli.engine, "starting analysis");

        let recognizer = self.recognizer();
        match self.cli.engine {
            Engine::Local => self.run_local(&paths, recognizer.as_ref()),
            Engine::Vision => self.run_vision(&paths, recognizer.as_ref()),
        }
    }

    fn recognizer(&self) -> Box<dyn TextRecognizer> {
        if self.cli.no_ocr {
            return Box::new(NoOcr);
        }
        let tesseract = TesseractCli::default();
        if tesseract.is_available() {
            Box::new(tesseract)
        } else {
            warn!("tesseract not found; copy detection disabled");
            Box::new(NoOcr)
        }
    }

    fn run_local(&mut self, paths: &[PathBuf], recognizer: &dyn TextRecognizer) -> Result<String> {
        let max_colors = self.cli.max_colors;
        let outcomes = run_ordered(
            paths,
            self.cli.jobs,
            self.cli.fail_fast,
            &mut self.progress_manager,
            |path| extract_from_path(path, recognizer, max_colors),
        );
        let extractions: Vec<ImageExtraction> = self
            .successes(paths, outcomes)?
            .into_iter()
            .map(|(_, extraction)| extraction)
            .collect();

        let evidence = aggregate(&extractions);
        let document = build_document(&evidence, &self.cli.brand_name);
        self.render(&document, || {
            render_json(&LocalReport {
                document: &document,
                evidence: &evidence,
            })
        })
    }

    fn run_vision(&mut self, paths: &[PathBuf], recognizer: &dyn TextRecognizer) -> Result<String> {
        let env_file = EnvFile::load(&self.cli.env_file)?;
        let api_key = resolve_api_key(self.cli.api_key.as_deref(), &env_file)?;
        let client = VisionClient::new(api_key, self.cli.vision_settings())?;
        let max_colors = self.cli.max_colors;

        let outcomes = run_ordered(
            paths,
            self.cli.jobs,
            self.cli.fail_fast,
            &mut self.progress_manager,
            |path| -> Result<(DesignData, Option<ImageExtraction>)> {
                let design = client.analyze(path)?;
                let local = extract_from_path(path, recognizer, max_colors)
                    .inspect_err(|error| warn!(%error, "local evidence unavailable"))
                    .ok();
                Ok((design, local))
            },
        );

        let mut per_image = Vec::new();
        let mut extractions = Vec::new();
        for (path, (design, local)) in self.successes(paths, outcomes)? {
            per_image.push(ImageDesign {
                image: path.display().to_string(),
                guidelines: design,
            });
            extractions.extend(local);
        }

        let spec = compile_design_data(per_image);
        let evidence = aggregate(&extractions);
        let document = build_document_from_spec(&spec, &self.cli.brand_name, Some(&evidence));
        self.render(&document, || {
            render_json(&VisionReport {
                document: &document,
                design_spec: &spec,
            })
        })
    }

    // Failures are logged and skipped unless fail-fast is set
    fn successes<T>(
        &self,
        paths: &[PathBuf],
        outcomes: Vec<Option<Result<T>>>,
    ) -> Result<Vec<(PathBuf, T)>> {
        let mut succeeded = Vec::new();
        for (path, outcome) in paths.iter().zip(outcomes) {
            match outcome {
                Some(Ok(value)) => succeeded.push((path.clone(), value)),
                Some(Err(error)) if self.cli.fail_fast => return Err(error),
                Some(Err(error)) => warn!(path = %path.display(), %error, "skipping image"),
                None => {}
            }
        }

        if succeeded.is_empty() {
            return Err(BrandError::AllImagesFailed {
                attempted: paths.len(),
            });
        }
        Ok(succeeded)
    }

    fn render(
        &self,
        document: &GuidelineDocument,
        json: impl FnOnce() -> Result<String>,
    ) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => json(),
            OutputFormat::Markdown => Ok(render_markdown(document)),
        }
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        let Some(output) = &self.cli.output else {
            let mut stdout = std::io::stdout().lock();
            return writeln!(stdout, "{rendered}")
                .map_err(|e| file_system(Path::new("<stdout>"), "write output", e));
        };

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }
        std::fs::write(output, rendered).map_err(|e| file_system(output, "write output", e))?;
        info!(path = %output.display(), "results written");
        Ok(())
    }
}
