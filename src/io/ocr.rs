//! Optical character recognition capability
//!
//! Recognition is optional: every failure mode maps to "unavailable" rather
//! than an error, and callers continue with empty copy.

use crate::io::configuration::TESSERACT_BINARY;
use image::{DynamicImage, ImageFormat};
use std::io::{Cursor, Write};
use std::process::{Command, Stdio};
use tracing::debug;

/// Source of recognized text for a decoded image
pub trait TextRecognizer: Send + Sync {
    /// Raw recognized text, or `None` when recognition is unavailable
    fn recognize(&self, image: &DynamicImage) -> Option<String>;
}

/// Recognizer that is never available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcr;

impl TextRecognizer for NoOcr {
    fn recognize(&self, _image: &DynamicImage) -> Option<String> {
        None
    }
}

/// Recognizer backed by the `tesseract` command-line tool
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: String,
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new(TESSERACT_BINARY)
    }
}

impl TesseractCli {
    /// Use the given executable name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check whether the executable can be launched
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn run(&self, png: &[u8]) -> std::io::Result<Option<String>> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Dropping stdin closes the pipe before the child is reaped
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(png));

        let output = child.wait_with_output()?;
        if let Err(error) = written {
            debug!(binary = %self.binary, %error, "recognizer closed its input early");
            return Ok(None);
        }
        if !output.status.success() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize(&self, image: &DynamicImage) -> Option<String> {
        let mut png = Vec::new();
        if let Err(error) = image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png) {
            debug!(%error, "could not encode image for recognition");
            return None;
        }

        match self.run(&png) {
            Ok(text) => text,
            Err(error) => {
                debug!(binary = %self.binary, %error, "text recognizer unavailable");
                None
            }
        }
    }
}
