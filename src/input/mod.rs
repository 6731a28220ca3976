use std::path::PathBuf;

pub mod dataset;
pub mod reader;

use thiserror::Error;

use crate::model::factors::Method;
use reader::read_sample_file;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("rejected input: {0}")]
    Rejected(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Where one method's raw ratings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    Embedded,
    Inline(String),
    File(PathBuf),
}

impl SampleSource {
    /// `@path` reads a file; anything else is taken as the ratings themselves.
    pub fn from_arg(arg: &str) -> Self {
        match arg.strip_prefix('@') {
            Some(path) => SampleSource::File(PathBuf::from(path)),
            None => SampleSource::Inline(arg.to_string()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SampleSource::Embedded => "embedded".to_string(),
            SampleSource::Inline(_) => "inline".to_string(),
            SampleSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawSamples {
    pub texts: [String; Method::COUNT],
    pub sources: [String; Method::COUNT],
}

impl RawSamples {
    pub fn embedded() -> Self {
        Self {
            texts: Method::ALL.map(|m| embedded_text(m).to_string()),
            sources: Method::ALL.map(|_| "embedded".to_string()),
        }
    }

    #[cfg(test)]
    pub fn from_texts(overhand: &str, underhand: &str, side: &str) -> Self {
        Self {
            texts: [overhand.to_string(), underhand.to_string(), side.to_string()],
            sources: Method::ALL.map(|_| "inline".to_string()),
        }
    }

    pub fn text(&self, method: Method) -> &str {
        &self.texts[method.index()]
    }
}

pub fn embedded_text(method: Method) -> &'static str {
    match method {
        Method::Overhand => dataset::OVERHAND,
        Method::Underhand => dataset::UNDERHAND,
        Method::Side => dataset::SIDE,
    }
}

pub fn load_samples(sources: &[SampleSource; Method::COUNT]) -> Result<RawSamples, InputError> {
    let mut samples = RawSamples::embedded();
    for method in Method::ALL {
        let source = &sources[method.index()];
        let text = match source {
            SampleSource::Embedded => continue,
            SampleSource::Inline(raw) => raw.clone(),
            SampleSource::File(path) => read_sample_file(path)?,
        };
        tracing::debug!(
            method = method.name(),
            source = %source.describe(),
            bytes = text.len(),
            "loaded raw sample"
        );
        samples.texts[method.index()] = text;
        samples.sources[method.index()] = source.describe();
    }
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
