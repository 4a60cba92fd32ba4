//! Test plan loading. Each case is a `[title, url, command]` triple under `tests`.

use crate::error::ReportError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, String)")]
pub struct TestCase {
    pub title: String,
    pub url: String,
    pub command: String,
}

impl From<(String, String, String)> for TestCase {
    fn from((title, url, command): (String, String, String)) -> Self {
        TestCase { title, url, command }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestPlan {
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON; everything else, stdin included, is TOML.
    pub fn for_path(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

pub fn parse(text: &str, format: InputFormat) -> Result<TestPlan, ReportError> {
    Ok(match format {
        InputFormat::Toml => toml::from_str(text)?,
        InputFormat::Json => serde_json::from_str(text)?,
    })
}

/// Read the plan from `path`, or from stdin when `None`.
pub fn load(path: Option<&Path>) -> Result<TestPlan, ReportError> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| ReportError::Read {
            source_name: p.display().to_string(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ReportError::Read {
                    source_name: "stdin".into(),
                    source,
                })?;
            buf
        }
    };
    parse(&text, InputFormat::for_path(path))
}
