//! File processing API for probe scripts
//!
//! This module turns a script into printable output at one of two stages (token, program)
//! and in one of several formats (simple, json, yaml). A processing spec is written as
//! `<stage>-<format>`, for example `token-simple` or `program-json`.
//!
//! The token stage shows the structural tokenizer on its own. It never switches into raw
//! scanning the way the parser does, so signature, predicate and action text show up as
//! identifier and special tokens rather than as single raw tokens.
//!
//! `program-simple` prints one line per probe in the driver's listing form:
//!
//!     probe p:kernel:__kmalloc(size_t size) with predicate /size/ actions = { a();
//!     b(); }
//!
//! The declaration always carries parentheses, builtins are listed with a `b` type letter,
//! and action lines are joined with newlines.

use crate::btrace::ast::{ProbeDeclaration, Program};
use crate::btrace::lexer::{tokenize, Token};
use crate::btrace::parser::{parse_program, ParseError};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Program,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid stage: {0}")]
    InvalidStage(String),
    #[error("invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to serialize output: {0}")]
    Serialization(String),
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "program-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "program" => ProcessingStage::Program,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        if stage == ProcessingStage::Token && format == OutputFormat::Yaml {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'yaml' only works with program stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Program,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Program,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Program,
                format: OutputFormat::Yaml,
            },
        ]
    }

    /// The spec string this spec was parsed from
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Program => "program",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        format!("{}-{}", stage, format)
    }
}

/// Process script text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    debug!(spec = %spec.name(), bytes = source.len(), "processing script");
    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize(source), spec.format),
        ProcessingStage::Program => {
            let program = parse_program(source)?;
            format_program(&program, spec.format)
        }
    }
}

/// Process a script file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.display().to_string(),
        source,
    })?;
    process_source(&content, spec)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => Err(ProcessingError::InvalidFormatType(
            "yaml format only works with program stage".to_string(),
        )),
    }
}

/// Format a parsed program according to the specified format
fn format_program(program: &Program, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for probe in program {
                result.push_str(&format!(
                    "probe {} with predicate /{}/ actions = {{ {} }}\n",
                    listing_declaration(probe.declaration()),
                    probe.predicate(),
                    probe.actions()
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(program)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(program)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

/// `type:library:function(signature)`, with `b` as the type letter of builtins
fn listing_declaration(decl: &ProbeDeclaration) -> String {
    format!(
        "{}:{}:{}({})",
        decl.kind().discriminator().unwrap_or("b"),
        decl.library(),
        decl.function(),
        decl.signature()
    )
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
