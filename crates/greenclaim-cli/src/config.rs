//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use greenclaim_gate::GateConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trained classifier artifacts
    #[serde(default)]
    pub artifacts: Artifacts,

    /// Embedding provider
    #[serde(default)]
    pub embedding: EmbeddingSettings,

    /// Decision pipeline settings
    #[serde(default)]
    pub gate: GateConfig,

    /// Evaluation limits
    #[serde(default)]
    pub evaluation: EvaluationSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Paths to the classifier artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifacts {
    /// Document compliance classifier
    #[serde(default = "default_document_model")]
    pub document_model: PathBuf,

    /// Semantic clarity classifier
    #[serde(default = "default_semantic_model")]
    pub semantic_model: PathBuf,
}

/// Embedding provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// Offline hashing model
    Hashing,
    /// Ollama server
    Ollama,
}

/// Embedding provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    /// Which provider to use
    #[serde(default = "default_provider")]
    pub provider: EmbeddingProviderKind,

    /// Ollama endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Ollama model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Vector dimension the classifiers were trained with
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Request timeout for remote providers
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Evaluation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Per-record time limit in batch mode
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Records evaluated at once in batch mode
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".greenclaim").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.gate.validate().map_err(CliError::Config)?;
        if self.embedding.dimension == 0 {
            return Err(CliError::Config("embedding.dimension must be greater than 0".into()));
        }
        if self.evaluation.timeout_secs == 0 {
            return Err(CliError::Config("evaluation.timeout_secs must be greater than 0".into()));
        }
        if self.evaluation.concurrency == 0 {
            return Err(CliError::Config("evaluation.concurrency must be greater than 0".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifacts: Artifacts::default(),
            embedding: EmbeddingSettings::default(),
            gate: GateConfig::default(),
            evaluation: EvaluationSettings::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Artifacts {
    fn default() -> Self {
        Self {
            document_model: default_document_model(),
            semantic_model: default_semantic_model(),
        }
    }
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
            model: default_model(),
            dimension: default_dimension(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            concurrency: default_concurrency(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn artifact_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".greenclaim").join("models"))
        .unwrap_or_else(|| PathBuf::from("models"))
}

fn default_document_model() -> PathBuf {
    artifact_dir().join("document_classifier.json")
}

fn default_semantic_model() -> PathBuf {
    artifact_dir().join("semantic_classifier.json")
}

fn default_provider() -> EmbeddingProviderKind {
    EmbeddingProviderKind::Hashing
}

fn default_endpoint() -> String {
    greenclaim_embed::ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "nomic-embed-text".to_string()
}

fn default_dimension() -> usize {
    384
}

fn default_request_timeout() -> u64 {
    greenclaim_embed::ollama::DEFAULT_TIMEOUT_SECS
}

fn default_timeout() -> u64 {
    60
}

fn default_concurrency() -> usize {
    4
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
