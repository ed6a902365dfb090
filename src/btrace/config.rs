//! Configuration for the btrace command-line tool.
//!
//! Sources, lowest precedence first:
//!
//!     1. `defaults/btrace.default.toml`, embedded at build time
//!     2. `btrace.toml` in the working directory, when present
//!     3. the file named by `--config`
//!     4. command-line settings (`--format`, `--log-level`, positional format)
//!
//! The parser itself takes no configuration.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/btrace.default.toml");

/// File picked up from the working directory without being asked for
pub const LOCAL_CONFIG: &str = "btrace.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct BtraceConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Processing spec string, e.g. `program-json`
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback log filter when `RUST_LOG` is unset
    pub level: String,
}

/// Settings taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliSettings {
    pub config_file: Option<PathBuf>,
    pub format: Option<String>,
    pub log_level: Option<String>,
}

impl BtraceConfig {
    /// Resolve the configuration for one run of the binary
    pub fn load(settings: &CliSettings) -> Result<Self, ConfigError> {
        Self::load_from(Path::new(LOCAL_CONFIG), settings)
    }

    /// Same as [load](Self::load) with an explicit location for the local file
    pub fn load_from(local: &Path, settings: &CliSettings) -> Result<Self, ConfigError> {
        let mut loader = Loader::new().layer_file(local, false);
        if let Some(path) = &settings.config_file {
            loader = loader.layer_file(path, true);
        }
        if let Some(format) = &settings.format {
            loader = loader.set("output.format", format)?;
        }
        if let Some(level) = &settings.log_level {
            loader = loader.set("logging.level", level)?;
        }
        loader.build()
    }
}

/// Stacks configuration sources over the embedded defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file; a missing `required` file fails the build
    pub fn layer_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let file = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Pin a single dotted key, above every file
    pub fn set(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BtraceConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{}", contents).expect("write config");
        file
    }

    #[test]
    fn embedded_defaults() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "program-simple");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn set_pins_value() {
        let config = Loader::new()
            .set("output.format", "program-json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "program-json");
    }

    #[test]
    fn required_file_must_exist() {
        let result = Loader::new()
            .layer_file("/nonexistent/btrace.toml", true)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn precedence_local_then_config_then_cli() {
        let local = write_toml("[output]\nformat = \"token-json\"\n[logging]\nlevel = \"info\"\n");
        let user = write_toml("[logging]\nlevel = \"debug\"\n");

        let settings = CliSettings {
            config_file: Some(user.path().to_path_buf()),
            ..CliSettings::default()
        };
        let config = BtraceConfig::load_from(local.path(), &settings).unwrap();
        assert_eq!(config.output.format, "token-json");
        assert_eq!(config.logging.level, "debug");

        let settings = CliSettings {
            config_file: Some(user.path().to_path_buf()),
            format: Some("program-yaml".to_string()),
            log_level: Some("trace".to_string()),
        };
        let config = BtraceConfig::load_from(local.path(), &settings).unwrap();
        assert_eq!(config.output.format, "program-yaml");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn missing_local_file_is_ignored() {
        let config =
            BtraceConfig::load_from(Path::new("/nonexistent/btrace.toml"), &CliSettings::default())
                .unwrap();
        assert_eq!(config.logging.level, "warn");
    }
}
