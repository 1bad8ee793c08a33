use crate::error::{Error, Result};
use crate::form::movie_form::{DEFAULT_HEADING, DEFAULT_SUBMIT_LABEL};
use crate::form::{MovieForm, MovieRecord};
use crate::terminal::RenderMode;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One compact JSON object per line.
    #[default]
    Json,
    JsonPretty,
    Yaml,
}

/// Settings read from the YAML config file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub heading: String,
    pub submit_label: String,
    pub output: OutputFormat,
    pub exit_after_submit: bool,
    pub render_mode: RenderMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            output: OutputFormat::default(),
            exit_after_submit: false,
            render_mode: RenderMode::default(),
        }
    }
}

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub output: Option<OutputFormat>,
    pub once: bool,
    pub inline: bool,
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(err),
        })?;
        let config = Self::from_yaml(&text).map_err(|err| Error::ConfigInvalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Flags only ever switch behavior on; an absent flag keeps the file value.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(format) = overrides.output {
            self.output = format;
        }
        if overrides.once {
            self.exit_after_submit = true;
        }
        if overrides.inline {
            self.render_mode = RenderMode::Inline;
        }
        self
    }

    /// The untouched form as a JSON element tree.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        self.build_form(|_| {}).view().to_json()
    }

    pub fn build_form(&self, on_add: impl FnMut(MovieRecord) + Send + 'static) -> MovieForm {
        MovieForm::new(on_add)
            .with_heading(self.heading.as_str())
            .with_submit_label(self.submit_label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, OutputFormat, Overrides};
    use crate::error::Error;
    use crate::terminal::RenderMode;
    use crate::ui::element::Tag;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::from_yaml("").expect("config"), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").expect("config"), AppConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_yaml("output: json-pretty\nrender_mode: inline\n").expect("config");
        assert_eq!(config.output, OutputFormat::JsonPretty);
        assert_eq!(config.render_mode, RenderMode::Inline);
        assert_eq!(config.heading, "Add a new movie");
        assert!(!config.exit_after_submit);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_yaml("colour: red\n").is_err());
        assert!(AppConfig::from_yaml("output: xml\n").is_err());
    }

    #[test]
    fn config_labels_reach_the_form() {
        let config = AppConfig::from_yaml("heading: New film\nsubmit_label: Save\n").expect("config");
        let view = config.build_form(|_| {}).view();
        assert_eq!(view.by_tag(Tag::Heading)[0].text(), "New film");
        assert_eq!(view.by_test_id("submit-button").expect("button").text(), "Save");
    }

    #[test]
    fn flags_override_file_values() {
        let file = AppConfig::from_yaml("output: yaml\nexit_after_submit: false\nrender_mode: alt-screen\n")
            .expect("config");
        let config = file.clone().with_overrides(Overrides {
            output: Some(OutputFormat::JsonPretty),
            once: true,
            inline: true,
        });
        assert_eq!(config.output, OutputFormat::JsonPretty);
        assert!(config.exit_after_submit);
        assert_eq!(config.render_mode, RenderMode::Inline);
        assert_eq!(config.heading, file.heading);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let file = AppConfig::from_yaml("output: yaml\nexit_after_submit: true\nrender_mode: inline\n")
            .expect("config");
        assert_eq!(file.clone().with_overrides(Overrides::default()), file);
    }

    #[test]
    fn snapshot_is_the_initial_element_tree() {
        let config = AppConfig::from_yaml("heading: New film\n").expect("config");
        let json: serde_json::Value =
            serde_json::from_str(&config.snapshot().expect("snapshot")).expect("json");
        assert_eq!(json["tag"], "form");
        assert_eq!(json["attrs"]["data-cy"], "movie-form");
        assert_eq!(json["children"][0]["text"], "New film");
        let button = &json["children"][6];
        assert_eq!(button["attrs"]["data-cy"], "submit-button");
        assert_eq!(button["attrs"]["disabled"], "");
    }

    #[test]
    fn load_reports_missing_and_invalid_files() {
        let dir = std::env::temp_dir().join(format!("movie-form-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");

        let missing = dir.join("missing.yaml");
        assert!(matches!(
            AppConfig::load(&missing),
            Err(Error::ConfigNotFound { .. })
        ));

        let invalid = dir.join("invalid.yaml");
        std::fs::write(&invalid, "exit_after_submit: maybe\n").expect("write");
        assert!(matches!(
            AppConfig::load(&invalid),
            Err(Error::ConfigInvalid { .. })
        ));

        let valid = dir.join("valid.yaml");
        std::fs::write(&valid, "exit_after_submit: true\n").expect("write");
        assert!(AppConfig::load(&valid).expect("config").exit_after_submit);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
