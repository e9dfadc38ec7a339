use crate::persistence::EmitOptions;
use crate::persistence::file::DEFAULT_GLOBAL_NAME;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "teacher/authoring/schedule.csv";
pub const DEFAULT_OUTPUT: &str = "teacher/assets/js/schedule-data.js";

/// Where the generator reads from and writes to.
///
/// Relative `input` and `output` paths resolve against `project_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub project_root: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub global_name: String,
    /// Falls back to the input path as given, with `/` separators.
    pub source_description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            global_name: DEFAULT_GLOBAL_NAME.to_string(),
            source_description: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    pub fn output_file_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.to_string_lossy().into_owned())
    }

    pub fn emit_options(&self) -> EmitOptions {
        let source_description = match &self.source_description {
            Some(description) => description.clone(),
            None => self.input.to_string_lossy().replace('\\', "/"),
        };
        EmitOptions {
            global_name: self.global_name.clone(),
            source_description,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}
