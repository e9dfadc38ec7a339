use super::ScheduleDataResult;
use crate::config::GeneratorConfig;
use crate::record::{REQUIRED_COLUMNS, ScheduleRecord};
use crate::schedule::ScheduleCollection;
use crate::validation::{ValidationError, parse_integer_field};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_GLOBAL_NAME: &str = "window.SCHEDULE_DATA";
pub const DEFAULT_SOURCE_DESCRIPTION: &str = "teacher/authoring/schedule.csv";

/// Wrapper settings for the generated data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Binding the array is assigned to, e.g. `window.SCHEDULE_DATA`.
    pub global_name: String,
    /// Shown in the "Generated from" header comment.
    pub source_description: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            global_name: DEFAULT_GLOBAL_NAME.to_string(),
            source_description: DEFAULT_SOURCE_DESCRIPTION.to_string(),
        }
    }
}

/// Header positions of the required columns.
struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, ValidationError> {
        if headers.is_empty() {
            return Err(ValidationError::MissingHeader);
        }

        // Repeated header names resolve to the last occurrence.
        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            by_name.insert(name, idx);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !by_name.contains_key(**column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingColumns(missing));
        }

        let extra = headers
            .iter()
            .filter(|name| !REQUIRED_COLUMNS.iter().any(|column| column == name))
            .count();
        if extra > 0 {
            warn!(extra, "ignoring columns outside the schedule layout");
        }

        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            *slot = by_name[*column];
        }
        Ok(Self { positions })
    }

    fn field<'r>(
        &self,
        record: &'r StringRecord,
        column: usize,
        row: usize,
    ) -> Result<&'r str, ValidationError> {
        record
            .get(self.positions[column])
            .ok_or(ValidationError::MissingField {
                field: REQUIRED_COLUMNS[column],
                row,
            })
    }

    fn read_row(
        &self,
        record: &StringRecord,
        row: usize,
    ) -> Result<ScheduleRecord, ValidationError> {
        let mut values = [""; REQUIRED_COLUMNS.len()];
        for (column, value) in values.iter_mut().enumerate() {
            *value = self.field(record, column, row)?;
        }
        let [grade, section, class_number, date, weekday, day, description, material, summary] =
            values;

        Ok(ScheduleRecord {
            grade: parse_integer_field("Grade", row, grade)?,
            section: section.to_string(),
            class_number: class_number.to_string(),
            date: date.to_string(),
            weekday: weekday.to_string(),
            day: parse_integer_field("Day", row, day)?,
            description: description.to_string(),
            material: material.to_string(),
            summary: summary.to_string(),
        })
    }
}

/// Reads, validates and orders schedule rows from CSV data.
///
/// Row numbers in errors count the header as row 1.
pub fn load_schedule_from_reader<R: Read>(source: R) -> ScheduleDataResult<ScheduleCollection> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        records.push(columns.read_row(&record, idx + 2)?);
    }

    debug!(rows = records.len(), "schedule rows validated");
    Ok(ScheduleCollection::from_records(records))
}

pub fn load_schedule_from_csv<P: AsRef<Path>>(path: P) -> ScheduleDataResult<ScheduleCollection> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading schedule csv");
    let file = File::open(path)?;
    load_schedule_from_reader(file)
}

/// Builds the full text of the generated data file.
pub fn render_schedule_js(
    collection: &ScheduleCollection,
    options: &EmitOptions,
) -> ScheduleDataResult<String> {
    let json = serde_json::to_string_pretty(collection)?;
    let lines = [
        "// AUTO-GENERATED FILE".to_string(),
        format!("// Generated from {}", options.source_description),
        "// Do not edit manually.".to_string(),
        format!("{} = {json};", options.global_name),
        String::new(),
    ];
    Ok(lines.join("\n"))
}

/// Writes the data file, creating parent directories and replacing any
/// existing file.
pub fn save_schedule_to_js<P: AsRef<Path>>(
    collection: &ScheduleCollection,
    path: P,
    options: &EmitOptions,
) -> ScheduleDataResult<()> {
    let path = path.as_ref();
    let content = render_schedule_js(collection, options)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), records = collection.len(), "schedule data written");
    Ok(())
}

/// Loads the configured CSV and writes the data file. Nothing is written
/// when loading fails.
pub fn generate_schedule_data(config: &GeneratorConfig) -> ScheduleDataResult<ScheduleCollection> {
    let input = config.input_path();
    let output = config.output_path();

    let collection = load_schedule_from_csv(&input)?;
    save_schedule_to_js(&collection, &output, &config.emit_options())?;

    info!(
        input = %input.display(),
        output = %output.display(),
        records = collection.len(),
        "schedule data generated"
    );
    Ok(collection)
}
