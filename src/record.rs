use serde::Serialize;

/// Header names every schedule CSV must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Grade",
    "Section",
    "Class #",
    "Date",
    "Weekday",
    "Day",
    "Description",
    "Material",
    "Summary",
];

/// One normalized row of the class schedule.
///
/// Field order matches the key order of the generated data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRecord {
    #[serde(rename = "Grade")]
    pub grade: i64,
    #[serde(rename = "Section")]
    pub section: String,
    /// Class identifier; kept as text since values like "3b" occur.
    #[serde(rename = "Class #")]
    pub class_number: String,
    /// Calendar date as written in the source (`2024/3/5`, `2024-03-05`, ...).
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Weekday")]
    pub weekday: String,
    /// Sequential lesson index.
    #[serde(rename = "Day")]
    pub day: i64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Summary")]
    pub summary: String,
}

impl ScheduleRecord {
    /// Date with `/` unified to `-`. Only used for ordering.
    pub fn normalized_date(&self) -> String {
        self.date.replace('/', "-")
    }

    pub fn sort_key(&self) -> (i64, &str, String, &str) {
        (
            self.grade,
            self.section.as_str(),
            self.normalized_date(),
            self.class_number.as_str(),
        )
    }
}

#[cfg(test)]
impl ScheduleRecord {
    /// Record with the ordering fields set and empty text elsewhere.
    pub(crate) fn sample(
        grade: i64,
        section: impl Into<String>,
        class_number: impl Into<String>,
        date: impl Into<String>,
        day: i64,
    ) -> Self {
        Self {
            grade,
            section: section.into(),
            class_number: class_number.into(),
            date: date.into(),
            weekday: String::new(),
            day,
            description: String::new(),
            material: String::new(),
            summary: String::new(),
        }
    }
}
