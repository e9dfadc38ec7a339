use crate::record::ScheduleRecord;
use serde::Serialize;

/// Records from one load, ordered by grade, section, normalized date and
/// class number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleCollection {
    records: Vec<ScheduleRecord>,
}

impl ScheduleCollection {
    pub fn from_records(mut records: Vec<ScheduleRecord>) -> Self {
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { records }
    }

    pub fn records(&self) -> &[ScheduleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<ScheduleRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ScheduleCollection {
    type Item = &'a ScheduleRecord;
    type IntoIter = std::slice::Iter<'a, ScheduleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
