// In-memory table of records, rebuilt from the source on every request
use shared::models::{MonetaryColumn, Record};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        RecordTable { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A monetary column exists when at least one record carries a value for it.
    pub fn has_column(&self, column: MonetaryColumn) -> bool {
        self.records.iter().any(|r| r.value(column).is_some())
    }

    /// Records whose parsed publication date falls in `year`. Records with an
    /// unparseable date never match.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.year == Some(year))
    }
}

impl From<Vec<Record>> for RecordTable {
    fn from(records: Vec<Record>) -> Self {
        RecordTable::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
