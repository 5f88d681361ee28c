//! Free-text, category and status filters over medicine records.

use chrono::NaiveDate;

use crate::domain::{MedicineRecord, MedicineStatus, ParseMedicineStatusError};

const ALL_SENTINEL: &str = "all";

/// Category constraint. `All` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Interpret a raw query value. Absent, blank or `all` means no constraint.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => Self::All,
            Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) => Self::All,
            Some(raw) => Self::Named(raw.to_owned()),
        }
    }

    fn matches(&self, record: &MedicineRecord) -> bool {
        match self {
            Self::All => true,
            Self::Named(category) => record.category_label() == category,
        }
    }
}

/// Status constraint. `All` matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MedicineStatus),
}

impl StatusFilter {
    /// Interpret a raw query value. Absent, blank or `all` means no constraint.
    pub fn parse(value: Option<&str>) -> Result<Self, ParseMedicineStatusError> {
        match value.map(str::trim) {
            None => Ok(Self::All),
            Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) => Ok(Self::All),
            Some(raw) => raw.parse().map(Self::Only),
        }
    }

    fn matches(self, status: MedicineStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => status == expected,
        }
    }
}

/// Active inventory query. All constraints must hold for a record to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    text: String,
    category: CategoryFilter,
    status: StatusFilter,
}

impl InventoryFilter {
    /// Filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text needle. Surrounding whitespace is ignored.
    #[must_use]
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text = text.as_ref().trim().to_lowercase();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Lowercased search needle; empty when no text constraint is active.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    /// Return `true` when no constraint is active.
    pub fn is_cleared(&self) -> bool {
        self == &Self::default()
    }

    /// Return `true` when `record` satisfies every active constraint.
    pub fn matches(&self, record: &MedicineRecord, today: NaiveDate) -> bool {
        self.matches_text(record)
            && self.category.matches(record)
            && self.status.matches(record.status(today))
    }

    fn matches_text(&self, record: &MedicineRecord) -> bool {
        self.text.is_empty()
            || record.name.to_lowercase().contains(&self.text)
            || record.barcode.to_lowercase().contains(&self.text)
    }
}

/// Keep the records matching `filter`, preserving their order.
pub fn filter_records<'a>(
    records: &'a [MedicineRecord],
    filter: &InventoryFilter,
    today: NaiveDate,
) -> Vec<&'a MedicineRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record, today))
        .collect()
}
