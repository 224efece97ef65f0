//! Item model and date parsing

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::ValidationError;

pub type ItemId = i64;

/// Wire format for item dates
pub const ITEM_DATE_FORMAT: &str = "%Y-%m-%d";

/// A dated note belonging to exactly one list
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub item_date: NaiveDate,
    pub content: String,
    pub list_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the client when creating an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub item_date: NaiveDate,
    pub content: String,
    pub list_id: i64,
}

impl NewItem {
    pub fn new(
        title: impl Into<String>,
        item_date: NaiveDate,
        content: impl Into<String>,
        list_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            item_date,
            content: content.into(),
            list_id,
        }
    }
}

/// Validated calendar date in `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDate(NaiveDate);

impl ItemDate {
    /// Parse a date, requiring zero-padded `YYYY-MM-DD`.
    ///
    /// # Example
    /// ```
    /// use listkeeper_server::models::ItemDate;
    ///
    /// assert!(ItemDate::parse("2025-10-08").is_ok());
    /// assert!(ItemDate::parse("2025-1-8").is_err());   // not zero-padded
    /// assert!(ItemDate::parse("2025-02-30").is_err()); // not a real day
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        const INVALID: ValidationError = ValidationError::InvalidFormat {
            field: "item_date",
            reason: "expected a calendar date in YYYY-MM-DD form",
        };

        // chrono tolerates signs, padding spaces and short fields; the wire
        // format is exactly four digits, dash, two digits, dash, two digits
        if !has_date_shape(s) {
            return Err(INVALID);
        }

        NaiveDate::parse_from_str(s, ITEM_DATE_FORMAT)
            .map(Self)
            .map_err(|_| INVALID)
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<ItemDate> for NaiveDate {
    fn from(d: ItemDate) -> Self {
        d.0
    }
}
