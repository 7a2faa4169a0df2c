//! Column definitions and cell values of the generic data table

use std::cmp::Ordering;

use crate::shared::date_utils::format_local_date;

/// Placeholder shown whenever a nested block of a record is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Key of the synthetic row-actions column
pub const ACTIONS_KEY: &str = "actions";

/// Visual tone of a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Neutral,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Success => "badge badge--success",
            Tone::Danger => "badge badge--error",
            Tone::Neutral => "badge badge--neutral",
        }
    }
}

/// Two fixed labels of a boolean column, with the tone of each value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagLabels {
    pub on: &'static str,
    pub off: &'static str,
    pub on_tone: Tone,
    pub off_tone: Tone,
}

impl FlagLabels {
    pub const fn new(on: &'static str, off: &'static str) -> Self {
        Self {
            on,
            off,
            on_tone: Tone::Success,
            off_tone: Tone::Danger,
        }
    }

    pub const fn with_off_tone(mut self, tone: Tone) -> Self {
        self.off_tone = tone;
        self
    }

    pub fn label(&self, value: bool) -> &'static str {
        if value {
            self.on
        } else {
            self.off
        }
    }

    pub fn tone(&self, value: bool) -> Tone {
        if value {
            self.on_tone
        } else {
            self.off_tone
        }
    }
}

/// Typed value of one cell, before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Nested data absent from the record
    Missing,
    Text(String),
    Number(f64),
    Flag(bool, FlagLabels),
    /// ISO-8601 date or timestamp as sent by the backend
    Date(String),
    Money { currency: String, min: f64, max: f64 },
    List(Vec<String>),
    /// List shown on one line, with a label for the empty case
    Joined(Vec<String>, &'static str),
    /// Primary text with a secondary line underneath
    Captioned { text: String, caption: String },
}

/// Raw value written to an exported sheet
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text of an optional nested field
    pub fn text_or_missing(value: Option<&str>) -> Self {
        value.map_or(CellValue::Missing, CellValue::text)
    }

    pub fn date_or_missing(value: Option<&str>) -> Self {
        value.map_or(CellValue::Missing, |d| CellValue::Date(d.to_string()))
    }

    /// Display text of the cell
    pub fn display(&self) -> String {
        match self {
            CellValue::Missing => NOT_AVAILABLE.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Flag(value, labels) => labels.label(*value).to_string(),
            CellValue::Date(d) => format_local_date(d),
            CellValue::Money { currency, min, max } => format!("{} {} - {}", currency, min, max),
            CellValue::List(items) => items.join("\n"),
            CellValue::Joined(items, empty) => {
                if items.is_empty() {
                    empty.to_string()
                } else {
                    items.join(", ")
                }
            }
            CellValue::Captioned { text, .. } => text.clone(),
        }
    }

    /// Value as stored in the record, for spreadsheet export
    pub fn raw(&self) -> RawCell {
        match self {
            CellValue::Missing => RawCell::Empty,
            CellValue::Text(s) | CellValue::Date(s) => RawCell::Text(s.clone()),
            CellValue::Captioned { text, .. } => RawCell::Text(text.clone()),
            CellValue::Number(n) => RawCell::Number(*n),
            CellValue::Flag(value, _) => RawCell::Bool(*value),
            CellValue::Money { currency, min, max } => RawCell::Text(
                serde_json::json!({ "min": min, "max": max, "currency": currency }).to_string(),
            ),
            CellValue::List(items) | CellValue::Joined(items, _) => {
                RawCell::Text(serde_json::json!(items).to_string())
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Missing => 0,
            CellValue::Flag(..) => 1,
            CellValue::Number(_) | CellValue::Money { .. } => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) | CellValue::Captioned { .. } => 4,
            CellValue::List(_) | CellValue::Joined(..) => 5,
        }
    }

    fn sort_text(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::Captioned { text: s, .. } => s.to_lowercase(),
            CellValue::List(items) | CellValue::Joined(items, _) => items.join(", ").to_lowercase(),
            _ => String::new(),
        }
    }

    /// Natural total order: missing values first, then by value.
    ///
    /// Text compares case-insensitively, numbers numerically, `false < true`,
    /// dates by their ISO string, money ranges by minimum then maximum.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Flag(a, _), CellValue::Flag(b, _)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (
                CellValue::Money { min: a_min, max: a_max, .. },
                CellValue::Money { min: b_min, max: b_max, .. },
            ) => a_min.total_cmp(b_min).then(a_max.total_cmp(b_max)),
            _ => self
                .rank()
                .cmp(&other.rank())
                .then_with(|| self.sort_text().cmp(&other.sort_text())),
        }
    }
}

/// One column of a [`TableSpec`](super::TableSpec)
pub struct Column<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    pub visible_by_default: bool,
    value: fn(&T) -> CellValue,
    raw: Option<fn(&T) -> RawCell>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, title: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            key,
            title,
            sortable: true,
            visible_by_default: true,
            value,
            raw: None,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    /// Export a different value than the one displayed
    pub fn raw(mut self, raw: fn(&T) -> RawCell) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn value(&self, record: &T) -> CellValue {
        (self.value)(record)
    }

    pub fn raw_value(&self, record: &T) -> RawCell {
        match self.raw {
            Some(raw) => raw(record),
            None => self.value(record).raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REMOTE: FlagLabels = FlagLabels::new("Remote", "On-site").with_off_tone(Tone::Neutral);

    #[test]
    fn test_money_display() {
        let cell = CellValue::Money {
            currency: "USD".into(),
            min: 50000.0,
            max: 70000.5,
        };
        assert_eq!(cell.display(), "USD 50000 - 70000.5");
    }

    #[test]
    fn test_flag_labels_and_tones() {
        assert_eq!(CellValue::Flag(true, REMOTE).display(), "Remote");
        assert_eq!(CellValue::Flag(false, REMOTE).display(), "On-site");
        assert_eq!(REMOTE.off_tone.badge_class(), "badge badge--neutral");
    }

    #[test]
    fn test_missing_and_empty_lists() {
        assert_eq!(CellValue::text_or_missing(None).display(), NOT_AVAILABLE);
        assert_eq!(CellValue::List(vec![]).display(), "");
        assert_eq!(CellValue::Joined(vec![], "None").display(), "None");
        assert_eq!(
            CellValue::Joined(vec!["admin".into(), "editor".into()], "None").display(),
            "admin, editor"
        );
    }

    #[test]
    fn test_raw_keeps_unformatted_values() {
        assert_eq!(CellValue::Flag(true, REMOTE).raw(), RawCell::Bool(true));
        assert_eq!(CellValue::Missing.raw(), RawCell::Empty);
        assert_eq!(
            CellValue::Date("2024-03-15T10:00:00Z".into()).raw(),
            RawCell::Text("2024-03-15T10:00:00Z".into())
        );
        assert_eq!(
            CellValue::List(vec!["a".into(), "b".into()]).raw(),
            RawCell::Text(r#"["a","b"]"#.into())
        );
        let RawCell::Text(money) = (CellValue::Money {
            currency: "EUR".into(),
            min: 1.0,
            max: 2.0,
        })
        .raw() else {
            panic!("money exports as text");
        };
        let parsed: serde_json::Value = serde_json::from_str(&money).unwrap();
        assert_eq!(parsed["currency"], "EUR");
        assert_eq!(parsed["max"], 2.0);
    }

    #[test]
    fn test_compare_is_natural() {
        assert_eq!(
            CellValue::text("apple").compare(&CellValue::text("Banana")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Number(9.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Flag(false, REMOTE).compare(&CellValue::Flag(true, REMOTE)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Missing.compare(&CellValue::text("a")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::text("Same").compare(&CellValue::text("same")),
            Ordering::Equal
        );
    }
}
