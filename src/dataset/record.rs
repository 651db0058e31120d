//! Record type: one row of the metadata table

use csv::StringRecord;
use serde_json::Value;

/// Column holding the stored relative image path
pub const IMAGE_PATH_COLUMN: &str = "image_path";

/// Names of the optional text columns, in display order
pub const TEXT_COLUMNS: [&str; 7] = [
    "caption",
    "subset",
    "split",
    "pathology",
    "roi_text",
    "noisy_text",
    "corrected_text",
];

/// The row as it was read, kept so export reproduces it unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawRow {
    Csv(StringRecord),
    JsonLine(String),
}

/// Optional text fields of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub caption: Option<String>,
    pub subset: Option<String>,
    pub split: Option<String>,
    pub pathology: Option<String>,
    pub roi_text: Option<String>,
    pub noisy_text: Option<String>,
    pub corrected_text: Option<String>,
}

impl RecordFields {
    /// Build fields by looking each column up by name
    pub(crate) fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            caption: get("caption"),
            subset: get("subset"),
            split: get("split"),
            pathology: get("pathology"),
            roi_text: get("roi_text"),
            noisy_text: get("noisy_text"),
            corrected_text: get("corrected_text"),
        }
    }

    /// Build fields from a JSON object; non-string values keep their JSON text
    pub(crate) fn from_json(object: &serde_json::Map<String, Value>) -> Self {
        let text = |name: &str| match object.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self {
            caption: text("caption"),
            subset: text("subset"),
            split: text("split"),
            pathology: text("pathology"),
            roi_text: text("roi_text"),
            noisy_text: text("noisy_text"),
            corrected_text: text("corrected_text"),
        }
    }

    /// Column name and value pairs in display order
    #[must_use]
    pub fn labeled(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("caption", self.caption.as_deref()),
            ("subset", self.subset.as_deref()),
            ("split", self.split.as_deref()),
            ("pathology", self.pathology.as_deref()),
            ("roi_text", self.roi_text.as_deref()),
            ("noisy_text", self.noisy_text.as_deref()),
            ("corrected_text", self.corrected_text.as_deref()),
        ]
    }
}

/// One immutable row of the metadata table
///
/// A record's identity is its position in the loaded table, which never
/// changes for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    index: usize,
    image_path: String,
    fields: RecordFields,
    pub(crate) raw: RawRow,
}

impl Record {
    pub(crate) const fn new(
        index: usize,
        image_path: String,
        fields: RecordFields,
        raw: RawRow,
    ) -> Self {
        Self {
            index,
            image_path,
            fields,
            raw,
        }
    }

    /// Position of the record in the loaded table
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Image path as stored in the table (relative to the image directory)
    #[must_use]
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Optional text fields
    #[must_use]
    pub const fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Caption, if present
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.fields.caption.as_deref()
    }
}
