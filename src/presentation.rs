//! View models for rendering records.
//!
//! Each record is classified into exactly one [`HazardStyle`] by walking
//! [`STYLE_RULES`] in order; the first rule whose predicate holds wins, and
//! records matching no rule are [`HazardStyle::Safe`].
//!
//! The table is a display policy. A record classified both corrosive and toxic
//! renders as danger on the corrosive rule alone.

use crate::catalog::ChemicalRecord;
use crate::query::HazardTag;
use std::fmt;

/// Visual treatment of a record's hazard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardStyle {
    /// Corrosive substances.
    Danger,
    /// Flammable substances.
    Warning,
    /// Everything else.
    Safe,
}

impl HazardStyle {
    /// Short name of the category.
    pub fn name(self) -> &'static str {
        match self {
            HazardStyle::Danger => "danger",
            HazardStyle::Warning => "warning",
            HazardStyle::Safe => "safe",
        }
    }

    /// Icon shown in front of the hazard description.
    pub fn icon(self) -> &'static str {
        match self {
            HazardStyle::Danger => "🚨",
            HazardStyle::Warning => "🔥",
            HazardStyle::Safe => "🛡️",
        }
    }
}

/// One row of the styling decision table.
#[derive(Clone, Copy)]
pub struct StyleRule {
    /// Test applied to the classification string.
    pub predicate: fn(&str) -> bool,
    /// Style assigned when the predicate holds.
    pub style: HazardStyle,
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRule")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

fn is_corrosive(classification: &str) -> bool {
    classification.contains(HazardTag::Korosif.label())
}

fn is_flammable(classification: &str) -> bool {
    classification.contains(HazardTag::MudahTerbakar.label())
}

/// Styling rules in priority order.
pub const STYLE_RULES: &[StyleRule] = &[
    StyleRule {
        predicate: is_corrosive,
        style: HazardStyle::Danger,
    },
    StyleRule {
        predicate: is_flammable,
        style: HazardStyle::Warning,
    },
];

/// Style for a classification string.
pub fn classify(classification: &str) -> HazardStyle {
    STYLE_RULES
        .iter()
        .find(|rule| (rule.predicate)(classification))
        .map_or(HazardStyle::Safe, |rule| rule.style)
}

/// Everything the renderer needs for one record.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    record: &'a ChemicalRecord,
    style: HazardStyle,
}

impl<'a> RecordView<'a> {
    /// Build the view for a record.
    pub fn new(record: &'a ChemicalRecord) -> Self {
        Self {
            record,
            style: classify(&record.classification),
        }
    }

    /// `Name (Formula)`.
    pub fn title(&self) -> String {
        self.record.title()
    }

    /// Styling category.
    pub fn style(&self) -> HazardStyle {
        self.style
    }

    /// Underlying record with raw field values.
    pub fn record(&self) -> &'a ChemicalRecord {
        self.record
    }

    /// Color code, or `-` when the source did not provide one.
    pub fn color_code(&self) -> &'a str {
        non_blank(&self.record.color_code)
    }

    /// Pictogram reference, or `-` when absent.
    pub fn pictogram_url(&self) -> &'a str {
        non_blank(&self.record.pictogram_url)
    }

    /// Plain-text rendering used for clipboard copies and the `list` command.
    pub fn to_plain_text(&self) -> String {
        let record = self.record;
        let mut text = format!("{}\n", self.title());
        text.push_str(&format!("Classification: {}\n", record.classification));
        text.push_str(&format!(
            "Primary hazard [{}]: {}\n",
            self.style.name(),
            record.hazard_description
        ));
        text.push_str(&format!("Storage: {}\n", record.storage));
        text.push_str(&format!("Safe handling: {}\n", record.handling));
        text.push_str(&format!("First aid: {}\n", record.first_aid));
        text.push_str(&format!("Color code: {}\n", self.color_code()));
        text.push_str(&format!("GHS pictogram: {}\n", self.pictogram_url()));
        text
    }
}

fn non_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinSource, CatalogSource};

    #[test]
    fn corrosive_takes_priority() {
        assert_eq!(classify("Korosif, Oksidator"), HazardStyle::Danger);
        assert_eq!(classify("Mudah Terbakar, Korosif"), HazardStyle::Danger);
        assert_eq!(classify("Korosif, Beracun"), HazardStyle::Danger);
    }

    #[test]
    fn flammable_is_warning() {
        assert_eq!(classify("Mudah Terbakar, Beracun"), HazardStyle::Warning);
    }

    #[test]
    fn other_classes_are_safe() {
        assert_eq!(classify("Beracun"), HazardStyle::Safe);
        assert_eq!(classify("Oksidator"), HazardStyle::Safe);
        assert_eq!(classify(""), HazardStyle::Safe);
    }

    #[test]
    fn builtin_records_get_expected_styles() {
        let catalog = BuiltinSource.load_catalog().unwrap();
        let styles: Vec<HazardStyle> = catalog
            .records()
            .iter()
            .map(|r| RecordView::new(r).style())
            .collect();
        assert_eq!(
            styles,
            vec![HazardStyle::Danger, HazardStyle::Danger, HazardStyle::Warning]
        );
    }

    #[test]
    fn plain_text_lists_every_section() {
        let catalog = BuiltinSource.load_catalog().unwrap();
        let text = RecordView::new(&catalog.records()[1]).to_plain_text();
        assert!(text.starts_with("Natrium Hidroksida (NaOH) (NaOH)\n"));
        assert!(text.contains("Primary hazard [danger]: Luka bakar kulit"));
        assert!(text.contains("Color code: Merah"));
        assert!(text.contains("Hazard_C.png"));
    }

    #[test]
    fn missing_presentation_fields_show_dash() {
        let catalog = BuiltinSource.load_catalog().unwrap();
        let mut record = catalog.records()[0].clone();
        record.color_code.clear();
        record.pictogram_url.clear();
        let view = RecordView::new(&record);
        assert_eq!(view.color_code(), "-");
        assert_eq!(view.pictogram_url(), "-");
    }
}
