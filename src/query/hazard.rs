//! Hazard classification vocabulary.

/// Hazard classes offered by the filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardTag {
    /// Corrosive.
    Korosif,
    /// Flammable.
    MudahTerbakar,
    /// Toxic.
    Beracun,
    /// Oxidizer.
    Oksidator,
}

impl HazardTag {
    /// All selectable tags, in selector order.
    pub const ALL: [HazardTag; 4] = [
        HazardTag::Korosif,
        HazardTag::MudahTerbakar,
        HazardTag::Beracun,
        HazardTag::Oksidator,
    ];

    /// Tag as it appears in a classification string.
    pub fn label(self) -> &'static str {
        match self {
            HazardTag::Korosif => "Korosif",
            HazardTag::MudahTerbakar => "Mudah Terbakar",
            HazardTag::Beracun => "Beracun",
            HazardTag::Oksidator => "Oksidator",
        }
    }

    /// English gloss of the tag.
    pub fn english(self) -> &'static str {
        match self {
            HazardTag::Korosif => "Corrosive",
            HazardTag::MudahTerbakar => "Flammable",
            HazardTag::Beracun => "Toxic",
            HazardTag::Oksidator => "Oxidizer",
        }
    }

    /// Look up a tag by its label or English gloss, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|tag| {
            tag.label().eq_ignore_ascii_case(value) || tag.english().eq_ignore_ascii_case(value)
        })
    }
}

/// Color code legend shown next to the filters.
pub const COLOR_LEGEND: [(&str, &str); 3] = [
    ("Merah", "Corrosive substances"),
    ("Biru", "Flammable substances"),
    ("Hijau", "Relatively safe substances"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_label_and_gloss() {
        assert_eq!(HazardTag::parse("korosif"), Some(HazardTag::Korosif));
        assert_eq!(HazardTag::parse("Flammable"), Some(HazardTag::MudahTerbakar));
        assert_eq!(HazardTag::parse(" mudah terbakar "), Some(HazardTag::MudahTerbakar));
        assert_eq!(HazardTag::parse("Explosive"), None);
    }
}
