//! Classification output: line types, renderings and the result record.

use crate::domain::{NormalizedNumber, ParsedNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line category of a number, resolved from numbering-plan ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    #[default]
    Unknown,
}

impl LineType {
    /// Human-readable label, e.g. "Fixed Line or Mobile".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::FixedLine => "Fixed Line",
            Self::FixedLineOrMobile => "Fixed Line or Mobile",
            Self::TollFree => "Toll Free",
            Self::PremiumRate => "Premium Rate",
            Self::SharedCost => "Shared Cost",
            Self::Voip => "VOIP",
            Self::PersonalNumber => "Personal Number",
            Self::Pager => "Pager",
            Self::Uan => "UAN",
            Self::Voicemail => "Voicemail",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rendering styles for a parsed number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// `+14155552671`
    E164,
    /// `+1 415-555-2671`
    International,
    /// `(415) 555-2671`
    National,
    /// `tel:+1-415-555-2671`
    Rfc3966,
}

impl FromStr for NumberFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e164" | "e.164" => Ok(Self::E164),
            "international" | "intl" => Ok(Self::International),
            "national" => Ok(Self::National),
            "rfc3966" | "tel" => Ok(Self::Rfc3966),
            other => Err(format!(
                "Unknown number format '{}': expected e164, international, national or rfc3966",
                other
            )),
        }
    }
}

/// A number rendered in every supported format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormattedNumber {
    pub e164: String,
    pub international: String,
    pub national: String,
    pub rfc3966: String,
}

impl FormattedNumber {
    /// Pick one rendering.
    pub fn get(&self, format: NumberFormat) -> &str {
        match format {
            NumberFormat::E164 => &self.e164,
            NumberFormat::International => &self.international,
            NumberFormat::National => &self.national,
            NumberFormat::Rfc3966 => &self.rfc3966,
        }
    }
}

/// Facts derived from a parsed number.
///
/// Labels are empty strings and `time_zones` is empty when the numbering plan
/// has nothing for the number; none of these fields signal failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassificationResult {
    /// Normalized form the parse stage consumed, when classification
    /// started from raw input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedNumber>,

    /// Calling code, national number and region
    pub parsed: ParsedNumber,

    /// Number falls in an assigned range for its region
    pub is_valid: bool,

    /// Length and shape are plausible for the calling code
    pub is_possible: bool,

    pub line_type: LineType,

    /// Country or region name, e.g. "United States"
    pub country_label: String,

    /// Carrier the number range was allocated to, empty when unknown
    pub carrier_label: String,

    /// IANA zone identifiers, most specific first
    pub time_zones: Vec<String>,

    pub formats: FormattedNumber,
}

impl ClassificationResult {
    /// Whether the default calling code was assumed for the raw input.
    pub fn default_code_applied(&self) -> bool {
        self.normalized
            .as_ref()
            .is_some_and(NormalizedNumber::default_code_applied)
    }

    /// Country label, or "Unknown" when the plan had none.
    pub fn country_or_unknown(&self) -> &str {
        if self.country_label.is_empty() {
            "Unknown"
        } else {
            &self.country_label
        }
    }

    /// Carrier label, or "Unknown" when the plan had none.
    pub fn carrier_or_unknown(&self) -> &str {
        if self.carrier_label.is_empty() {
            "Unknown"
        } else {
            &self.carrier_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_type_labels() {
        assert_eq!(LineType::FixedLineOrMobile.label(), "Fixed Line or Mobile");
        assert_eq!(LineType::Voip.to_string(), "VOIP");
        assert_eq!(LineType::default(), LineType::Unknown);
    }

    #[test]
    fn test_line_type_serialization() {
        let json = serde_json::to_string(&LineType::FixedLineOrMobile).unwrap();
        assert_eq!(json, "\"fixed_line_or_mobile\"");

        let parsed: LineType = serde_json::from_str("\"toll_free\"").unwrap();
        assert_eq!(parsed, LineType::TollFree);
    }

    #[test]
    fn test_number_format_from_str() {
        assert_eq!("E164".parse::<NumberFormat>().unwrap(), NumberFormat::E164);
        assert_eq!(
            " international ".parse::<NumberFormat>().unwrap(),
            NumberFormat::International
        );
        assert_eq!("tel".parse::<NumberFormat>().unwrap(), NumberFormat::Rfc3966);
        assert!("pretty".parse::<NumberFormat>().is_err());
    }

    #[test]
    fn test_formatted_number_get() {
        let formatted = FormattedNumber {
            e164: "+14155552671".to_string(),
            international: "+1 415-555-2671".to_string(),
            national: "(415) 555-2671".to_string(),
            rfc3966: "tel:+1-415-555-2671".to_string(),
        };
        assert_eq!(formatted.get(NumberFormat::National), "(415) 555-2671");
        assert_eq!(formatted.get(NumberFormat::E164), "+14155552671");
    }
}
