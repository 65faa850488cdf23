//! Numbering plan backed by the `phonenumber` crate's libphonenumber
//! metadata, with carriers, time zones and name overrides from a
//! [`RegionTable`].

use super::region_names::region_name;
use super::region_table::RegionTable;
use super::traits::NumberingPlan;
use crate::domain::{CallingCode, NormalizedNumber, ParsedNumber};
use crate::error::{ParseError, ParseResult, PlanDataResult};
use crate::models::{LineType, NumberFormat};
use phonenumber::metadata::{Metadata, DATABASE};
use phonenumber::{Mode, PhoneNumber, Type};

/// Shortest national significant number libphonenumber will tokenize.
const MIN_NATIONAL_LENGTH: usize = 2;

/// Longest national significant number libphonenumber will tokenize.
const MAX_NATIONAL_LENGTH: usize = 17;

/// Region id the metadata uses for non-geographic calling codes (+800, +882, ...).
const NON_GEOGRAPHIC: &str = "001";

/// Possible national lengths of a region: the general descriptor's, or the
/// union over every diallable number type when the general one lists none.
fn possible_lengths(meta: &Metadata) -> Vec<usize> {
    let descriptors = meta.descriptors();
    let general = descriptors.general().possible_length();

    let mut lengths: Vec<usize> = if general.is_empty() {
        [
            descriptors.fixed_line(),
            descriptors.mobile(),
            descriptors.toll_free(),
            descriptors.premium_rate(),
            descriptors.shared_cost(),
            descriptors.personal_number(),
            descriptors.voip(),
            descriptors.pager(),
            descriptors.uan(),
            descriptors.voicemail(),
        ]
        .into_iter()
        .flatten()
        .flat_map(|descriptor| descriptor.possible_length().iter().map(|&l| l as usize))
        .collect()
    } else {
        general.iter().map(|&l| l as usize).collect()
    };
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// Union of possible lengths across every region sharing `calling_code`.
fn lengths_for_code(calling_code: u16) -> Vec<usize> {
    let mut lengths: Vec<usize> = DATABASE
        .by_code(&calling_code)
        .unwrap_or_default()
        .into_iter()
        .flat_map(possible_lengths)
        .collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// The only region of a calling code, or the one flagged as its main country.
fn main_region(calling_code: u16) -> Option<String> {
    let regions = DATABASE.by_code(&calling_code)?;
    let main = match regions.as_slice() {
        [only] => Some(*only),
        _ => regions
            .iter()
            .copied()
            .find(|meta| meta.is_main_country_for_code()),
    };
    main.map(|meta| meta.id())
        .filter(|id| *id != NON_GEOGRAPHIC)
        .map(str::to_string)
}

/// Default numbering plan.
pub struct LibPhonenumberPlan {
    regions: RegionTable,
}

impl LibPhonenumberPlan {
    /// Create a plan over the given region table.
    pub fn new(regions: RegionTable) -> Self {
        Self { regions }
    }

    /// Create a plan over the region table compiled into the binary.
    pub fn bundled() -> PlanDataResult<Self> {
        Ok(Self::new(RegionTable::bundled()?))
    }

    /// Parse with the library, turning its panics into errors.
    fn library_parse(input: &str) -> Result<PhoneNumber, String> {
        let owned = input.to_string();

        // Catch panics because the phonenumber crate has some questionable unwraps
        match std::panic::catch_unwind(move || phonenumber::parse(None, owned)) {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => Err(err.to_string()),
            Err(_) => {
                tracing::error!(input = %input, "phonenumber crate panicked while parsing");
                Err("numbering plan library panicked".to_string())
            }
        }
    }

    /// Re-materialize the library's view of an already parsed number.
    fn library_number(&self, number: &ParsedNumber) -> Option<PhoneNumber> {
        Self::library_parse(&number.e164()).ok()
    }

    /// Region the number was attributed to, else the calling code's main region.
    fn region_id(number: &ParsedNumber) -> Option<String> {
        number
            .region()
            .map(str::to_string)
            .or_else(|| main_region(number.calling_code().value()))
    }

    /// Possible lengths for the number's own region when the metadata knows
    /// it, otherwise for its whole calling code.
    fn lengths_for(number: &ParsedNumber) -> Vec<usize> {
        let calling_code = number.calling_code().value();
        number
            .region()
            .and_then(|id| DATABASE.by_id(id))
            .filter(|meta| meta.country_code() == calling_code)
            .map(possible_lengths)
            .unwrap_or_else(|| lengths_for_code(calling_code))
    }

    fn line_type_from(kind: Type) -> LineType {
        match kind {
            Type::Mobile => LineType::Mobile,
            Type::FixedLine => LineType::FixedLine,
            Type::FixedLineOrMobile => LineType::FixedLineOrMobile,
            Type::TollFree => LineType::TollFree,
            Type::PremiumRate => LineType::PremiumRate,
            Type::SharedCost => LineType::SharedCost,
            Type::Voip => LineType::Voip,
            Type::PersonalNumber => LineType::PersonalNumber,
            Type::Pager => LineType::Pager,
            Type::Uan => LineType::Uan,
            Type::Voicemail => LineType::Voicemail,
            _ => LineType::Unknown,
        }
    }

    fn mode_for(format: NumberFormat) -> Mode {
        match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
            NumberFormat::Rfc3966 => Mode::Rfc3966,
        }
    }
}

impl NumberingPlan for LibPhonenumberPlan {
    fn parse(&self, number: &NormalizedNumber) -> ParseResult<ParsedNumber> {
        let input = number.as_str();
        let rejected = |reason: String| ParseError::Rejected {
            input: input.to_string(),
            reason,
        };

        let library = Self::library_parse(input).map_err(rejected)?;

        let code_value = library.code().value();
        let code_digits = code_value.to_string();
        let e164 = library.format().mode(Mode::E164).to_string();
        let national = e164
            .strip_prefix('+')
            .and_then(|digits| digits.strip_prefix(code_digits.as_str()))
            .filter(|national| !national.is_empty())
            .ok_or_else(|| rejected(format!("unexpected E.164 rendering {}", e164)))?
            .to_string();

        let min_length = lengths_for_code(code_value)
            .first()
            .copied()
            .unwrap_or(MIN_NATIONAL_LENGTH);
        if national.len() < min_length {
            return Err(ParseError::TooShort {
                calling_code: code_value,
                input: input.to_string(),
            });
        }
        if national.len() > MAX_NATIONAL_LENGTH {
            return Err(ParseError::TooLong(input.to_string()));
        }

        let calling_code = CallingCode::new(code_value).map_err(|e| rejected(e.to_string()))?;
        let region = library.country().id().map(|id| format!("{:?}", id));

        ParsedNumber::new(calling_code, national, region).map_err(|e| rejected(e.to_string()))
    }

    fn is_valid(&self, number: &ParsedNumber) -> bool {
        self.library_number(number)
            .map(|library| phonenumber::is_valid(&library))
            .unwrap_or(false)
    }

    fn is_possible(&self, number: &ParsedNumber) -> bool {
        let length = number.national_number().len();
        let lengths = Self::lengths_for(number);
        if lengths.is_empty() {
            return (MIN_NATIONAL_LENGTH..=MAX_NATIONAL_LENGTH).contains(&length);
        }
        lengths.contains(&length)
    }

    fn line_type(&self, number: &ParsedNumber) -> LineType {
        self.library_number(number)
            .map(|library| Self::line_type_from(library.number_type(&DATABASE)))
            .unwrap_or_default()
    }

    fn region_label(&self, number: &ParsedNumber) -> String {
        let code = number.calling_code().value();
        Self::region_id(number)
            .and_then(|id| {
                self.regions
                    .name(&id, code)
                    .or_else(|| region_name(&id))
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }

    fn carrier_label(&self, number: &ParsedNumber) -> String {
        let code = number.calling_code().value();
        Self::region_id(number)
            .and_then(|id| {
                self.regions
                    .carrier(&id, code, number.national_number())
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String> {
        let code = number.calling_code().value();
        Self::region_id(number)
            .map(|id| self.regions.time_zones(&id, code, number.national_number()))
            .unwrap_or_default()
    }

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String {
        if format == NumberFormat::E164 {
            return number.e164();
        }
        match self.library_number(number) {
            Some(library) => library.format().mode(Self::mode_for(format)).to_string(),
            None => match format {
                NumberFormat::Rfc3966 => format!("tel:{}", number.e164()),
                _ => number.e164(),
            },
        }
    }

    fn version(&self) -> String {
        format!("libphonenumber+regions-{}", self.regions.version())
    }
}
