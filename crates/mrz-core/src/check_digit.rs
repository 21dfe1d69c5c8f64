//! Weighted modulo-10 check digits (ICAO Doc 9303 Part 3, section 4.9).
//!
//! Each character maps to a value (digits to 0-9, `A`-`Z` to 10-35,
//! everything else including the filler to 0), is multiplied by a weight
//! cycling 7, 3, 1 and the sum is taken modulo 10.
//!
//! ```
//! use mrz_core::check_digit::check_digit;
//!
//! assert_eq!(check_digit("L898902C3"), 6);
//! assert_eq!(check_digit("740812"), 2);
//! assert_eq!(check_digit(""), 0);
//! ```

use mrz_model::{CheckField, EncodedFieldSet, FieldName, SpecialCheck};

use crate::normalize::FILLER;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of a character in the check-digit calculation.
pub fn char_value(ch: char) -> u32 {
    match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'A'..='Z' => ch as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Weight applied at `position` (0-based).
pub fn weight(position: usize) -> u32 {
    WEIGHTS[position % WEIGHTS.len()]
}

/// Check digit of `text`, in `0..=9`.
pub fn check_digit(text: &str) -> u8 {
    // reduced per step so input length cannot overflow the sum
    let digit = text
        .chars()
        .enumerate()
        .fold(0, |acc, (idx, ch)| (acc + char_value(ch) * weight(idx)) % 10);
    digit as u8
}

/// Check digit of `text` as the character placed in the MRZ.
pub fn check_char(text: &str) -> char {
    char::from(b'0' + check_digit(text))
}

/// Check character over the concatenation of `parts`.
pub fn composite(parts: &[&str]) -> char {
    check_char(&parts.concat())
}

/// Composite digit in the ICAO 2-line order: document number, birth date,
/// expiry date and optional number, each followed by its check digit.
pub fn overall2(fields: &EncodedFieldSet) -> char {
    composite(&[
        &fields.with_check(CheckField::DocNumber),
        &fields.with_check(CheckField::BirthDate),
        &fields.with_check(CheckField::ExpireDate),
        &fields.with_check(CheckField::OptNumber),
    ])
}

/// Composite digit in the ICAO 3-line order: document number with check,
/// optional number, birth and expiry dates with checks, extra number.
pub fn overall3(fields: &EncodedFieldSet) -> char {
    composite(&[
        &fields.with_check(CheckField::DocNumber),
        fields.field(FieldName::OptNumber),
        &fields.with_check(CheckField::BirthDate),
        &fields.with_check(CheckField::ExpireDate),
        fields.field(FieldName::ExtraNumber),
    ])
}

/// Recompute `overall3` using the field order of a special document type.
pub fn apply_special_check(special: SpecialCheck, fields: &mut EncodedFieldSet) {
    let filler = FILLER.to_string();
    let digit = match special {
        SpecialCheck::BorderCrossingCard => composite(&[
            fields.field(FieldName::OptNumber),
            &filler,
            fields.field(FieldName::DocNumber),
            &fields.with_check(CheckField::BirthDate),
            &fields.with_check(CheckField::ExpireDate),
            fields.field(FieldName::ExtraNumber),
        ]),
        SpecialCheck::EnhancedDriverLicense => composite(&[
            &fields.with_check(CheckField::DocNumber),
            fields.field(FieldName::OptNumber),
            &fields.with_check(CheckField::BirthDate),
            &fields.with_check(CheckField::ExpireDate),
            fields.field(FieldName::ExtraNumber),
            fields.field(FieldName::SubType),
            &filler,
        ]),
        SpecialCheck::AlienRegistration => composite(&[
            &fields.with_check(CheckField::DocNumber),
            fields.field(FieldName::OptNumber),
            &fields.with_check(CheckField::BirthDate),
            &fields.with_check(CheckField::ExpireDate),
            &fields.with_check(CheckField::ExtraNumber),
        ]),
    };
    fields.check.overall3 = digit;
}
