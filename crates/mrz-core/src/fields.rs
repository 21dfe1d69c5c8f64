//! Field building: record + descriptor -> encoded field set.

use chrono::NaiveDate;
use tracing::trace;

use mrz_model::{CheckField, DocumentTypeDescriptor, EncodedFieldSet, IdentityRecord};

use crate::check_digit::{apply_special_check, check_char, overall2, overall3};
use crate::normalize::normalize;

pub const DOC_TYPE_WIDTH: usize = 2;
pub const COUNTRY_WIDTH: usize = 3;
pub const SEX_WIDTH: usize = 1;
pub const DATE_WIDTH: usize = 6;
pub const SUB_TYPE_WIDTH: usize = 2;

/// Separator between primary and secondary identifier in the name field.
pub const NAME_SEPARATOR: &str = "<<";

const DATE_FORMAT: &str = "%y%m%d";

/// `YYMMDD` for a present date; an empty string (rendered as filler)
/// otherwise.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Raw, unnormalized name: `last<<first`.
pub fn compose_name(last_name: &str, first_name: &str) -> String {
    format!("{last_name}{NAME_SEPARATOR}{first_name}")
}

fn text(value: &str, width: usize) -> String {
    normalize(value, width, true)
}

/// Build the encoded field set for `record` under `descriptor`.
///
/// Every field is normalized to its width, per-field check digits are
/// computed (forced values from the descriptor win), both composite digits
/// are computed, and the descriptor's special check runs last.
pub fn build_fields(
    record: &IdentityRecord,
    descriptor: &DocumentTypeDescriptor,
) -> EncodedFieldSet {
    let widths = descriptor.widths();
    let name = compose_name(&record.last_name, &record.first_name);

    let mut fields = EncodedFieldSet {
        doc_type: text(&descriptor.code, DOC_TYPE_WIDTH),
        doc_number: text(&record.doc_number, widths.doc_number),
        birth_date: text(&format_date(record.birth_date), DATE_WIDTH),
        issue_country: text(&record.issue_country, COUNTRY_WIDTH),
        nationality: text(&record.nationality, COUNTRY_WIDTH),
        sex: text(&record.sex, SEX_WIDTH),
        expire_date: text(&format_date(record.expire_date), DATE_WIDTH),
        sub_type: text(&record.doc_sub_type, SUB_TYPE_WIDTH),
        name: text(&name, widths.name),
        opt_number: text(&record.opt_number, widths.opt_number),
        extra_number: text(&record.extra_number, widths.extra_number),
        check: Default::default(),
    };

    for check in [
        CheckField::DocNumber,
        CheckField::OptNumber,
        CheckField::BirthDate,
        CheckField::ExpireDate,
        CheckField::ExtraNumber,
    ] {
        let value = match descriptor.forced_check(check) {
            Some(forced) => forced,
            None => check
                .field()
                .map(|field| check_char(fields.field(field)))
                .unwrap_or('0'),
        };
        fields.check.set(check, value);
    }

    fields.check.overall2 = overall2(&fields);
    fields.check.overall3 = overall3(&fields);

    if let Some(special) = descriptor.special_check {
        trace!(doc_type = %descriptor.code, special = %special, "applying special check");
        apply_special_check(special, &mut fields);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrz_model::{Layout, SpecialCheck};

    fn smith() -> IdentityRecord {
        IdentityRecord {
            last_name: "SMITH".to_string(),
            first_name: "JOHN".to_string(),
            doc_number: "123456789".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            expire_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            issue_country: "USA".to_string(),
            nationality: "USA".to_string(),
            sex: "M".to_string(),
            doc_type: Some("P".to_string()),
            ..IdentityRecord::default()
        }
    }

    #[test]
    fn passport_fields() {
        let fields = build_fields(&smith(), &DocumentTypeDescriptor::new("P", "Passport"));
        assert_eq!(fields.doc_type, "P<");
        assert_eq!(fields.doc_number, "123456789");
        assert_eq!(fields.birth_date, "000101");
        assert_eq!(fields.expire_date, "300101");
        assert_eq!(fields.name, "SMITH<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(fields.opt_number, "<<<<<<<<<<<<<<");
        assert_eq!(fields.extra_number, "");
        assert_eq!(fields.sub_type, "<<");
        assert_eq!(fields.check.doc_number, '7');
        assert_eq!(fields.check.birth_date, '8');
        assert_eq!(fields.check.expire_date, '9');
        assert_eq!(fields.check.opt_number, '0');
        assert_eq!(fields.check.extra_number, '0');
        assert_eq!(fields.check.overall2, '6');
        assert_eq!(fields.check.overall3, '6');
    }

    #[test]
    fn missing_dates_become_filler() {
        let record = IdentityRecord {
            birth_date: None,
            expire_date: None,
            ..smith()
        };
        let fields = build_fields(&record, &DocumentTypeDescriptor::new("P", "Passport"));
        assert_eq!(fields.birth_date, "<<<<<<");
        assert_eq!(fields.expire_date, "<<<<<<");
        assert_eq!(fields.check.birth_date, '0');
    }

    #[test]
    fn empty_record_is_all_filler() {
        let fields = build_fields(
            &IdentityRecord::default(),
            &DocumentTypeDescriptor::new("P", "Passport"),
        );
        assert_eq!(fields.name, "<".repeat(39));
        assert_eq!(fields.doc_number, "<".repeat(9));
        assert_eq!(fields.check, Default::default());
    }

    #[test]
    fn forced_check_replaces_computed_digit() {
        let descriptor = DocumentTypeDescriptor::new("C1", "Permanent Resident Card")
            .with_extra_number_length(11)
            .with_opt_number_length(15)
            .with_name_length(30)
            .with_layout(Layout::Td1)
            .with_force_check(CheckField::DocNumber, '<');
        let record = IdentityRecord {
            opt_number: "AB1234".to_string(),
            extra_number: "9876543".to_string(),
            ..smith()
        };
        let fields = build_fields(&record, &descriptor);
        assert_eq!(fields.check.doc_number, '<');
        assert_eq!(fields.check.overall2, '5');
        assert_eq!(fields.check.overall3, '8');
    }

    #[test]
    fn special_checks_override_overall3() {
        let record = IdentityRecord {
            opt_number: "AB1234".to_string(),
            extra_number: "9876543".to_string(),
            doc_sub_type: "NY".to_string(),
            ..smith()
        };
        let edl = DocumentTypeDescriptor::new("ID", "Enhanced Driver License")
            .with_extra_number_length(8)
            .with_opt_number_length(15)
            .with_name_length(30)
            .with_layout(Layout::IdCard)
            .with_special_check(SpecialCheck::EnhancedDriverLicense);
        let fields = build_fields(&record, &edl);
        assert_eq!(fields.extra_number, "9876543<");
        assert_eq!(fields.sub_type, "NY");
        assert_eq!(fields.check.overall2, '4');
        assert_eq!(fields.check.overall3, '8');
    }

    #[test]
    fn widths_are_honored() {
        let record = IdentityRecord {
            doc_number: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
            ..smith()
        };
        let descriptor = DocumentTypeDescriptor::new("VB", "Border Crossing Card")
            .with_doc_number_length(14)
            .with_name_length(30);
        let fields = build_fields(&record, &descriptor);
        assert_eq!(fields.doc_number, "ABCDEFGHIJKLMN");
        assert_eq!(fields.name.len(), 30);
    }

    #[test]
    fn formats_two_digit_year_dates() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(1974, 8, 12)), "740812");
        assert_eq!(format_date(None), "");
    }
}
