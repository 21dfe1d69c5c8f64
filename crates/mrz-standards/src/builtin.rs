#![deny(unsafe_code)]

//! US travel and identity documents known to the encoder.

use mrz_model::{CheckField, DocumentTypeDescriptor, Layout, SpecialCheck, SubTypeSource};

const PETITION_NO: &str = "Petition no.";
const VISA_NO: &str = "Visa no.";
const PASS_ID: &str = "PASS ID";

fn travel_document(code: &str, name: &str) -> DocumentTypeDescriptor {
    DocumentTypeDescriptor::new(code, name).with_opt_number_label(PETITION_NO)
}

fn visa(code: &str, name: &str) -> DocumentTypeDescriptor {
    DocumentTypeDescriptor::new(code, name)
        .with_opt_number_label(VISA_NO)
        .with_opt_number_length(14)
        .with_sub_type_source(SubTypeSource::VisaClasses)
        .with_layout(Layout::Visa)
}

/// Three-line card with the 9/11/15/30 widths shared by most TD1 types.
fn card(code: &str, name: &str) -> DocumentTypeDescriptor {
    DocumentTypeDescriptor::new(code, name)
        .with_extra_number_length(11)
        .with_opt_number_length(15)
        .with_name_length(30)
        .with_layout(Layout::Td1)
}

fn permanent_resident_card(code: &str) -> DocumentTypeDescriptor {
    card(code, "Permanent Resident Card")
        .with_opt_number_label(PETITION_NO)
        .with_force_check(CheckField::DocNumber, '<')
}

fn alien_registration_card(code: &str) -> DocumentTypeDescriptor {
    DocumentTypeDescriptor::new(code, "Alien Registration Card 1998")
        .with_extra_number_length(13)
        .with_opt_number_length(15)
        .with_name_length(30)
        .with_layout(Layout::AlienRegistration)
        .with_hidden_nationality()
        .with_force_check(CheckField::DocNumber, '<')
        .with_special_check(SpecialCheck::AlienRegistration)
}

/// Built-in descriptors in presentation order. Sub-type lists are filled
/// from reference data when the catalog is built.
pub fn builtin_descriptors() -> Vec<DocumentTypeDescriptor> {
    vec![
        DocumentTypeDescriptor::new("P", "Passport"),
        travel_document("PR", "Re-entry Permit"),
        travel_document("TR", "Re-entry Permit 2010"),
        travel_document("PT", "Refugee Travel Document"),
        travel_document("TP", "Refugee Travel Document 2010"),
        visa("VN", "Visa Non-Immigrant"),
        visa("VI", "Visa Immigrant"),
        DocumentTypeDescriptor::new("VB", "Laser Visa/Border Crossing Card")
            .with_doc_number_length(14)
            .with_extra_number_length(11)
            .with_opt_number_length(10)
            .with_name_length(30)
            .with_layout(Layout::BorderCrossing)
            .with_special_check(SpecialCheck::BorderCrossingCard),
        card("IP", "Passport Card"),
        card("IF", "Fast Card").with_opt_number_label(PASS_ID),
        DocumentTypeDescriptor::new("ID", "Enhanced Driver License")
            .with_extra_number_length(8)
            .with_opt_number_length(15)
            .with_name_length(30)
            .with_layout(Layout::IdCard)
            .with_sub_type_source(SubTypeSource::States)
            .with_special_check(SpecialCheck::EnhancedDriverLicense),
        card("IG", "Global Entry Card").with_opt_number_label(PASS_ID),
        card("IN", "Nexus Card").with_opt_number_label(PASS_ID),
        card("IS", "Sentri Card").with_opt_number_label(PASS_ID),
        permanent_resident_card("C1"),
        permanent_resident_card("C2"),
        alien_registration_card("A1"),
        alien_registration_card("A2"),
        card("IA", "Employment Authorization Card").with_opt_number_label(PETITION_NO),
    ]
}
