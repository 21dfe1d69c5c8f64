//! Data model for machine-readable zone (MRZ) encoding.

pub mod descriptor;
pub mod error;
pub mod fields;
pub mod layout;
pub mod record;
pub mod reference;

pub use descriptor::{DocumentTypeDescriptor, FieldWidths, SpecialCheck, SubTypeSource};
pub use error::{MrzError, Result};
pub use fields::{CheckDigits, CheckField, EncodedFieldSet, FieldName, Placeholder};
pub use layout::Layout;
pub use record::{IdentityRecord, parse_date};
pub use reference::{RefEntry, ReferenceData};
