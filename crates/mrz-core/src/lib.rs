pub mod check_digit;
pub mod encoder;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod render;

pub use check_digit::{apply_special_check, check_char, check_digit, overall2, overall3};
pub use encoder::{EncodedMrz, OutputMode, encode};
pub use error::RenderError;
pub use fields::{build_fields, compose_name, format_date};
pub use normalize::{FILLER, normalize, transliterate};
pub use render::{Template, render};
