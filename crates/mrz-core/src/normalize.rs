//! Field normalization: transliteration, filler collapsing and padding.
//!
//! Transliterations follow ICAO Doc 9303 Part 3, section 6 (recommended
//! transliterations of Latin characters). Multi-character expansions such
//! as `Å` -> `AA` and `Ü` -> `UE` are the ICAO forms, not Unicode
//! decompositions.
//!
//! # Example
//!
//! ```
//! use mrz_core::normalize::normalize;
//!
//! assert_eq!(normalize("Müller", 10, true), "MUELLER<<<");
//! assert_eq!(normalize("van der-Berg", 12, true), "VAN<DER<BERG");
//! assert_eq!(normalize("O", 3, false), "O&lt;&lt;");
//! ```

use quick_xml::escape::escape;

/// Padding character of every MRZ field.
pub const FILLER: char = '<';

/// Ordered transliteration rules applied after uppercasing.
///
/// The groups are disjoint and every replacement is plain ASCII, so a
/// single pass over the input is equivalent to applying the rules in turn.
const TRANSLITERATIONS: &[(&[char], &str)] = &[
    (
        &['\u{C0}', '\u{C1}', '\u{C2}', '\u{C3}', '\u{100}', '\u{102}', '\u{104}'],
        "A",
    ),
    (&['\u{C5}'], "AA"),
    (&['\u{C4}', '\u{C6}'], "AE"),
    (&['\u{C7}', '\u{106}', '\u{108}', '\u{10A}', '\u{10C}'], "C"),
    (&['\u{10E}', '\u{110}', '\u{D0}'], "D"),
    (
        &[
            '\u{C8}', '\u{C9}', '\u{CA}', '\u{CB}', '\u{112}', '\u{114}', '\u{116}', '\u{118}',
            '\u{11A}',
        ],
        "E",
    ),
    (&['\u{11C}', '\u{11E}', '\u{120}', '\u{122}'], "G"),
    (&['\u{124}', '\u{126}'], "H"),
    (
        &[
            '\u{CC}', '\u{CD}', '\u{CE}', '\u{CF}', '\u{128}', '\u{12A}', '\u{12C}', '\u{12E}',
            '\u{130}',
        ],
        "I",
    ),
    (&['\u{132}'], "IJ"),
    (&['\u{134}'], "J"),
    (&['\u{136}'], "K"),
    (&['\u{139}', '\u{13B}', '\u{13D}', '\u{13F}', '\u{141}'], "L"),
    (&['\u{D1}', '\u{143}', '\u{145}', '\u{147}', '\u{14B}'], "N"),
    (
        &['\u{D2}', '\u{D3}', '\u{D4}', '\u{D5}', '\u{14C}', '\u{14E}', '\u{150}'],
        "O",
    ),
    (&['\u{D6}', '\u{D8}', '\u{152}'], "OE"),
    (&['\u{154}', '\u{156}', '\u{158}'], "R"),
    (&['\u{15A}', '\u{15C}', '\u{15E}', '\u{160}'], "S"),
    (&['\u{DF}'], "SS"),
    (&['\u{162}', '\u{164}', '\u{166}'], "T"),
    (&['\u{FE}', '\u{DE}'], "TH"),
    (
        &[
            '\u{D9}', '\u{DA}', '\u{DB}', '\u{168}', '\u{16A}', '\u{16C}', '\u{16E}', '\u{170}',
            '\u{172}',
        ],
        "U",
    ),
    (&['\u{DC}'], "UE"),
    (&['\u{174}'], "W"),
    (&['\u{DD}', '\u{176}', '\u{178}'], "Y"),
    (&['\u{179}', '\u{17B}', '\u{17D}'], "Z"),
];

/// ICAO transliteration of a single character, if one is defined.
pub fn transliterate_char(ch: char) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(chars, _)| chars.contains(&ch))
        .map(|(_, replacement)| *replacement)
}

/// Uppercase `text` and replace accented Latin letters with their ICAO
/// ASCII transliteration. Characters without a rule pass through.
pub fn transliterate(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len());
    for ch in upper.chars() {
        match transliterate_char(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '-' | '\\')
}

fn is_mrz_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == FILLER
}

/// Collapse each run of separators to one filler and drop every character
/// outside `[A-Z0-9<]`.
fn collapse_and_strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator_run = false;
    for ch in text.chars() {
        if is_separator(ch) {
            if !in_separator_run {
                out.push(FILLER);
                in_separator_run = true;
            }
            continue;
        }
        in_separator_run = false;
        if is_mrz_char(ch) {
            out.push(ch);
        }
    }
    out
}

/// Truncate or right-pad an ASCII string with filler to exactly `width`.
pub fn fit_width(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text = text.chars().take(width).collect();
    } else {
        text.extend(std::iter::repeat_n(FILLER, width - len));
    }
    text
}

/// Normalize raw text into a fixed-width MRZ field.
///
/// Input is uppercased, transliterated, separator runs (space, hyphen,
/// backslash) become a single `<`, remaining characters outside
/// `[A-Z0-9<]` are dropped, and the result is truncated or padded to
/// `width`. With `text_only == false` every `<` is escaped as `&lt;` for
/// embedding in markup.
pub fn normalize(text: &str, width: usize, text_only: bool) -> String {
    let field = fit_width(collapse_and_strip(&transliterate(text)), width);
    if text_only {
        field
    } else {
        escape(field.as_str()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_icao_digraphs() {
        assert_eq!(normalize("MÜLLER", 10, true), "MUELLER<<<");
        assert_eq!(normalize("Åsa", 4, true), "AASA");
        assert_eq!(normalize("Ærø", 5, true), "AEROE");
        assert_eq!(normalize("Œuvre", 6, true), "OEUVRE");
        assert_eq!(normalize("Straße", 7, true), "STRASSE");
        assert_eq!(normalize("þór", 4, true), "THOR");
        assert_eq!(normalize("Ĳssel", 6, true), "IJSSEL");
    }

    #[test]
    fn single_letter_transliterations() {
        assert_eq!(normalize("Çağlar", 6, true), "CAGLAR");
        assert_eq!(normalize("Łódź", 4, true), "LODZ");
        assert_eq!(normalize("Ñúñez", 5, true), "NUNEZ");
        assert_eq!(normalize("Dvořák", 6, true), "DVORAK");
        assert_eq!(normalize("Ýŷ", 2, true), "YY");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(
            normalize("VAN DER-BERG", 20, true),
            "VAN<DER<BERG<<<<<<<<"
        );
        assert_eq!(normalize("A - B", 5, true), "A<B<<");
        assert_eq!(normalize("A\\B", 3, true), "A<B");
    }

    #[test]
    fn dropped_characters_split_separator_runs() {
        assert_eq!(normalize("A -.- B", 6, true), "A<<B<<");
    }

    #[test]
    fn strips_unmapped_characters() {
        assert_eq!(normalize("O'Neil, Jr.", 10, true), "ONEIL<JR<<");
        assert_eq!(normalize("李 Li", 4, true), "<LI<");
    }

    #[test]
    fn truncates_to_width() {
        assert_eq!(normalize("ABCDEFGHIJ", 4, true), "ABCD");
        assert_eq!(normalize("ABC", 0, true), "");
        assert_eq!(normalize("", 3, true), "<<<");
    }

    #[test]
    fn markup_mode_escapes_filler() {
        assert_eq!(normalize("AB", 4, false), "AB&lt;&lt;");
        assert_eq!(normalize("AB", 2, false), "AB");
    }

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("AB".to_string(), 4), "AB<<");
        assert_eq!(fit_width("ABCDEF".to_string(), 3), "ABC");
    }
}
