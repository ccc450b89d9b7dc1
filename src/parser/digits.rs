//! Unicode decimal digit values
//!
//! Every decimal digit set (general category `Nd`) is a run of ten
//! consecutive code points starting at its zero, so a sorted table of zeros
//! is enough to map any digit to its value. Only the Basic Multilingual Plane
//! is covered: input is read one UTF-16 unit at a time upstream, so digits
//! outside it never arrived as single characters.

/// Code point of the zero of each BMP decimal digit set, ascending
const DIGIT_ZEROS: [u32; 37] = [
    0x0030, // ASCII
    0x0660, // Arabic-Indic
    0x06F0, // Extended Arabic-Indic
    0x07C0, // NKo
    0x0966, // Devanagari
    0x09E6, // Bengali
    0x0A66, // Gurmukhi
    0x0AE6, // Gujarati
    0x0B66, // Oriya
    0x0BE6, // Tamil
    0x0C66, // Telugu
    0x0CE6, // Kannada
    0x0D66, // Malayalam
    0x0DE6, // Sinhala Lith
    0x0E50, // Thai
    0x0ED0, // Lao
    0x0F20, // Tibetan
    0x1040, // Myanmar
    0x1090, // Myanmar Shan
    0x17E0, // Khmer
    0x1810, // Mongolian
    0x1946, // Limbu
    0x19D0, // New Tai Lue
    0x1A80, // Tai Tham Hora
    0x1A90, // Tai Tham Tham
    0x1B50, // Balinese
    0x1BB0, // Sundanese
    0x1C40, // Lepcha
    0x1C50, // Ol Chiki
    0xA620, // Vai
    0xA8D0, // Saurashtra
    0xA900, // Kayah Li
    0xA9D0, // Javanese
    0xA9F0, // Myanmar Tai Laing
    0xAA50, // Cham
    0xABF0, // Meetei Mayek
    0xFF10, // Fullwidth
];

/// Value of `c` if it is a decimal digit in any BMP script
pub fn decimal_value(c: char) -> Option<u32> {
    let code = c as u32;
    let idx = DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DIGIT_ZEROS[idx.checked_sub(1)?];
    let offset = code - zero;
    (offset < 10).then_some(offset)
}

/// Replace every decimal digit in `token` with its ASCII form, leaving
/// everything else untouched
pub fn to_ascii_digits(token: &str) -> String {
    token
        .chars()
        .map(|c| match decimal_value(c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}
