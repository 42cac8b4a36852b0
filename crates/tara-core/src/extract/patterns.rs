//! Shared regex patterns for slip field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Permissive value pattern: letters in any script, digits, and the
    // punctuation that survives inside printed values.
    pub static ref VALUE_PATTERN: Regex = Regex::new(
        r"[\p{L}0-9,\s._-]+"
    ).unwrap();

    // YYYYMMDD with optional - or . separators
    pub static ref DATE_PATTERN: Regex = Regex::new(
        r"(\d{4})[-.]?(\d{2})[-.]?(\d{2})"
    ).unwrap();

    // HH:MM or HH:MM:SS
    pub static ref TIME_PATTERN: Regex = Regex::new(
        r"(\d{2}):(\d{2})(?::(\d{2}))?"
    ).unwrap();

    // Digit run with separators, followed by the mass unit
    pub static ref WEIGHT_PATTERN: Regex = Regex::new(
        r"(?i)([\d,\s]+)\s*kg"
    ).unwrap();

    // OCR tends to pad clock times with spaces around the colons
    pub static ref SPACED_TIME_PATTERN: Regex = Regex::new(
        r"\d{2}\s*:\s*\d{2}(\s*:\s*\d{2})?\s*"
    ).unwrap();

    // digits + non-ASCII letter run + digits (plate form), or a bare
    // 4-digit slip number
    pub static ref VEHICLE_PATTERN: Regex = Regex::new(
        r"(\d+[^\x00-\x7F]*\d+|\d{4})"
    ).unwrap();
}
