//! Stateless input validators for the admin forms.
//!
//! Pure predicates over strings plus one keystroke filter. None of these
//! touch state or return errors; callers branch on the boolean.

use std::sync::LazyLock;

use regex::Regex;

static DNI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}$").expect("pattern compiles"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern compiles"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").expect("pattern compiles"));

/// National ID: exactly 8 digits.
pub fn validate_dni(dni: &str) -> bool {
    DNI.is_match(dni)
}

/// Single `@`, no whitespace, at least one dot after the `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Phone: exactly 9 digits.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Uppercase the first letter of each word, leaving the rest untouched.
pub fn capitalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for c in name.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Minimal key-event surface for input filtering.
///
/// Carries the character code of the pressed key and the suppression flag
/// the host toolkit honours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub char_code: u32,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(char_code: u32) -> Self {
        Self {
            char_code,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Suppress any keystroke outside `'0'..='9'`.
pub fn restrict_to_numbers(event: &mut KeyEvent) {
    if !(48..=57).contains(&event.char_code) {
        event.prevent_default();
    }
}
