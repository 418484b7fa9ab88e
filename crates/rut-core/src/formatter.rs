//! RUT formatter — renders a number and check character in a canonical layout
//!
//! | Style      | Example        |
//! |------------|----------------|
//! | `Complete` | `12.345.678-5` |
//! | `Escaped`  | `123456785`    |
//! | `WithDash` | `12345678-5`   |
//!
//! Rendering never validates: whatever check character the `Rut` carries is
//! written out as-is.

use serde::{Deserialize, Serialize};

use crate::Rut;

/// Output layout for a RUT
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Thousands separated by periods, then a hyphen: `12.345.678-5`
    #[default]
    Complete,
    /// No separators at all: `123456785`
    Escaped,
    /// Hyphen before the check character only: `12345678-5`
    WithDash,
}

impl Style {
    /// Every style, in declaration order
    pub const ALL: [Style; 3] = [Style::Complete, Style::Escaped, Style::WithDash];

    /// Look up a style by name, case-insensitively.
    ///
    /// Unknown names fall back to `Complete`.
    pub fn from_name(name: &str) -> Style {
        match name.to_ascii_lowercase().as_str() {
            "escaped" => Style::Escaped,
            "with-dash" | "with_dash" | "withdash" | "dash" => Style::WithDash,
            _ => Style::Complete,
        }
    }

    /// Canonical lowercase name, accepted back by `from_name`
    pub fn name(&self) -> &'static str {
        match self {
            Style::Complete => "complete",
            Style::Escaped => "escaped",
            Style::WithDash => "with-dash",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a RUT in the given style
pub fn render(rut: &Rut, style: Style) -> String {
    let digits = rut.number.to_string();

    match style {
        Style::Escaped => {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push_str(&digits);
            out.push(rut.dv);
            out
        }
        Style::WithDash => {
            let mut out = String::with_capacity(digits.len() + 2);
            out.push_str(&digits);
            out.push('-');
            out.push(rut.dv);
            out
        }
        Style::Complete => {
            // Widest output: 123.456.789-K
            let mut out = String::with_capacity(13);
            push_grouped(&mut out, &digits);
            out.push('-');
            out.push(rut.dv);
            out
        }
    }
}

/// Append `digits` with a period before every group of three counted from the right
fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push('.');
        }
    }
}
