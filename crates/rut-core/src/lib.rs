//! RUT Core - validation, parsing and formatting of Chilean RUTs
//!
//! A RUT (Rol Único Tributario) is a number of up to nine digits followed by a
//! check character (`0-9` or `K`) computed modulo 11.
//!
//! # Architecture
//!
//! ```text
//! RUT text → Scanner → Rut { number, dv } → Formatter → RUT text
//!                            ↓
//!                         Checksum → valid / invalid
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: no I/O, no shared state, safe to call from any thread
//! - **Bounded**: work never exceeds a dozen buffered characters, whatever the input
//! - **Canonical**: `parse` followed by `render` gives one text per style

pub mod checksum;
pub mod error;
pub mod formatter;
pub mod scanner;

pub use checksum::compute_check;
pub use error::{Error, Result};
pub use formatter::{render, Style};
pub use scanner::{parse, MAX_NUMBER, MIN_NUMBER};

/// A parsed RUT: the number without its check character, and the check character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawRut")]
pub struct Rut {
    pub number: u32,
    pub dv: char, // '0'-'9' or 'K'
}

/// Wire shape of a `Rut`; deserialized values go through `Rut::new`
#[derive(serde::Deserialize)]
struct RawRut {
    number: u32,
    dv: char,
}

impl From<RawRut> for Rut {
    fn from(raw: RawRut) -> Self {
        Rut::new(raw.number, raw.dv)
    }
}

impl Rut {
    /// Build a RUT from its parts. The check character is upper-cased but not verified.
    pub fn new(number: u32, dv: char) -> Self {
        Rut {
            number,
            dv: dv.to_ascii_uppercase(),
        }
    }

    /// Build the valid RUT for `number`, computing its check character
    pub fn from_number(number: u32) -> Self {
        Rut {
            number,
            dv: compute_check(number),
        }
    }

    /// True if the check character matches the number.
    ///
    /// A zero number is never valid.
    pub fn is_valid(&self) -> bool {
        if self.number == 0 {
            return false;
        }
        self.dv == compute_check(self.number)
    }

    /// Render in the given style
    pub fn render(&self, style: Style) -> String {
        formatter::render(self, style)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.render(Style::Complete))
    }
}

impl std::str::FromStr for Rut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Check whether a RUT string is well-formed and carries the right check character.
///
/// Accepts any of the three layouts; `k` and `K` are equivalent.
/// Every parse error collapses to `false`.
pub fn validate(text: &str) -> bool {
    parse(text).map(|rut| rut.is_valid()).unwrap_or(false)
}

/// Parse a RUT string and render it in the given style.
///
/// The check character is not verified; use [`validate`] for that.
pub fn format(text: &str, style: Style) -> Result<String> {
    let rut = parse(text)?;
    Ok(rut.render(style))
}
