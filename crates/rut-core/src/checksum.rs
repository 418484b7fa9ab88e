//! Check character computation (modulo 11)
//!
//! Digits of the number are weighted from the least significant one with the
//! repeating sequence `2, 3, 4, 5, 6, 7`, summed, and reduced as
//! `11 - (sum % 11)`. A result of 11 maps to `'0'`, 10 maps to `'K'`.

/// Weights applied cyclically, least significant digit first
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Compute the check character for a RUT number.
///
/// Zero maps straight to `'0'`. Any `u32` is accepted.
///
/// # Example
/// ```
/// assert_eq!(rut_core::compute_check(12345678), '5');
/// assert_eq!(rut_core::compute_check(1009), 'K');
/// ```
pub fn compute_check(number: u32) -> char {
    if number == 0 {
        return '0';
    }

    let sum: u32 = std::iter::successors(Some(number), |n| (*n >= 10).then(|| n / 10))
        .map(|n| n % 10)
        .zip(WEIGHTS.iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        n => char::from(b'0' + n as u8),
    }
}
