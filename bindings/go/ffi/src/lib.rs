//! C ABI for `rut-core`, consumed from Go through cgo.
//!
//! Every entry point delegates to the core; none re-implements RUT rules.
//!
//! # Conventions
//!
//! - `rut_validate` answers with a plain `bool`. Null pointers and non-UTF-8
//!   text count as `false`, the same way a malformed RUT does.
//! - `rut_parse` and `rut_format` answer with a [`RutResult`]: exactly one of
//!   `result`/`error` is non-null. The parse result is JSON
//!   (`{"number":1009,"dv":"K"}`), the error is the core's message
//!   (`rut: too short (minimum 5 characters)`).
//! - Style codes for `rut_format`: `0` complete (`12.345.678-5`),
//!   `1` escaped (`123456785`), `2` with dash (`12345678-5`). Any other code
//!   renders complete.
//! - `rut_compute_check` returns the check digit as an ASCII `c_char`.
//!
//! Strings handed out by this crate are owned by Rust and go back through
//! `rut_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

use rut_core::Style;

/// Outcome of `rut_parse` / `rut_format`: output text or core error message.
/// Free whichever pointer is non-null with `rut_free_string()`.
#[repr(C)]
pub struct RutResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl RutResult {
    fn ok(value: String) -> Self {
        RutResult {
            result: into_c_string(value),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        RutResult {
            result: std::ptr::null_mut(),
            error: into_c_string(msg),
        }
    }
}

/// Interior NULs cannot occur in our output; fall back to an empty string if one does
fn into_c_string(value: String) -> *mut c_char {
    CString::new(value).unwrap_or_default().into_raw()
}

/// Borrow caller text; `None` for null or non-UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Map the C style code: 0 complete, 1 escaped, 2 with dash, anything else complete
fn style_from_code(code: c_int) -> Style {
    match code {
        1 => Style::Escaped,
        2 => Style::WithDash,
        _ => Style::Complete,
    }
}

/// Check whether a RUT string is well-formed and carries the right check digit.
/// Null or non-UTF-8 input is reported as invalid.
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rut_validate(text: *const c_char) -> bool {
    cstr_to_str(text).map(rut_core::validate).unwrap_or(false)
}

/// Parse a RUT string.
/// Returns JSON: { "number": 12345678, "dv": "5" }
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
/// The caller must free the returned strings with `rut_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn rut_parse(text: *const c_char) -> RutResult {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return RutResult::err("null or invalid UTF-8 input".into()),
    };

    match rut_core::parse(text) {
        Ok(rut) => match serde_json::to_string(&rut) {
            Ok(json) => RutResult::ok(json),
            Err(e) => RutResult::err(format!("Serialization error: {}", e)),
        },
        Err(e) => RutResult::err(e.to_string()),
    }
}

/// Parse a RUT string and render it in the given style.
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
/// The caller must free the returned strings with `rut_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn rut_format(text: *const c_char, style: c_int) -> RutResult {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return RutResult::err("null or invalid UTF-8 input".into()),
    };

    match rut_core::format(text, style_from_code(style)) {
        Ok(formatted) => RutResult::ok(formatted),
        Err(e) => RutResult::err(e.to_string()),
    }
}

/// Compute the check digit for a RUT number, as an ASCII character.
#[no_mangle]
pub extern "C" fn rut_compute_check(number: u32) -> c_char {
    rut_core::compute_check(number) as u8 as c_char
}

/// Free a string previously returned by a RUT FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a RUT FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn rut_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(ptr: *mut c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        rut_free_string(ptr);
        Some(s)
    }

    #[test]
    fn test_validate() {
        let valid = CString::new("12.345.678-5").unwrap();
        let invalid = CString::new("12.345.678-0").unwrap();
        unsafe {
            assert!(rut_validate(valid.as_ptr()));
            assert!(!rut_validate(invalid.as_ptr()));
            assert!(!rut_validate(std::ptr::null()));
        }
    }

    #[test]
    fn test_parse_ok() {
        let text = CString::new("1.009-k").unwrap();
        let res = unsafe { rut_parse(text.as_ptr()) };
        let json = unsafe { take(res.result) }.unwrap();
        assert!(unsafe { take(res.error) }.is_none());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["number"], 1009);
        assert_eq!(value["dv"], "K");
    }

    #[test]
    fn test_parse_err() {
        let text = CString::new("1-9").unwrap();
        let res = unsafe { rut_parse(text.as_ptr()) };
        assert!(unsafe { take(res.result) }.is_none());
        let err = unsafe { take(res.error) }.unwrap();
        assert!(err.contains("too short"));
    }

    #[test]
    fn test_format_styles() {
        let text = CString::new("123456785").unwrap();
        let cases = [(0, "12.345.678-5"), (1, "123456785"), (2, "12345678-5"), (42, "12.345.678-5")];
        for (code, expected) in cases {
            let res = unsafe { rut_format(text.as_ptr(), code) };
            assert_eq!(unsafe { take(res.result) }.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_null_input() {
        let res = unsafe { rut_format(std::ptr::null(), 0) };
        assert!(res.result.is_null());
        assert!(unsafe { take(res.error) }.is_some());
    }

    #[test]
    fn test_compute_check() {
        assert_eq!(rut_compute_check(1009) as u8, b'K');
        assert_eq!(rut_compute_check(12345678) as u8, b'5');
        assert_eq!(rut_compute_check(0) as u8, b'0');
    }
}
