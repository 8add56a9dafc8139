//! Number formatting through the Win32 National Language Support API.

use super::{LocaleError, LocaleId};
use std::io;
use windows_sys::Win32::Globalization::{GetNumberFormatEx, GetUserDefaultLocaleName};

/// `LOCALE_NAME_MAX_LENGTH`, including the terminating null.
const LOCALE_NAME_LEN: usize = 85;
/// Output buffer for a formatted number, in UTF-16 units.
const NUMBER_LEN: usize = 64;

fn to_wstring(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// The user's default locale name, e.g. `de-DE`.
pub(super) fn user_default_locale() -> Option<LocaleId> {
    let mut buf = [0u16; LOCALE_NAME_LEN];
    // Returns the length including the null, or 0 on failure.
    let len = unsafe { GetUserDefaultLocaleName(buf.as_mut_ptr(), buf.len() as i32) };
    if len <= 1 {
        return None;
    }
    let name = String::from_utf16_lossy(&buf[..len as usize - 1]);
    Some(LocaleId::new(&name))
}

/// Format a canonical decimal string with `GetNumberFormatEx`.
///
/// The user default locale is passed as `LOCALE_NAME_USER_DEFAULT` so the
/// user's own overrides of the regional separators apply.
pub(super) fn format_number(value: &str, locale: &LocaleId) -> Result<String, LocaleError> {
    let value_wide = to_wstring(value);
    let name_wide = to_wstring(locale.as_str());
    let name_ptr = match user_default_locale() {
        Some(default) if default == *locale => std::ptr::null(),
        _ => name_wide.as_ptr(),
    };

    let mut buf = [0u16; NUMBER_LEN];
    let len = unsafe {
        GetNumberFormatEx(
            name_ptr,
            0,
            value_wide.as_ptr(),
            std::ptr::null(),
            buf.as_mut_ptr(),
            buf.len() as i32,
        )
    };
    if len <= 0 {
        let err = io::Error::last_os_error();
        return Err(LocaleError::Host(format!("GetNumberFormatEx({locale}, {value:?}): {err}")));
    }
    Ok(String::from_utf16_lossy(&buf[..len as usize - 1]))
}
