//! C FFI 导出
//!
//! 提供 C ABI 接口供 C/ObjC/Swift/其他语言调用

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::contract_id::{compute_check_digit, normalize, verify};
use crate::error::Error;

/// FFI 错误码
#[repr(i32)]
pub enum EvcoidError {
    Success = 0,
    NullPointer = -1,
    InvalidUtf8 = -2,
    InvalidLength = -3,
    InvalidCharacter = -4,
    BufferTooSmall = -5,
    Internal = -6,
}

impl From<&Error> for EvcoidError {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidLength { .. } => Self::InvalidLength,
            Error::InvalidChar { .. } => Self::InvalidCharacter,
            Error::ChecksumMismatch { .. } | Error::UnmappedCheckValue(_) => Self::Internal,
        }
    }
}

/// 读取 C 字符串；失败时返回错误码.
unsafe fn read_str<'a>(id: *const c_char) -> Result<&'a str, EvcoidError> {
    if id.is_null() {
        return Err(EvcoidError::NullPointer);
    }
    CStr::from_ptr(id)
        .to_str()
        .map_err(|_| EvcoidError::InvalidUtf8)
}

/// 计算校验位
///
/// # Safety
/// - `id` 必须是有效的 C 字符串
/// - `out` 必须指向至少 2 字节的缓冲区（校验位 + null terminator）
#[no_mangle]
pub unsafe extern "C" fn evcoid_check_digit(id: *const c_char, out: *mut c_char) -> i32 {
    if out.is_null() {
        return EvcoidError::NullPointer as i32;
    }
    let id_str = match read_str(id) {
        Ok(s) => s,
        Err(code) => return code as i32,
    };

    match compute_check_digit(id_str) {
        Ok(digit) => {
            // 校验位来自字符集，必为 ASCII
            *out = digit as u8 as c_char;
            *out.add(1) = 0;
            EvcoidError::Success as i32
        }
        Err(err) => EvcoidError::from(&err) as i32,
    }
}

/// 校验 Contract ID
///
/// 返回 1 表示有效，0 表示校验位不匹配，负数为错误码
///
/// # Safety
/// - `id` 必须是有效的 C 字符串
#[no_mangle]
pub unsafe extern "C" fn evcoid_verify(id: *const c_char) -> i32 {
    let id_str = match read_str(id) {
        Ok(s) => s,
        Err(code) => return code as i32,
    };

    match verify(id_str) {
        Ok(valid) => i32::from(valid),
        Err(err) => EvcoidError::from(&err) as i32,
    }
}

/// 规范化 Contract ID（去除 `-`，转大写）
///
/// 成功时返回写入的字节数（不含 null terminator）
///
/// # Safety
/// - `id` 必须是有效的 C 字符串
/// - `out` 必须指向至少 `out_len` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn evcoid_normalize(
    id: *const c_char,
    out: *mut c_char,
    out_len: usize,
) -> i32 {
    if out.is_null() {
        return EvcoidError::NullPointer as i32;
    }
    let id_str = match read_str(id) {
        Ok(s) => s,
        Err(code) => return code as i32,
    };

    let normalized = normalize(id_str);
    let bytes = normalized.as_bytes();
    if bytes.len() >= out_len {
        return EvcoidError::BufferTooSmall as i32;
    }
    let Ok(written) = i32::try_from(bytes.len()) else {
        return EvcoidError::BufferTooSmall as i32;
    };

    ptr::copy_nonoverlapping(bytes.as_ptr(), out.cast::<u8>(), bytes.len());
    *out.add(bytes.len()) = 0;
    written
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    #[test]
    fn test_check_digit() {
        let id = c("DE-8AA-CA2B3C4D5");
        let mut out = [0 as c_char; 2];
        let code = unsafe { evcoid_check_digit(id.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(code, 0);
        assert_eq!(out[0] as u8, b'L');
        assert_eq!(out[1], 0);
    }

    #[test]
    fn test_check_digit_errors() {
        let mut out = [0 as c_char; 2];
        let code = unsafe { evcoid_check_digit(ptr::null(), out.as_mut_ptr()) };
        assert_eq!(code, EvcoidError::NullPointer as i32);

        let short = c("DE83");
        let code = unsafe { evcoid_check_digit(short.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(code, EvcoidError::InvalidLength as i32);

        let bad = c("DE83DUIEN83QG*");
        let code = unsafe { evcoid_check_digit(bad.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(code, EvcoidError::InvalidCharacter as i32);
    }

    #[test]
    fn test_verify() {
        let valid = c("de-83d-uien83-qgzd");
        let invalid = c("DE83DUIEN83QGZE");
        let short = c("DE83DUIEN83QGZ");
        unsafe {
            assert_eq!(evcoid_verify(valid.as_ptr()), 1);
            assert_eq!(evcoid_verify(invalid.as_ptr()), 0);
            assert_eq!(evcoid_verify(short.as_ptr()), EvcoidError::InvalidLength as i32);
            assert_eq!(evcoid_verify(ptr::null()), EvcoidError::NullPointer as i32);
        }
    }

    #[test]
    fn test_normalize() {
        let id = c("de-8aa-ca2b3c4d5-l");
        let mut out = [0 as c_char; 16];
        let written = unsafe { evcoid_normalize(id.as_ptr(), out.as_mut_ptr(), out.len()) };
        assert_eq!(written, 15);
        let text = unsafe { CStr::from_ptr(out.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "DE8AACA2B3C4D5L");

        let mut small = [0 as c_char; 15];
        let code = unsafe { evcoid_normalize(id.as_ptr(), small.as_mut_ptr(), small.len()) };
        assert_eq!(code, EvcoidError::BufferTooSmall as i32);
    }
}
