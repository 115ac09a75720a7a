//! 校验位计算.
//!
//! 每个载荷字符展开为 `[q1, q2, r1, r2]`，q 部分用 P1 (Z/2 上矩阵
//! `[[0,1],[1,1]]` 的幂) 加权，r 部分用 P2 (Z/3 上矩阵 `[[0,1],[1,2]]`
//! 的幂) 加权，最后把余数组合成校验值并反查字符.

use crate::charset::{char_to_vector, value_to_char};
use crate::error::{Error, Result};

/// 载荷长度（不含校验位）.
pub const PAYLOAD_LEN: usize = 14;

/// 第 i 行为 `P^(i+1)` 按行展开，周期 3.
pub const P1: [[usize; 4]; PAYLOAD_LEN] = [
    [0, 1, 1, 1],
    [1, 1, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 1],
    [1, 1, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 1],
    [1, 1, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 1],
    [1, 1, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 1],
    [1, 1, 1, 0],
];

/// 第 i 行为 `Q^(i+1)` 按行展开，周期 8.
pub const P2: [[usize; 4]; PAYLOAD_LEN] = [
    [0, 1, 1, 2],
    [1, 2, 2, 2],
    [2, 2, 2, 0],
    [2, 0, 0, 2],
    [0, 2, 2, 1],
    [2, 1, 1, 1],
    [1, 1, 1, 0],
    [1, 0, 0, 1],
    [0, 1, 1, 2],
    [1, 2, 2, 2],
    [2, 2, 2, 0],
    [2, 0, 0, 2],
    [0, 2, 2, 1],
    [2, 1, 1, 1],
];

/// `c4 mod 3` 到 r1.
const R1: [usize; 3] = [0, 2, 1];

/// `(c3 mod 3) + r1` 到 r2.
const R2: [usize; 5] = [0, 2, 1, 0, 2];

/// 计算载荷的校验值，范围 `[0, 44)`.
///
/// # Errors
/// 载荷含字符集外字符时返回 [`Error::InvalidChar`]，`position` 为其下标。.
pub fn check_value(payload: &[u8; PAYLOAD_LEN]) -> Result<usize> {
    let mut m = [0usize; 4 * PAYLOAD_LEN];
    for (i, &c) in payload.iter().enumerate() {
        let v = char_to_vector(c).ok_or(Error::InvalidChar {
            ch: char::from(c),
            position: i,
        })?;
        for (j, &x) in v.iter().enumerate() {
            m[4 * i + j] = usize::from(x);
        }
    }

    let (mut c1, mut c2, mut c3, mut c4) = (0usize, 0usize, 0usize, 0usize);
    for i in 0..PAYLOAD_LEN {
        c1 += m[i * 4] * P1[i][0] + m[i * 4 + 1] * P1[i][2];
        c2 += m[i * 4] * P1[i][1] + m[i * 4 + 1] * P1[i][3];
        c3 += m[i * 4 + 2] * P2[i][0] + m[i * 4 + 3] * P2[i][2];
        c4 += m[i * 4 + 2] * P2[i][1] + m[i * 4 + 3] * P2[i][3];
    }

    let q1 = c1 % 2;
    let q2 = c2 % 2;
    let r1 = R1[c4 % 3];
    let r2 = R2[c3 % 3 + r1];

    Ok(q1 + q2 * 2 + r1 * 4 + r2 * 16)
}

/// 计算载荷的校验字符 (ASCII 大写).
///
/// # Errors
/// 载荷含非法字符时返回 [`Error::InvalidChar`]。.
pub fn check_digit(payload: &[u8; PAYLOAD_LEN]) -> Result<u8> {
    let v = check_value(payload)?;
    value_to_char(v).ok_or(Error::UnmappedCheckValue(v))
}
