//! 字符集与查找表
//!
//! 36 字符 (0-9 + A-Z)，每个字符映射为向量 `[q1, q2, r1, r2]`：
//! 前两个分量属于 Z/2，后两个分量属于 Z/3。

/// 字符集：0-9 + A-Z，顺序即 [`ALPHABET`] 的下标.
pub const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 字符向量表，下标与 [`CHARSET`] 一致.
pub const ALPHABET: [[u8; 4]; 36] = [
    [0, 0, 0, 0], // 0
    [0, 0, 0, 1], // 1
    [0, 0, 0, 2], // 2
    [0, 0, 1, 0], // 3
    [0, 0, 1, 1], // 4
    [0, 0, 1, 2], // 5
    [0, 0, 2, 0], // 6
    [0, 0, 2, 1], // 7
    [0, 0, 2, 2], // 8
    [0, 1, 0, 0], // 9
    [0, 1, 0, 1], // A
    [0, 1, 0, 2], // B
    [0, 1, 1, 0], // C
    [0, 1, 1, 1], // D
    [0, 1, 1, 2], // E
    [0, 1, 2, 0], // F
    [0, 1, 2, 1], // G
    [0, 1, 2, 2], // H
    [1, 0, 0, 0], // I
    [1, 0, 0, 1], // J
    [1, 0, 0, 2], // K
    [1, 0, 1, 0], // L
    [1, 0, 1, 1], // M
    [1, 0, 1, 2], // N
    [1, 0, 2, 0], // O
    [1, 0, 2, 1], // P
    [1, 0, 2, 2], // Q
    [1, 1, 0, 0], // R
    [1, 1, 0, 1], // S
    [1, 1, 0, 2], // T
    [1, 1, 1, 0], // U
    [1, 1, 1, 1], // V
    [1, 1, 1, 2], // W
    [1, 1, 2, 0], // X
    [1, 1, 2, 1], // Y
    [1, 1, 2, 2], // Z
];

/// 校验值 `q1 + 2*q2 + 4*r1 + 16*r2` 到校验字符的反查表.
///
/// `r1`、`r2` 取值为 0..=2，因此 12..16 与 28..32 不可达.
pub const REVERSE: [Option<u8>; 44] = [
    Some(b'0'), // 0
    Some(b'I'), // 1
    Some(b'9'), // 2
    Some(b'R'), // 3
    Some(b'3'), // 4
    Some(b'L'), // 5
    Some(b'C'), // 6
    Some(b'U'), // 7
    Some(b'6'), // 8
    Some(b'O'), // 9
    Some(b'F'), // 10
    Some(b'X'), // 11
    None, // 12
    None, // 13
    None, // 14
    None, // 15
    Some(b'1'), // 16
    Some(b'J'), // 17
    Some(b'A'), // 18
    Some(b'S'), // 19
    Some(b'4'), // 20
    Some(b'M'), // 21
    Some(b'D'), // 22
    Some(b'V'), // 23
    Some(b'7'), // 24
    Some(b'P'), // 25
    Some(b'G'), // 26
    Some(b'Y'), // 27
    None, // 28
    None, // 29
    None, // 30
    None, // 31
    Some(b'2'), // 32
    Some(b'K'), // 33
    Some(b'B'), // 34
    Some(b'T'), // 35
    Some(b'5'), // 36
    Some(b'N'), // 37
    Some(b'E'), // 38
    Some(b'W'), // 39
    Some(b'8'), // 40
    Some(b'Q'), // 41
    Some(b'H'), // 42
    Some(b'Z'), // 43
];

/// 字符转索引 (0-35)，无效字符返回 None
#[inline]
pub fn char_to_index(c: u8) -> Option<usize> {
    let c = c.to_ascii_uppercase();
    CHARSET.iter().position(|&x| x == c)
}

/// 字符转向量
#[inline]
pub fn char_to_vector(c: u8) -> Option<[u8; 4]> {
    char_to_index(c).and_then(|i| ALPHABET.get(i).copied())
}

/// 校验值转字符
#[inline]
pub fn value_to_char(v: usize) -> Option<u8> {
    REVERSE.get(v).copied().flatten()
}

/// 验证字符是否在字符集内
#[inline]
pub fn is_valid_char(c: u8) -> bool {
    char_to_index(c).is_some()
}
