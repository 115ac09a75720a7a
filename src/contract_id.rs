//! Contract ID 规范化、校验位计算与校验.
//!
//! Contract ID 结构 (eMI3): 2 字符国家码 + 3 字符运营商 + 9 字符实例 + 1 校验位 = 15 字符.
//! 外部输入可含 `-` 分隔符与小写字母，内部统一为去分隔符的大写形式.

use crate::checksum::{check_digit, PAYLOAD_LEN};
use crate::error::{Error, Result};

/// 含校验位的长度.
pub const ID_LEN: usize = PAYLOAD_LEN + 1;

/// 分隔符.
pub const SEPARATOR: char = '-';

/// 去掉分隔符并转大写；已规范化的输入原样返回.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != SEPARATOR)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// 计算 Contract ID 的校验位.
///
/// 接受 14 或 15 字符（规范化后）；15 字符时忽略最后一位.
///
/// # Example
/// ```
/// assert_eq!(evcoid::compute_check_digit("DE-8AA-CA2B3C4D5").unwrap(), 'L');
/// ```
///
/// # Errors
/// 规范化后长度不是 14 或 15、或载荷含非法字符时返回错误。.
pub fn compute_check_digit(id: &str) -> Result<char> {
    let normalized = normalize(id);
    let len = normalized.chars().count();
    if len != PAYLOAD_LEN && len != ID_LEN {
        return Err(Error::InvalidLength {
            id: id.to_string(),
            len,
            expected: "14 or 15",
        });
    }
    payload_check_digit(&normalized).map(char::from)
}

/// 校验 15 字符 Contract ID 的校验位.
///
/// 返回 `Ok(false)` 仅表示校验位不匹配；长度或字符非法时返回错误.
///
/// # Errors
/// 规范化后长度不是 15、或含非法字符时返回错误。.
pub fn verify(id: &str) -> Result<bool> {
    let normalized = normalize(id);
    let len = normalized.chars().count();
    if len != ID_LEN {
        return Err(Error::InvalidLength {
            id: id.to_string(),
            len,
            expected: "15",
        });
    }
    let expected = payload_check_digit(&normalized)?;
    let got = trailing_digit(&normalized)?;
    Ok(expected == got)
}

/// 前 14 个字符的校验位；调用方保证长度至少为 14 个字符.
fn payload_check_digit(normalized: &str) -> Result<u8> {
    let mut payload = [0u8; PAYLOAD_LEN];
    for (position, (slot, ch)) in payload.iter_mut().zip(normalized.chars()).enumerate() {
        *slot = ascii_symbol(ch, position)?;
    }
    check_digit(&payload)
}

/// 第 15 个字符（必须在字符集内）.
fn trailing_digit(normalized: &str) -> Result<u8> {
    let ch = normalized
        .chars()
        .nth(PAYLOAD_LEN)
        .ok_or_else(|| Error::InvalidLength {
            id: normalized.to_string(),
            len: PAYLOAD_LEN,
            expected: "15",
        })?;
    let c = ascii_symbol(ch, PAYLOAD_LEN)?;
    if crate::charset::is_valid_char(c) {
        Ok(c)
    } else {
        Err(Error::InvalidChar {
            ch,
            position: PAYLOAD_LEN,
        })
    }
}

/// 非 ASCII 字符直接视为非法；ASCII 字符留给查表判断.
fn ascii_symbol(ch: char, position: usize) -> Result<u8> {
    u8::try_from(ch)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(Error::InvalidChar { ch, position })
}

/// 已校验的 15 字符 Contract ID（规范化形式）.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractId {
    /// 15 字符 ASCII (大写，无分隔符).
    id: String,
}

impl ContractId {
    /// 从 14 字符载荷创建（自动计算校验位）.
    ///
    /// # Example
    /// ```
    /// use evcoid::ContractId;
    /// let id = ContractId::from_payload("DE-83D-UIEN83-QGZ").unwrap();
    /// assert_eq!(id.as_str(), "DE83DUIEN83QGZD");
    /// assert_eq!(id.check_digit(), 'D');
    /// ```
    ///
    /// # Errors
    /// 规范化后长度不是 14 或含非法字符时返回错误。.
    pub fn from_payload(raw: &str) -> Result<Self> {
        let mut id = normalize(raw);
        let len = id.chars().count();
        if len != PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                id: raw.to_string(),
                len,
                expected: "14",
            });
        }
        let digit = payload_check_digit(&id)?;
        id.push(char::from(digit));
        Ok(Self { id })
    }

    /// 解析 15 字符 Contract ID（验证校验位）.
    ///
    /// # Errors
    /// 长度不是 15、含非法字符或校验位不匹配时返回错误。.
    pub fn parse(raw: &str) -> Result<Self> {
        let id = normalize(raw);
        let len = id.chars().count();
        if len != ID_LEN {
            return Err(Error::InvalidLength {
                id: raw.to_string(),
                len,
                expected: "15",
            });
        }
        let expected = payload_check_digit(&id)?;
        let got = trailing_digit(&id)?;
        if expected != got {
            return Err(Error::ChecksumMismatch {
                expected: char::from(expected),
                got: char::from(got),
            });
        }
        Ok(Self { id })
    }

    /// 完整 15 字符.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// 14 字符载荷.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.id[..PAYLOAD_LEN]
    }

    /// 校验位.
    #[must_use]
    pub fn check_digit(&self) -> char {
        self.id[PAYLOAD_LEN..].chars().next().unwrap_or_default()
    }

    /// 国家码 (ISO 3166-1 alpha-2).
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.id[..2]
    }

    /// 运营商 ID.
    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.id[2..5]
    }

    /// 实例部分.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.id[5..PAYLOAD_LEN]
    }

    /// `CC-PPP-IIIIIIIII-D` 形式.
    #[must_use]
    pub fn hyphenated(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.country_code(),
            self.provider_id(),
            self.instance(),
            self.check_digit()
        )
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContractId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if normalize(s).chars().count() == PAYLOAD_LEN {
            Self::from_payload(s)
        } else {
            Self::parse(s)
        }
    }
}

impl AsRef<str> for ContractId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
