//! evcoid - E-Mobility Contract ID check digit
//!
//! 计算并校验 eMI3 / EVCO Contract ID 的校验位（"Check Digit Calculation
//! for Contract-IDs" 算法）。纯函数、无状态、无 I/O。
//!
//! # ID 格式
//!
//! ```text
//! ┌─────────┬──────────┬─────────────┬───────┐
//! │ Country │ Provider │  Instance   │ Check │
//! │ 2 chars │ 3 chars  │  9 chars    │ 1 char│
//! └─────────┴──────────┴─────────────┴───────┘
//!        总计: 14 字符载荷 + 1 校验位
//! ```
//!
//! 输入可以含 `-` 分隔符与小写字母，计算前统一规范化。
//!
//! # Example
//!
//! ```
//! use evcoid::{compute_check_digit, verify, ContractId};
//!
//! assert_eq!(compute_check_digit("DE83DUIEN83QGZ").unwrap(), 'D');
//! assert!(verify("de-83d-uien83-qgzd").unwrap());
//!
//! let id = ContractId::parse("DE-8AA-CA2B3C4D5-L").unwrap();
//! assert_eq!(id.provider_id(), "8AA");
//! assert_eq!(id.hyphenated(), "DE-8AA-CA2B3C4D5-L");
//! ```

pub mod charset;
pub mod checksum;
pub mod contract_id;
pub mod error;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use checksum::PAYLOAD_LEN;
pub use contract_id::{compute_check_digit, normalize, verify, ContractId, ID_LEN};
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        let digit = compute_check_digit("DE-8AA-CA2B3C4D5");
        assert_eq!(digit, Ok('L'));

        let verified = verify("DE-8AA-CA2B3C4D5-L");
        assert_eq!(verified, Ok(true));

        let parsed = ContractId::parse("DE83DUIEN83QGZD");
        assert!(parsed.is_ok());
        let Ok(id) = parsed else {
            return;
        };
        assert_eq!(id.country_code(), "DE");
        assert_eq!(id.as_str().len(), ID_LEN);
    }
}
