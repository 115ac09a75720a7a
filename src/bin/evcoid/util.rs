use crate::Context;
use evcoid::checksum::check_value;
use evcoid::{ContractId, PAYLOAD_LEN};

/// Payload part of a normalized ID, at most 14 characters.
pub fn payload_of(normalized: &str) -> String {
    normalized.chars().take(PAYLOAD_LEN).collect()
}

/// Prints the intermediate check value in verbose mode.
pub fn diag_check_value(ctx: &Context, id: &ContractId) {
    let Ok(payload) = <&[u8; PAYLOAD_LEN]>::try_from(id.payload().as_bytes()) else {
        return;
    };
    if let Ok(value) = check_value(payload) {
        ctx.out.info_diag(format!("check value: {value}"));
    }
}

/// Full ID in the form selected by flags and preferences.
pub fn display_id(ctx: &Context, id: &ContractId, hyphenated: bool) -> String {
    if hyphenated || ctx.hyphenated {
        id.hyphenated()
    } else {
        id.to_string()
    }
}
