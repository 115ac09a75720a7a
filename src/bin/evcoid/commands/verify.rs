use crate::error::{CliError, Result};
use crate::output::Output;
use crate::util::payload_of;
use crate::Context;
use clap::Args;
use evcoid::{compute_check_digit, normalize, verify, PAYLOAD_LEN};
use serde::Serialize;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Contract ID including its check digit (15 chars after normalization).
    pub id: String,
}

#[derive(Serialize)]
/// Internal struct.
struct VerifyOutput {
    /// Internal field.
    input: String,
    /// Internal field.
    normalized: String,
    /// Internal field.
    valid: bool,
    /// Internal field.
    expected: char,
    /// Internal field.
    got: char,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let normalized = normalize(&args.id);
    ctx.out.info_diag(format!("normalized: {normalized}"));

    let valid = verify(&args.id)?;
    let expected = compute_check_digit(&payload_of(&normalized))?;
    let got = normalized.chars().nth(PAYLOAD_LEN).unwrap_or_default();
    ctx.out
        .info_diag(format!("expected check digit: {expected}, got: {got}"));

    if ctx.json {
        let output = VerifyOutput {
            input: args.id.clone(),
            normalized: normalized.clone(),
            valid,
            expected,
            got,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if valid {
        Output::result("valid");
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidCheckDigit {
            id: normalized,
            expected,
            got,
        })
    }
}
