use crate::error::Result;
use crate::output::Output;
use crate::util::{diag_check_value, display_id, payload_of};
use crate::Context;
use clap::Args;
use evcoid::{compute_check_digit, normalize, ContractId};
use serde::Serialize;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Contract ID (14 chars; a 15th char is ignored).
    pub id: String,

    /// Print the full contract ID instead of the check digit.
    #[arg(long)]
    pub full: bool,

    /// Print the full contract ID as CC-PPP-IIIIIIIII-D (implies --full).
    #[arg(long)]
    pub hyphenated: bool,
}

#[derive(Serialize)]
/// Internal struct.
struct ComputeOutput {
    /// Internal field.
    input: String,
    /// Internal field.
    normalized: String,
    /// Internal field.
    check_digit: char,
    /// Internal field.
    contract_id: String,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let normalized = normalize(&args.id);
    ctx.out.info_diag(format!("normalized: {normalized}"));

    let digit = compute_check_digit(&args.id)?;
    let id = ContractId::from_payload(&payload_of(&normalized))?;
    diag_check_value(ctx, &id);

    if ctx.json {
        let output = ComputeOutput {
            input: args.id.clone(),
            normalized,
            check_digit: digit,
            contract_id: display_id(ctx, &id, args.hyphenated),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.full || args.hyphenated {
        Output::result(display_id(ctx, &id, args.hyphenated));
    } else {
        Output::result(digit);
    }
    Ok(())
}
