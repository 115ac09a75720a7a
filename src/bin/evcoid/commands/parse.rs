use crate::error::Result;
use crate::output::Output;
use crate::util::diag_check_value;
use crate::Context;
use clap::Args;
use evcoid::ContractId;
use serde::Serialize;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Contract ID: 15 chars, or 14 to have the check digit appended.
    pub id: String,
}

#[derive(Serialize)]
/// Internal struct.
struct ParseOutput<'a> {
    /// Internal field.
    contract_id: &'a str,
    /// Internal field.
    hyphenated: String,
    /// Internal field.
    country_code: &'a str,
    /// Internal field.
    provider_id: &'a str,
    /// Internal field.
    instance: &'a str,
    /// Internal field.
    check_digit: char,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let id: ContractId = args.id.parse()?;
    diag_check_value(ctx, &id);

    if ctx.json {
        let output = ParseOutput {
            contract_id: id.as_str(),
            hyphenated: id.hyphenated(),
            country_code: id.country_code(),
            provider_id: id.provider_id(),
            instance: id.instance(),
            check_digit: id.check_digit(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Output::result(format!("contract_id  {id}"));
    Output::result(format!("hyphenated   {}", id.hyphenated()));
    Output::result(format!("country      {}", id.country_code()));
    Output::result(format!("provider     {}", id.provider_id()));
    Output::result(format!("instance     {}", id.instance()));
    Output::result(format!("check_digit  {}", id.check_digit()));
    ctx.out.info_user("checksum ok");
    Ok(())
}
