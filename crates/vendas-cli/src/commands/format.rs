use vendas_core::currency::{format_brl, parse_brl};

use crate::error::CliError;

pub fn run_format(amount: &str) -> Result<(), CliError> {
    println!("{}", format_input(amount)?);
    Ok(())
}

pub fn format_input(amount: &str) -> Result<String, CliError> {
    Ok(format_brl(parse_brl(amount)?))
}
