//! DirectInput key code lookup command

use anyhow::Result;
use rf2_input_maps::rf_keycode_to_dik;

use crate::error::CliError;
use crate::output;

/// Parse a key code given in decimal or `0x` hexadecimal.
pub fn parse_keycode(text: &str) -> Result<u32, CliError> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|e| CliError::InvalidKeycode(format!("'{text}': {e}")))
}

/// Execute dik command
pub fn execute(code: &str, json: bool) -> Result<()> {
    let code = parse_keycode(code)?;
    output::print_dik(code, &rf_keycode_to_dik(code), json);
    Ok(())
}
