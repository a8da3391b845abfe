use std::io::Write;

use crate::{
    domain::{OutputFormat, Parameter},
    naming::env_name,
};

/// Replaces every newline with the two characters `\n`.
pub fn escape_breaklines(value: &str) -> String {
    value.replace('\n', "\\n")
}

/// Renders one parameter. Every format except `ignorebreaklines` escapes
/// newlines; `onlyvalue` has no trailing newline so values concatenate.
pub fn format_parameter(env: &str, raw_value: &str, format: OutputFormat) -> String {
    let value = escape_breaklines(raw_value);

    match format {
        OutputFormat::Exports => format!("export {env}=$'{value}'\n"),
        OutputFormat::Dotenv => format!("{env}=\"{value}\"\n"),
        OutputFormat::DotenvNoQuotes => format!("{env}={value}\n"),
        OutputFormat::OnlyValue => value,
        OutputFormat::IgnoreBreakLines => format!("{env}={raw_value}\n"),
    }
}

pub fn write_parameter<W: Write>(
    out: &mut W,
    path: &str,
    parameter: &Parameter,
    format: OutputFormat,
) -> std::io::Result<()> {
    let env = env_name(path, parameter.name());
    out.write_all(format_parameter(&env, parameter.value(), format).as_bytes())
}
