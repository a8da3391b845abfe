use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One page of a `GetParametersByPath` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterPageRequest {
    pub path: String,
    pub recursive: bool,
    pub with_decryption: bool,
    pub next_token: Option<String>,
}

impl ParameterPageRequest {
    /// First page request. Decryption is always requested.
    pub fn new(path: impl Into<String>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
            with_decryption: true,
            next_token: None,
        }
    }

    pub fn with_token(&self, next_token: impl Into<String>) -> Self {
        Self {
            next_token: Some(next_token.into()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Exports,
    Dotenv,
    DotenvNoQuotes,
    IgnoreBreakLines,
    OnlyValue,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Exports,
        OutputFormat::Dotenv,
        OutputFormat::DotenvNoQuotes,
        OutputFormat::IgnoreBreakLines,
        OutputFormat::OnlyValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Exports => "exports",
            OutputFormat::Dotenv => "dotenv",
            OutputFormat::DotenvNoQuotes => "dotenvnoquotes",
            OutputFormat::IgnoreBreakLines => "ignorebreaklines",
            OutputFormat::OnlyValue => "onlyvalue",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                let supported: Vec<_> = Self::ALL.iter().map(|f| format!("'{f}'")).collect();
                format!(
                    "Unsupported format option '{s}'. Must be one of {}",
                    supported.join(", ")
                )
            })
    }
}
