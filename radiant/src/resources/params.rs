use shared::{Error, Result};

pub const DEFAULT_LANGUAGE: &str = "pt-BR";
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 200;
pub const DEFAULT_START_INDEX: u32 = 0;

/// Empty or whitespace-only values count as not supplied
pub fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    supplied(value).ok_or(Error::MissingParam(name))
}

/// Identifiers end up in upstream URL paths, so only uuid-like characters pass
pub fn identifier<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let valid = value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(value)
    } else {
        Err(Error::InvalidParam {
            name,
            value: value.to_string(),
        })
    }
}

pub fn number_or(name: &'static str, value: Option<&str>, default: u32) -> Result<u32> {
    match supplied(value) {
        Some(raw) => raw.parse::<u32>().map_err(|_| Error::InvalidParam {
            name,
            value: raw.to_string(),
        }),
        None => Ok(default),
    }
}

pub fn language_or_default(value: Option<&str>) -> &str {
    supplied(value).unwrap_or(DEFAULT_LANGUAGE)
}
