use std::fmt;

/// Upstream shard selector. Only these six are ever sent upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    Br,
    Na,
    Latam,
    Eu,
    Ap,
    Kr,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Br,
        Region::Na,
        Region::Latam,
        Region::Eu,
        Region::Ap,
        Region::Kr,
    ];

    /// Case-insensitive lookup against the allow-set
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(value))
    }

    /// Resolve a client-supplied region, silently falling back to `default`
    pub fn resolve(value: Option<&str>, default: Region) -> Self {
        value.and_then(Self::parse).unwrap_or(default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Br => "br",
            Region::Na => "na",
            Region::Latam => "latam",
            Region::Eu => "eu",
            Region::Ap => "ap",
            Region::Kr => "kr",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Region::parse("NA"), Some(Region::Na));
        assert_eq!(Region::parse("Latam"), Some(Region::Latam));
        assert_eq!(Region::parse(" kr "), Some(Region::Kr));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Region::resolve(Some("mars"), Region::Eu), Region::Eu);
        assert_eq!(Region::resolve(Some(""), Region::Ap), Region::Ap);
        assert_eq!(Region::resolve(None, Region::Na), Region::Na);
    }

    #[test]
    fn test_every_allowed_region_resolves_to_itself() {
        for region in Region::ALL {
            assert_eq!(Region::resolve(Some(region.as_str()), Region::Br), region);
        }
    }
}
