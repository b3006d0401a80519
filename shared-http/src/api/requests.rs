// Query strings are kept as raw optional strings; parsing, defaults and
// validation belong to the resource layer so every caller behaves the same.

/// Decoded query pairs in request order. A repeated parameter keeps its first value.
#[derive(Debug, Default, Clone)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    pub fn first(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

#[derive(Debug, Default)]
pub struct ContentQuery {
    pub region: Option<String>,
    pub locale: Option<String>,
}

impl From<QueryParams> for ContentQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            region: params.first("region"),
            locale: params.first("locale"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LeaderboardQuery {
    pub act_id: Option<String>,
    pub region: Option<String>,
    pub size: Option<String>,
    pub start_index: Option<String>,
}

impl From<QueryParams> for LeaderboardQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            act_id: params.first("actId"),
            region: params.first("region"),
            size: params.first("size"),
            start_index: params.first("startIndex"),
        }
    }
}

#[derive(Debug, Default)]
pub struct StatusQuery {
    pub region: Option<String>,
}

impl From<QueryParams> for StatusQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            region: params.first("region"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SkinsQuery {
    pub language: Option<String>,
    pub weapon_uuid: Option<String>,
    pub q: Option<String>,
}

impl From<QueryParams> for SkinsQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            language: params.first("language"),
            weapon_uuid: params.first("weaponUuid"),
            q: params.first("q"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

impl From<QueryParams> for LanguageQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            language: params.first("language"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_parameter_keeps_first_value() {
        let query = StatusQuery::from(params(&[("region", "na"), ("region", "kr")]));
        assert_eq!(query.region.as_deref(), Some("na"));
    }

    #[test]
    fn test_leaderboard_reads_camel_case_names() {
        let query = LeaderboardQuery::from(params(&[
            ("actId", "act-1"),
            ("startIndex", "50"),
            ("start_index", "99"),
        ]));
        assert_eq!(query.act_id.as_deref(), Some("act-1"));
        assert_eq!(query.start_index.as_deref(), Some("50"));
        assert_eq!(query.size, None);
    }
}
