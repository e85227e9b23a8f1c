use chrono::{DateTime, SecondsFormat, Utc};

use super::{Query, QueryCommon};

/// Filters for `GET /stories/{id}/activity`.
#[derive(Clone, Debug, Default)]
pub struct ActivityQuery {
    pub common: QueryCommon,
    pub occurred_before: Option<DateTime<Utc>>,
    pub occurred_after: Option<DateTime<Utc>>,
    /// Only activity newer than this project version.
    pub since_version: Option<u64>,
}

impl Query for ActivityQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(before) = self.occurred_before {
            params.push((
                "occurred_before".to_string(),
                before.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(after) = self.occurred_after {
            params.push((
                "occurred_after".to_string(),
                after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(version) = self.since_version {
            params.push(("since_version".to_string(), version.to_string()));
        }
        self.common.push_pairs(&mut params);
        params
    }
}

impl ActivityQuery {
    pub fn with_occurred_before(mut self, before: DateTime<Utc>) -> Self {
        self.occurred_before = Some(before);
        self
    }

    pub fn with_occurred_after(mut self, after: DateTime<Utc>) -> Self {
        self.occurred_after = Some(after);
        self
    }

    pub fn with_since_version(mut self, version: u64) -> Self {
        self.since_version = Some(version);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::query::{ActivityQuery, Query};

    #[test]
    fn test_activity_query() {
        let after = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let pairs = ActivityQuery::default()
            .with_occurred_after(after)
            .with_since_version(118)
            .with_limit(10)
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("occurred_after".to_string(), "2024-03-01T12:00:00Z".to_string()),
                ("since_version".to_string(), "118".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }
}
