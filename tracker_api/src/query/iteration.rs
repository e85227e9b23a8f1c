use std::str::FromStr;

use super::{common::push_str, Query, QueryCommon};

/// Which iterations a listing returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationScope {
    Done,
    Current,
    Backlog,
    CurrentBacklog,
    DoneCurrent,
}

impl std::fmt::Display for IterationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IterationScope::Done => "done",
                IterationScope::Current => "current",
                IterationScope::Backlog => "backlog",
                IterationScope::CurrentBacklog => "current_backlog",
                IterationScope::DoneCurrent => "done_current",
            }
        )?;
        Ok(())
    }
}

impl FromStr for IterationScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "done" => Ok(IterationScope::Done),
            "current" => Ok(IterationScope::Current),
            "backlog" => Ok(IterationScope::Backlog),
            "current_backlog" => Ok(IterationScope::CurrentBacklog),
            "done_current" => Ok(IterationScope::DoneCurrent),
            _ => Err(()),
        }
    }
}

/// Filters for `GET /iterations`.
#[derive(Clone, Debug, Default)]
pub struct IterationsQuery {
    pub common: QueryCommon,
    pub scope: Option<IterationScope>,
    pub label: Option<String>,
}

impl Query for IterationsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(scope) = self.scope {
            params.push(("scope".to_string(), scope.to_string()));
        }
        push_str(&mut params, "label", self.label.as_deref());
        self.common.push_pairs(&mut params);
        params
    }
}

impl IterationsQuery {
    pub fn with_scope(mut self, scope: IterationScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Only iterations containing stories with this label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}
