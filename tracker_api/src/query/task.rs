use super::{Query, QueryCommon};

/// Paging for `GET /stories/{id}/tasks`.
#[derive(Clone, Debug, Default)]
pub struct TasksQuery {
    pub common: QueryCommon,
}

impl Query for TasksQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.common.push_pairs(&mut params);
        params
    }
}
