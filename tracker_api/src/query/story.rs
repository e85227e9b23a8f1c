use crate::types::{StoryState, StoryType};

use super::{common::push_str, Query, QueryCommon};

/// Filters for `GET /stories`.
#[derive(Clone, Debug, Default)]
pub struct StoriesQuery {
    pub common: QueryCommon,
    pub state: Option<StoryState>,
    pub story_type: Option<StoryType>,
    pub label: Option<String>,
    /// Free-form search expression, same syntax as the web search box.
    pub filter: Option<String>,
}

impl Query for StoriesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(state) = self.state {
            params.push(("with_state".to_string(), state.to_string()));
        }
        if let Some(story_type) = self.story_type {
            params.push(("with_story_type".to_string(), story_type.to_string()));
        }
        push_str(&mut params, "with_label", self.label.as_deref());
        push_str(&mut params, "filter", self.filter.as_deref());
        self.common.push_pairs(&mut params);
        params
    }
}

impl StoriesQuery {
    pub fn with_state(mut self, state: StoryState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_story_type(mut self, story_type: StoryType) -> Self {
        self.story_type = Some(story_type);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }
}
