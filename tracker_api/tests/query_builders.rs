use tracker_api::types::{StoryState, StoryType};
use tracker_api::{
    ActivityQuery, CommentsQuery, IterationScope, IterationsQuery, Query, StoriesQuery,
    TasksQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/projects/99/stories").unwrap()
}

fn keys(pairs: &[(String, String)]) -> Vec<&str> {
    pairs.iter().map(|(k, _)| k.as_str()).collect()
}

#[test]
fn default_queries_are_empty() {
    assert!(IterationsQuery::default().to_query_pairs().is_empty());
    assert!(StoriesQuery::default().to_query_pairs().is_empty());
    assert!(ActivityQuery::default().to_query_pairs().is_empty());
    assert!(TasksQuery::default().to_query_pairs().is_empty());
    assert!(CommentsQuery::default().to_query_pairs().is_empty());
}

#[test]
fn default_query_leaves_url_untouched() {
    let url = StoriesQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn limit_renders_as_decimal() {
    let url = StoriesQuery::default().with_limit(25).add_to_url(&base_url());
    assert_eq!(url.query(), Some("limit=25"));
}

#[test]
fn limit_and_offset_only() {
    let url = StoriesQuery::default()
        .with_limit(10)
        .with_offset(20)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("limit=10&offset=20"));
}

#[test]
fn each_field_appears_once() {
    let pairs = StoriesQuery::default()
        .with_state(StoryState::Delivered)
        .with_story_type(StoryType::Chore)
        .with_label("ops")
        .with_filter("mywork:DV")
        .with_limit(1)
        .with_offset(2)
        .to_query_pairs();
    assert_eq!(
        keys(&pairs),
        vec!["with_state", "with_story_type", "with_label", "filter", "limit", "offset"]
    );
}

#[test]
fn later_builder_call_wins() {
    let pairs = StoriesQuery::default()
        .with_limit(5)
        .with_limit(50)
        .to_query_pairs();
    assert_eq!(pairs, vec![("limit".to_string(), "50".to_string())]);
}

#[test]
fn iterations_scope_and_label() {
    let url = IterationsQuery::default()
        .with_scope(IterationScope::Done)
        .with_label("q3")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("scope=done&label=q3"));
}

#[test]
fn empty_strings_are_omitted() {
    let pairs = StoriesQuery::default()
        .with_label("")
        .with_filter("")
        .to_query_pairs();
    assert!(pairs.is_empty());
}

#[test]
fn tasks_query_paging() {
    let url = TasksQuery::default().with_offset(3).add_to_url(&base_url());
    assert_eq!(url.query(), Some("offset=3"));
}

#[test]
fn activity_since_version() {
    let pairs = ActivityQuery::default().with_since_version(0).to_query_pairs();
    assert_eq!(
        pairs,
        vec![("since_version".to_string(), "0".to_string())]
    );
}
