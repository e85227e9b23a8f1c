//! Project-scoped client for the tracker REST API.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    connection::{Connection, Method, Request},
    pagination::Pagination,
    query::{ActivityQuery, CommentsQuery, IterationsQuery, Query, StoriesQuery, TasksQuery},
    types::{Activity, Blocker, Comment, Iteration, ProjectMembership, Story, StoryID, Task},
    Error,
};

const DELIVERED: &str = r#"{"current_state":"delivered"}"#;

/// Entry point holding the shared connection. Hands out [`ProjectClient`]s.
pub struct Client<C> {
    conn: Arc<C>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

impl<C: Connection> Client<C> {
    /// Wraps a connection for use by every project client handed out.
    pub fn new(conn: C) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    /// Builds a client over a connection that is already shared.
    pub fn from_arc(conn: Arc<C>) -> Self {
        Self { conn }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// A client whose every request is addressed under `/projects/{project_id}`.
    pub fn project(&self, project_id: u64) -> ProjectClient<C> {
        ProjectClient::new(project_id, Arc::clone(&self.conn))
    }
}

/// Client bound to a single project.
///
/// Holds no mutable state: every operation is one request/response round
/// trip through the connection, so it is as safe to share between tasks as
/// the connection is.
pub struct ProjectClient<C> {
    id: u64,
    conn: Arc<C>,
}

impl<C> Clone for ProjectClient<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            conn: Arc::clone(&self.conn),
        }
    }
}

impl<C: Connection> ProjectClient<C> {
    /// Binds `conn` to project `id`.
    pub fn new(id: u64, conn: Arc<C>) -> Self {
        Self { id, conn }
    }

    /// The project every request is addressed to.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Builds a request for `path`, relative to this project.
    pub fn create_request(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Request, Error> {
        let project_path = format!("/projects/{}{}", self.id, path);
        self.conn.create_request(method, project_path.as_str(), params)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<(T, Pagination), Error>
    where
        T: DeserializeOwned + Send,
        Q: Query,
    {
        let params = query.map(|q| q.to_query_pairs()).unwrap_or_default();
        let request = self.create_request(Method::Get, path, &params)?;
        self.conn.execute_into(request).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, Error>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned + Send,
    {
        let mut request = self.create_request(method, path, &[])?;
        request.set_json_body(body)?;
        let (value, _) = self.conn.execute_into(request).await?;
        Ok(value)
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.create_request(Method::Delete, path, &[])?;
        self.conn.execute(request).await?;
        Ok(())
    }

    /// Lists iterations matching the query, with pagination.
    pub async fn iterations(
        &self,
        query: &IterationsQuery,
    ) -> Result<(Vec<Iteration>, Pagination), Error> {
        self.get("/iterations", Some(query)).await
    }

    /// Lists stories matching the query, with pagination.
    pub async fn stories(&self, query: &StoriesQuery) -> Result<(Vec<Story>, Pagination), Error> {
        self.get("/stories", Some(query)).await
    }

    /// Fetches a single story by id.
    pub async fn story(&self, story_id: StoryID) -> Result<Story, Error> {
        let (story, _) = self
            .get::<_, StoriesQuery>(format!("/stories/{}", story_id).as_str(), None)
            .await?;
        Ok(story)
    }

    /// Fetches the activity feed of a story.
    pub async fn story_activity(
        &self,
        story_id: StoryID,
        query: &ActivityQuery,
    ) -> Result<Vec<Activity>, Error> {
        let (activity, _) = self
            .get(format!("/stories/{}/activity", story_id).as_str(), Some(query))
            .await?;
        Ok(activity)
    }

    /// Fetches the tasks of a story.
    pub async fn story_tasks(
        &self,
        story_id: StoryID,
        query: &TasksQuery,
    ) -> Result<Vec<Task>, Error> {
        let (tasks, _) = self
            .get(format!("/stories/{}/tasks", story_id).as_str(), Some(query))
            .await?;
        Ok(tasks)
    }

    /// Fetches the comments on a story.
    pub async fn story_comments(
        &self,
        story_id: StoryID,
        query: &CommentsQuery,
    ) -> Result<Vec<Comment>, Error> {
        let (comments, _) = self
            .get(format!("/stories/{}/comments", story_id).as_str(), Some(query))
            .await?;
        Ok(comments)
    }

    /// Fetches the blockers of a story.
    pub async fn story_blockers(&self, story_id: StoryID) -> Result<Vec<Blocker>, Error> {
        let (blockers, _) = self
            .get::<_, StoriesQuery>(format!("/stories/{}/blockers", story_id).as_str(), None)
            .await?;
        Ok(blockers)
    }

    /// Creates a story. The returned record carries the service-assigned id.
    pub async fn create_story(&self, story: &Story) -> Result<Story, Error> {
        self.send_json(Method::Post, "/stories", story).await
    }

    /// Replaces the fields set on `story`. `story.id` selects the target.
    pub async fn update_story(&self, story: &Story) -> Result<Story, Error> {
        let story_id = story
            .id
            .ok_or_else(|| Error::InvalidRequest("story to update has no id".to_string()))?;
        self.send_json(Method::Put, format!("/stories/{}", story_id).as_str(), story)
            .await
    }

    /// Moves a story to `delivered`.
    pub async fn deliver_story(&self, story_id: StoryID) -> Result<(), Error> {
        let mut request =
            self.create_request(Method::Put, format!("/stories/{}", story_id).as_str(), &[])?;
        request.set_raw_json_body(DELIVERED)?;
        self.conn.execute(request).await?;
        Ok(())
    }

    /// Delivers a story, then comments on it.
    ///
    /// The comment is only posted if delivery succeeded. A failed comment is
    /// returned as the error; the story stays delivered.
    pub async fn deliver_story_with_comment(
        &self,
        story_id: StoryID,
        text: &str,
    ) -> Result<Comment, Error> {
        self.deliver_story(story_id).await?;
        self.create_comment(story_id, &Comment::with_text(text))
            .await
    }

    /// Deletes a story.
    pub async fn delete_story(&self, story_id: StoryID) -> Result<(), Error> {
        self.delete(format!("/stories/{}", story_id).as_str()).await
    }

    /// Adds a task to a story.
    pub async fn create_task(&self, story_id: StoryID, task: &Task) -> Result<Task, Error> {
        self.send_json(
            Method::Post,
            format!("/stories/{}/tasks", story_id).as_str(),
            task,
        )
        .await
    }

    /// Updates a task. `task.id` selects the target.
    pub async fn update_task(&self, story_id: StoryID, task: &Task) -> Result<Task, Error> {
        let task_id = task
            .id
            .ok_or_else(|| Error::InvalidRequest("task to update has no id".to_string()))?;
        self.send_json(
            Method::Put,
            format!("/stories/{}/tasks/{}", story_id, task_id).as_str(),
            task,
        )
        .await
    }

    /// Deletes a task from a story.
    pub async fn delete_task(&self, story_id: StoryID, task_id: u64) -> Result<(), Error> {
        self.delete(format!("/stories/{}/tasks/{}", story_id, task_id).as_str())
            .await
    }

    /// Posts a comment on a story.
    pub async fn create_comment(
        &self,
        story_id: StoryID,
        comment: &Comment,
    ) -> Result<Comment, Error> {
        self.send_json(
            Method::Post,
            format!("/stories/{}/comments", story_id).as_str(),
            comment,
        )
        .await
    }

    /// Adds a blocker to a story.
    pub async fn create_blocker(
        &self,
        story_id: StoryID,
        blocker: &Blocker,
    ) -> Result<Blocker, Error> {
        self.send_json(
            Method::Post,
            format!("/stories/{}/blockers", story_id).as_str(),
            blocker,
        )
        .await
    }

    /// Fetches the project's memberships.
    pub async fn memberships(&self) -> Result<Vec<ProjectMembership>, Error> {
        let (memberships, _) = self.get::<_, StoriesQuery>("/memberships", None).await?;
        Ok(memberships)
    }
}
