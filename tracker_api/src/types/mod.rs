mod story;
pub use self::story::{Label, Story, StoryID, StoryState, StoryType};

mod task;
pub use self::task::Task;

mod comment;
pub use self::comment::Comment;

mod blocker;
pub use self::blocker::Blocker;

mod iteration;
pub use self::iteration::Iteration;

mod activity;
pub use self::activity::Activity;

mod membership;
pub use self::membership::{Person, ProjectMembership};
