mod common;
pub use self::common::{Query, QueryCommon};

mod iteration;
pub use self::iteration::{IterationScope, IterationsQuery};

mod story;
pub use self::story::StoriesQuery;

mod activity;
pub use self::activity::ActivityQuery;

mod task;
pub use self::task::TasksQuery;

mod comment;
pub use self::comment::CommentsQuery;
