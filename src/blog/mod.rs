mod generator;
mod prompt;

pub use generator::BlogGenerator;
pub use prompt::build_prompt;

use serde::Serialize;

/// Fallback shown when the trigger fires with an empty topic.
pub const MISSING_TOPIC_MESSAGE: &str = "Please enter a topic to generate a blog.";

/// One request/result pair, created per trigger and discarded after
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub topic: String,
    pub prompt: String,
    pub output: String,
}
