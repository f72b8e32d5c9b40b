use crate::blog::{BlogGenerator, BlogPost, build_prompt};
use std::sync::Arc;
use tracing::{error, info};

/// What the output region of the page shows after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    MissingTopic,
    Generated(BlogPost),
    Failed { reason: String },
}

/// Binds the topic input and the "Generate Blog" trigger to the
/// generation pipeline.
#[derive(Clone)]
pub struct UiController {
    generator: Arc<BlogGenerator>,
}

impl UiController {
    pub fn new(generator: Arc<BlogGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> String {
        self.generator.model()
    }

    /// Handles the trigger. Only the empty string counts as missing;
    /// whitespace-only topics are passed through untouched.
    pub async fn on_generate(&self, topic: &str) -> View {
        if topic.is_empty() {
            info!("Generate triggered without a topic");
            return View::MissingTopic;
        }

        let prompt = build_prompt(topic);
        match self.generator.generate_blog(&prompt).await {
            Ok(output) => {
                info!("Generated blog post for topic: {}", topic);
                View::Generated(BlogPost {
                    topic: topic.to_string(),
                    prompt,
                    output,
                })
            }
            Err(e) => {
                error!("Failed to generate blog post for topic {}: {}", topic, e);
                View::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
