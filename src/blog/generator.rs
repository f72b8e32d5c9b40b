use crate::{
    Error, Result,
    generation::{GenerationRequest, TextGenerator},
};
use tracing::{debug, info};

/// Owns the process-wide text-generation handle and turns prompts into
/// finished blog posts.
pub struct BlogGenerator {
    generator: Box<dyn TextGenerator>,
}

impl BlogGenerator {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> String {
        self.generator.model()
    }

    /// Issues exactly one generation call and returns the first sequence
    /// with surrounding whitespace removed.
    pub async fn generate_blog(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest::new(prompt);
        info!(
            "Generating blog post ({} prompt chars, max_length={})",
            prompt.chars().count(),
            request.max_length()
        );

        let sequences = self.generator.generate(request).await?;
        let first = sequences.into_iter().next().ok_or(Error::EmptyGeneration)?;
        let output = first.generated_text.trim().to_string();

        debug!("Generated {} chars", output.chars().count());
        Ok(output)
    }
}
