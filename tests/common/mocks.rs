use async_trait::async_trait;
use blog_generator::{
    Error, Result,
    generation::{GeneratedSequence, GenerationRequest, TextGenerator},
};
use std::sync::{Arc, Mutex};

/// Mock generator that records every request it receives
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    pub responses: Arc<Mutex<Vec<Vec<GeneratedSequence>>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub error: Option<String>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_text(self, text: &str) -> Self {
        self.add_response(vec![create_sequence(text)]);
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_response(&self, response: Vec<GeneratedSequence>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedSequence>> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::generation(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::generation("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }

    fn model(&self) -> String {
        "mock-gpt2".to_string()
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_sequence(text: &str) -> GeneratedSequence {
    GeneratedSequence {
        generated_text: text.to_string(),
    }
}
