use serde::{Deserialize, Serialize};

/// Upper bound on output length passed to every model call, in the
/// backend tokenizer's units.
pub const MAX_LENGTH: u16 = 500;

/// Number of candidate sequences requested per call.
pub const NUM_RETURN_SEQUENCES: u8 = 1;

/// Parameters for a single call into a text-generation backend.
///
/// The length bound and sequence count are fixed at construction and can
/// only be read back, so no caller can widen them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    max_length: u16,
    num_return_sequences: u8,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_length: MAX_LENGTH,
            num_return_sequences: NUM_RETURN_SEQUENCES,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn max_length(&self) -> u16 {
        self.max_length
    }

    pub fn num_return_sequences(&self) -> u8 {
        self.num_return_sequences
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSequence {
    pub generated_text: String,
}
