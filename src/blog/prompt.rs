/// Wraps a topic in the fixed blog-post instruction.
///
/// The topic is interpolated verbatim between single quotes. Quote
/// characters inside the topic are not escaped, so `cat's toys` yields
/// `'cat's toys'`.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Write a detailed blog post on the topic '{topic}'. The blog should be engaging, informative, and suitable for a general audience."
    )
}
