//! Prompt construction for the idea generator.

/// Sampling temperature sent with every idea request.
pub const TEMPERATURE: f32 = 0.8;

/// Nucleus-sampling top-p sent with every idea request.
pub const TOP_P: f32 = 0.9;

/// Build the idea prompt for a topic.
///
/// The topic is substituted as-is, no escaping or trimming.
///
/// ```
/// use showcase_core::prompt::build_prompt;
///
/// let prompt = build_prompt("Sustainable Living");
/// assert!(prompt.contains("this theme: Sustainable Living."));
/// ```
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Generate a creative and modern web application idea based on this theme: {}. Provide a catchy name, a one-sentence value proposition, and three key features.",
        topic
    )
}
