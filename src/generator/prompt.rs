/// The system persona sent with every generation request.
pub const JOURNALIST_PERSONA: &str =
    "You are a professional journalist for a global news site.";

/// The user-prompt template instructing the model how to write and format
/// the article.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const ARTICLE_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

/// Build the user prompt for a topic and language code.
pub fn build_article_prompt(topic: &str, language: &str) -> String {
    ARTICLE_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{language}", language)
}
