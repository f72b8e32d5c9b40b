use super::controller::View;
use crate::blog::MISSING_TOPIC_MESSAGE;

pub const TITLE: &str = "AI Blog Generator";
pub const INSTRUCTIONS: &str = "Enter a topic, and I will generate a blog post for you.";
pub const TOPIC_LABEL: &str = "Enter Blog Topic:";
pub const BUTTON_LABEL: &str = "Generate Blog";
pub const RESULT_HEADING: &str = "Generated Blog Post:";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;\
padding:0 1rem;line-height:1.5}\
input[type=text]{width:100%;padding:.4rem;box-sizing:border-box}\
button{margin-top:.6rem;padding:.4rem 1rem}\
.output{white-space:pre-wrap}\
.error{color:#b00020}";

/// Renders the whole page with `topic` echoed in the input field. `view`
/// is `None` until the trigger has fired.
pub fn render_page(topic: &str, view: Option<&View>) -> String {
    let output = match view {
        None => String::new(),
        Some(View::MissingTopic) => format!("<p>{MISSING_TOPIC_MESSAGE}</p>\n"),
        Some(View::Generated(post)) => format!(
            "<h3>{RESULT_HEADING}</h3>\n<div class=\"output\">{}</div>\n",
            escape_html(&post.output)
        ),
        Some(View::Failed { reason }) => format!(
            "<p class=\"error\">Blog generation failed: {}</p>\n",
            escape_html(reason)
        ),
    };
    let topic = escape_html(topic);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{TITLE}</h1>
<p>{INSTRUCTIONS}</p>
<form method="post" action="/">
<label for="topic">{TOPIC_LABEL}</label>
<input type="text" id="topic" name="topic" value="{topic}">
<button type="submit">{BUTTON_LABEL}</button>
</form>
{output}</body>
</html>
"#
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
