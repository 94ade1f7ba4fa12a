//! HTML renderer
//!
//! Renders journal pages as HTML. Every piece of user-supplied text goes
//! through `escape_html`.

use crate::domain::entities::{Entry, Sentiment};

/// Longest content preview shown on the list page, in characters
const PREVIEW_LEN: usize = 120;

/// Render the list of all entries, with a quick-add form
pub fn render_home(entries: &[Entry]) -> String {
    let mut body = String::new();

    body.push_str("<h1>My Journal</h1>\n");
    body.push_str("<p><a href=\"/new\">Write a new entry</a></p>\n");

    if entries.is_empty() {
        body.push_str("<p><em>No entries yet.</em></p>\n");
    } else {
        body.push_str("<ul class=\"entries\">\n");
        for entry in entries {
            body.push_str(&render_entry_row(entry));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<h2>Quick add</h2>\n");
    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str(&title_and_content_fields());
    body.push_str("  <label for=\"sentiment\">Sentiment</label>\n");
    body.push_str("  <select id=\"sentiment\" name=\"sentiment\">\n");
    body.push_str("    <option value=\"\">Detect automatically</option>\n");
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        body.push_str(&format!(
            "    <option value=\"{0}\">{0}</option>\n",
            sentiment
        ));
    }
    body.push_str("  </select>\n");
    body.push_str("  <button type=\"submit\">Save</button>\n");
    body.push_str("</form>\n");

    layout("My Journal", &body)
}

/// Render the blank new-entry form
pub fn render_new_entry_form() -> String {
    let mut body = String::new();

    body.push_str("<h1>New Entry</h1>\n");
    body.push_str("<form method=\"post\" action=\"/new\">\n");
    body.push_str(&title_and_content_fields());
    body.push_str("  <button type=\"submit\">Save</button>\n");
    body.push_str("</form>\n");
    body.push_str("<p><a href=\"/\">Back to all entries</a></p>\n");

    layout("New Entry", &body)
}

/// Render a single entry
pub fn render_entry(entry: &Entry) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&entry.title)));
    body.push_str(&format!(
        "<p class=\"meta\">{} | <span class=\"sentiment {}\">{}</span></p>\n",
        entry.created_at.format("%Y-%m-%d %H:%M"),
        sentiment_class(entry.sentiment),
        entry.sentiment
    ));

    // Keep the author's paragraphs
    for paragraph in entry.content.split("\n\n").filter(|p| !p.trim().is_empty()) {
        body.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(paragraph.trim()).replace('\n', "<br>\n")
        ));
    }

    body.push_str("<p><a href=\"/\">Back to all entries</a></p>\n");

    layout(&entry.title, &body)
}

fn render_entry_row(entry: &Entry) -> String {
    format!(
        "  <li><a href=\"/entry/{}\">{}</a> <span class=\"sentiment {}\">{}</span><br>{}</li>\n",
        entry.id,
        escape_html(&entry.title),
        sentiment_class(entry.sentiment),
        entry.sentiment,
        escape_html(&truncate(&entry.content, PREVIEW_LEN))
    )
}

fn title_and_content_fields() -> String {
    let mut buf = String::new();
    buf.push_str("  <label for=\"title\">Title</label>\n");
    buf.push_str("  <input id=\"title\" name=\"title\" type=\"text\" maxlength=\"200\" required>\n");
    buf.push_str("  <label for=\"content\">Content</label>\n");
    buf.push_str("  <textarea id=\"content\" name=\"content\" rows=\"8\"></textarea>\n");
    buf
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Neutral => "neutral",
        Sentiment::Negative => "negative",
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        escape_html(title),
        body
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string with ellipsis, on a character boundary
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
