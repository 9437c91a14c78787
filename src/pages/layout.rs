//! Shared page chrome and HTML helpers. The pages are small enough to be
//! rendered directly; every interpolated user value goes through [`escape`].

use axum::response::Html;

/// Disables the submit button once the form is on its way; any response
/// re-renders a fresh form, so the guard cannot stay stuck.
pub const SUBMIT_GUARD: &str = "this.querySelector('button[type=submit]').disabled=true";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #eef2ff; }
header, main, footer { max-width: 60rem; margin: 0 auto; padding: 1rem; }
nav { display: flex; justify-content: space-between; align-items: center; }
nav .links a { margin-left: 1rem; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 4px rgba(0,0,0,.15); padding: 1.5rem; max-width: 28rem; margin: 2rem auto; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-size: .875rem; margin-bottom: .25rem; }
.field input { width: 100%; box-sizing: border-box; padding: .5rem; border: 1px solid #d1d5db; border-radius: .25rem; }
.field-error { color: #dc2626; font-size: .875rem; margin: .25rem 0 0; }
.server-errors { background: #fef2f2; border: 1px solid #fecaca; border-radius: .375rem; padding: .75rem; margin-bottom: 1rem; }
.server-errors p { color: #dc2626; font-size: .875rem; margin: 0; }
.notice { background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: .375rem; padding: .75rem; margin-bottom: 1rem; font-size: .875rem; }
button[type=submit] { width: 100%; padding: .625rem; border: 0; border-radius: .375rem; background: #2563eb; color: #fff; font-size: 1rem; cursor: pointer; }
button[type=submit]:disabled { opacity: .6; }
footer { border-top: 1px solid #e5e7eb; margin-top: 3rem; color: #6b7280; font-size: .875rem; }
"#;

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | QuickCoach</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n<footer>© 2025 QuickCoach. All rights reserved.</footer>\n</body>\n</html>",
        escape(title)
    ))
}

pub fn escape(s: &str) -> String {
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

pub fn server_errors(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<p>{}</p>", escape(m)))
        .collect();
    format!("<div class=\"server-errors\">{items}</div>")
}

pub fn text_field(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    error: Option<&str>,
) -> String {
    let error_html = error
        .map(|m| format!("<p class=\"field-error\">{}</p>", escape(m)))
        .unwrap_or_default();
    format!(
        "<div class=\"field\"><label for=\"{name}\">{}</label>\
         <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{}\">{error_html}</div>",
        escape(label),
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("hi")&'"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&amp;&#39;"
        );
    }

    #[test]
    fn text_field_escapes_the_submitted_value() {
        let html = text_field("Username", "username", "text", "<bad>", None);
        assert!(html.contains("value=\"&lt;bad&gt;\""));
        assert!(!html.contains("<bad>"));
    }

    #[test]
    fn server_errors_renders_nothing_when_empty() {
        assert!(server_errors(&[]).is_empty());
    }
}
