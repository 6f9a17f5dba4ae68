//! Minimal page shell shared by the server-rendered pages.

use html_escape::encode_quoted_attribute;

/// Safe in text and in quoted attribute values.
pub fn escape(value: &str) -> String {
    encode_quoted_attribute(value).into_owned()
}

/// Wraps `body` (already escaped) in the site layout.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Staffee</title>
</head>
<body>
    <header><a href="/">Staffee</a></header>
    <main>
{body}
    </main>
</body>
</html>"#,
        title = escape(title),
    )
}
