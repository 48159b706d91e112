/// The single page of the web form: the path input and the rendered output.
pub fn index_page(path: &str, output: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Directory tree</title>
</head>
<body>
<form method="post" action="/">
<label for="path">Path</label>
<input type="text" id="path" name="path" size="60" value="{path}">
<button type="submit">Show tree</button>
</form>
<pre>{output}</pre>
</body>
</html>
"#,
        path = escape_html(path),
        output = escape_html(output),
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
