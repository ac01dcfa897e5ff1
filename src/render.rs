//! HTML for the search page.

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>Поиск комнат</title>
</head>
<body>
<h1>Поиск комнат</h1>
<form method="post" action="/">
<label>Пол (F/M): <input type="text" name="sex" value="F" maxlength="1"></label>
<label>Этаж: <input type="number" name="floor" value="1"></label>
<label>Количество мест: <input type="number" name="capacity" value="1"></label>
<button type="submit">Найти</button>
</form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the form, followed by either the search result or an error.
pub fn index_page(rooms: Option<&str>, error: Option<&str>) -> String {
    let mut page = String::from(PAGE_HEAD);
    if let Some(error) = error {
        page.push_str(&format!(r#"<p class="error">{}</p>"#, escape(error)));
        page.push('\n');
    }
    if let Some(rooms) = rooms {
        page.push_str(&format!(r#"<p class="rooms">{}</p>"#, escape(rooms)));
        page.push('\n');
    }
    page.push_str(PAGE_TAIL);
    page
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
