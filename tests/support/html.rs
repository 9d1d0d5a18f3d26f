use todolist::adapter::outbound::view::html::escape;
use todolist::domain::DEFAULT_ITEM_NAMES;

fn between<'a>(html: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(i) = rest.find(start) {
        rest = &rest[i + start.len()..];
        let Some(j) = rest.find(end) else { break };
        found.push(&rest[..j]);
        rest = &rest[j..];
    }
    found
}

/// Item ids in display order, read from the delete checkboxes.
pub fn item_ids(html: &str) -> Vec<String> {
    between(html, "name=\"checkbox\" value=\"", "\"")
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Item names in display order, still HTML-escaped.
pub fn item_names(html: &str) -> Vec<String> {
    between(html, "<p>", "</p>")
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The list heading.
pub fn title(html: &str) -> String {
    between(html, "<h1>", "</h1>")
        .first()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Default item names as they appear in rendered markup.
pub fn default_names() -> Vec<String> {
    DEFAULT_ITEM_NAMES.iter().map(|name| escape(name)).collect()
}
