//! Fixed HTML templates for the known page regions.
//!
//! Documents are rendered exactly as the site frontend renders them: one
//! fixed template per item type, missing fields as empty strings, and no
//! schema enforcement. A document of an unexpected shape renders to an
//! empty fragment rather than an error.

use serde_json::Value;

fn text<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(Value::as_str).unwrap_or("")
}

fn items<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn entries(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Plain-text summary for the `about-text` region.
pub fn about_summary(document: &Value) -> String {
    text(document, "summary").to_string()
}

/// Full about copy for the `about-full` region.
pub fn about_full(document: &Value) -> String {
    let full = text(document, "full");
    if full.is_empty() {
        String::new()
    } else {
        format!("<p>{full}</p>")
    }
}

/// Software tool blocks for the `software-list` region.
pub fn software_list(document: &Value) -> String {
    items(document, "tools")
        .iter()
        .map(|tool| {
            format!(
                r#"<div class="software-item"><h3>{}</h3><p>{}</p></div>"#,
                text(tool, "name"),
                text(tool, "desc")
            )
        })
        .collect()
}

/// Service heading/paragraph pairs for the `services-full` region.
pub fn services_list(document: &Value) -> String {
    items(document, "list")
        .iter()
        .map(|service| {
            format!(
                "<h3>{}</h3><p>{}</p>",
                text(service, "title"),
                text(service, "text")
            )
        })
        .collect()
}

/// Project articles for the `projects-list` region.
pub fn projects_list(document: &Value) -> String {
    entries(document)
        .iter()
        .map(|project| {
            format!(
                "<article><h3>{}</h3><p>{}</p></article>",
                text(project, "title"),
                text(project, "summary")
            )
        })
        .collect()
}

/// Team member blocks for the `team-list` region.
pub fn team_list(document: &Value) -> String {
    entries(document)
        .iter()
        .map(|member| {
            format!(
                "<div><strong>{}</strong> - {}<p>{}</p></div>",
                text(member, "name"),
                text(member, "role"),
                text(member, "bio")
            )
        })
        .collect()
}
