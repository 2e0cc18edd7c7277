//! Markdown checklist rendering

/// Render one comment as a Markdown task item followed by a block quote
///
/// ```text
/// - [ ] Page 3 (MINOR)
///     > line one
///     > line two
/// ```
///
/// Empty lines inside `body` are kept as empty quote lines. An empty
/// `body` renders the header alone; callers skip those comments.
pub fn render_comment(page: u32, severity: &str, body: &str) -> String {
    let mut result = if severity.is_empty() {
        format!("- [ ] Page {}\n", page)
    } else {
        format!("- [ ] Page {} ({})\n", page, severity)
    };

    if !body.is_empty() {
        for line in body.split('\n') {
            result.push_str(&format!("    > {}\n", line));
        }
    }

    result
}
