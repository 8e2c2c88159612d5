//! Directory listings
//!
//! Renders a directory's entries as an HTML unordered list. Entries are
//! sorted by name so the page does not depend on filesystem enumeration
//! order, and names are escaped before they land in markup.

use std::path::Path;
use tokio::fs;

use crate::error::DispatchError;

/// Render the listing page for `dir`.
pub async fn render(dir: &Path, request_path: &str) -> Result<String, DispatchError> {
    let mut names = Vec::new();

    let mut entries = fs::read_dir(dir).await.map_err(|source| not_readable(request_path, source))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| not_readable(request_path, source))?
    {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let items: String = names
        .iter()
        .map(|name| format!("<li>{}</li>\n", escape_html(name)))
        .collect();

    Ok(format!(
        "<html>\n<body>\n<ul>\n{items}</ul>\n</body>\n</html>\n"
    ))
}

fn not_readable(request_path: &str, source: std::io::Error) -> DispatchError {
    DispatchError::NotReadable {
        path: request_path.to_string(),
        source,
    }
}

/// Escape the characters that would break out of the list markup.
fn escape_html(name: &str) -> String {
    name.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
