//! MIME type inference
//!
//! Best-effort Content-Type from a file extension. Returns `None` for
//! unknown extensions so the caller can apply the configured default.

use std::path::Path;

/// Infer a Content-Type from a file's extension.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => Some("text/html; charset=utf-8"),
        Some("css") => Some("text/css"),
        Some("txt" | "md") => Some("text/plain; charset=utf-8"),
        Some("xml") => Some("application/xml"),

        Some("js" | "mjs") => Some("application/javascript"),
        Some("json") => Some("application/json"),
        Some("wasm") => Some("application/wasm"),

        Some("png") => Some("image/png"),
        Some("jpg" | "jpeg") => Some("image/jpeg"),
        Some("gif") => Some("image/gif"),
        Some("svg") => Some("image/svg+xml"),
        Some("ico") => Some("image/x-icon"),
        Some("webp") => Some("image/webp"),

        Some("pdf") => Some("application/pdf"),
        Some("zip") => Some("application/zip"),
        Some("gz" | "gzip") => Some("application/gzip"),
        Some("tar") => Some("application/x-tar"),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(
            content_type_for(Path::new("index.html")),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(content_type_for(Path::new("style.css")), Some("text/css"));
        assert_eq!(
            content_type_for(Path::new("app.js")),
            Some("application/javascript")
        );
        assert_eq!(content_type_for(Path::new("logo.png")), Some("image/png"));
    }

    #[test]
    fn test_unknown_extension_is_none() {
        assert_eq!(content_type_for(Path::new("data.xyz")), None);
        assert_eq!(content_type_for(Path::new("Makefile")), None);
    }
}
