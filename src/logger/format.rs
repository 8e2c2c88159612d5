//! Access log formats
//!
//! One line per answered request, in `combined` (Apache/Nginx combined),
//! `common` (CLF), or `json` format.

use chrono::Local;

/// Everything one access log line needs.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// New entry stamped with the current time; status and sizes are filled
    /// in after dispatch.
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the entry in the named format; unknown names fall back to
    /// `combined`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    fn request_line(&self) -> String {
        let uri = match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        };
        format!("{} {} HTTP/{}", self.method, uri, self.http_version)
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes "$referer" "$user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format (CLF)
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1:4242".to_string(),
            "GET".to_string(),
            "/files/a.txt".to_string(),
        );
        entry.status = 404;
        entry.body_bytes = 88;
        entry.user_agent = Some("curl/8.0".to_string());
        entry
    }

    #[test]
    fn test_common_format() {
        let line = entry().format("common");
        assert!(line.contains("192.168.1.1:4242"));
        assert!(line.contains("\"GET /files/a.txt HTTP/1.1\""));
        assert!(line.contains("404 88"));
        assert!(!line.contains("curl/8.0"));
    }

    #[test]
    fn test_combined_format_includes_user_agent() {
        let line = entry().format("combined");
        assert!(line.contains("curl/8.0"));
    }

    #[test]
    fn test_json_format_is_parseable() {
        let line = entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], 404);
        assert_eq!(value["path"], "/files/a.txt");
        assert_eq!(value["referer"], serde_json::Value::Null);
    }
}
