use chrono::{DateTime, Utc};

/// File extensions accepted by the upload endpoint.
pub const ALLOWED_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "mp4", "webm", "ogg", "pdf", "doc", "docx",
];

pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Reduce an arbitrary client-supplied filename to a safe form: path
/// separators and anything outside [A-Za-z0-9._-] become underscores.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Uploaded files get a timestamp prefix so repeated uploads of the same
/// name never collide.
pub fn timestamped_filename(now: DateTime<Utc>, filename: &str) -> String {
    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), sanitize_filename(filename))
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("plot.jpg"));
        assert!(allowed_file("layout.PDF"));
        assert!(!allowed_file("malware.exe"));
        assert!(!allowed_file("no_extension"));
        assert!(!allowed_file("trailing."));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("site plan.pdf"), "site_plan.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("a\\b\\c.png"), "c.png");
    }

    #[test]
    fn test_timestamped_filename() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            timestamped_filename(now, "plot one.jpg"),
            "20260102_030405_plot_one.jpg"
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(1024 * 1024 * 3 / 2), "1.50 MB");
    }
}
