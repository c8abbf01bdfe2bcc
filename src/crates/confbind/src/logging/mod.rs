//! Logging helpers
//!
//! Binding sessions are scoped with [`LogGuard`]; option values pass through
//! [`mask_if_sensitive`] before they reach a log line.

use regex::Regex;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::debug;

const REDACTED: &str = "[REDACTED]";

/// RAII guard for logging scope entry and exit
///
/// # Example
///
/// ```rust
/// use confbind::logging::LogGuard;
///
/// fn bind_component() {
///     let _guard = LogGuard::new("bind seda");
///     // exit and elapsed time are logged when the guard drops
/// }
/// ```
pub struct LogGuard {
    name: String,
    start: Instant,
}

impl LogGuard {
    /// Create a new log guard
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Entering: {}", name);

        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Get elapsed time since guard creation
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        debug!(
            "Exiting: {} (elapsed: {})",
            self.name,
            format_duration(self.start.elapsed())
        );
    }
}

/// Format duration in human-readable form
///
/// # Example
///
/// ```rust
/// use confbind::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// assert_eq!(format_duration(Duration::from_micros(500)), "500μs");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1000)
    } else if micros < 60_000_000 {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    } else {
        let seconds = micros / 1_000_000;
        format!("{}m{}s", seconds / 60, seconds % 60)
    }
}

fn secret_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)(api[\s_-]?key|apikey)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(password|passwd|pwd)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(token)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(secret)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (
                r"(?i)(authorization|auth)\s*:\s*bearer\s+\S+",
                "$1: Bearer [REDACTED]",
            ),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
        .collect()
    })
}

fn sensitive_key() -> Option<&'static Regex> {
    static KEY: OnceLock<Option<Regex>> = OnceLock::new();
    KEY.get_or_init(|| {
        Regex::new(r"(?i)(passw(or)?d|passphrase|pwd|token|secret|credential|key$)").ok()
    })
    .as_ref()
}

/// Redact secrets embedded in free text
///
/// # Example
///
/// ```rust
/// use confbind::logging::sanitize_for_logging;
///
/// let sanitized = sanitize_for_logging("password=hunter2");
/// assert!(sanitized.contains("[REDACTED]"));
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    secret_patterns()
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}

/// Value to log for an option: redacted when the option name looks secret
///
/// Values of other options are still passed through [`sanitize_for_logging`].
pub fn mask_if_sensitive(key: &str, value: &str) -> String {
    match sensitive_key() {
        Some(re) if re.is_match(key) => REDACTED.to_string(),
        _ => sanitize_for_logging(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(500)), "500μs");
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
    }

    #[test]
    fn test_sanitize_password() {
        let sanitized = sanitize_for_logging("password: secret123");
        assert!(sanitized.contains("[REDACTED]"));
        assert!(!sanitized.contains("secret123"));
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let sanitized = sanitize_for_logging("Authorization: Bearer abc123xyz");
        assert!(!sanitized.contains("abc123xyz"));
    }

    #[test]
    fn test_sanitize_preserves_safe_data() {
        let input = "queueSize=100";
        assert_eq!(sanitize_for_logging(input), input);
    }

    #[test]
    fn test_mask_if_sensitive() {
        assert_eq!(mask_if_sensitive("password", "hunter2"), "[REDACTED]");
        assert_eq!(mask_if_sensitive("camel.component.kafka.saslJaasConfig", "x"), "x");
        assert_eq!(mask_if_sensitive("accessKey", "AKIA"), "[REDACTED]");
        assert_eq!(mask_if_sensitive("authToken", "abc"), "[REDACTED]");
        assert_eq!(mask_if_sensitive("queueSize", "100"), "100");
        assert_eq!(mask_if_sensitive("keyStore", "/etc/ks"), "/etc/ks");
    }

    #[test]
    fn test_log_guard_elapsed() {
        let guard = LogGuard::new("bind");
        std::thread::sleep(Duration::from_millis(10));
        assert!(guard.elapsed() >= Duration::from_millis(10));
    }
}
