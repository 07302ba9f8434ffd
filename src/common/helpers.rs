// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Keeps the first character of the local part and the whole domain, which is
/// what matters when debugging institutional-domain decisions.
///
/// # Example
/// ```
/// use event_validation::common::safe_email_log;
///
/// assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}
