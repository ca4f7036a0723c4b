//! Domain normalization and structural validation.

/// Domains this long or longer are rejected.
pub const MAX_DOMAIN_LEN: usize = 100;

/// Normalizes a candidate domain and returns it if it passes validation.
///
/// Lowercases, removes every `*`, then removes every `www.` substring (anywhere
/// in the string, not only as the first label), repeating until none is left.
/// The result must contain a dot, be shorter than [`MAX_DOMAIN_LEN`], and consist
/// only of ASCII alphanumerics, `-` and `.`.
pub fn normalize(candidate: &str) -> Option<String> {
    let mut domain = candidate.to_lowercase().replace('*', "");
    while domain.contains("www.") {
        domain = domain.replace("www.", "");
    }

    if is_valid(&domain) {
        Some(domain)
    } else {
        None
    }
}

/// Structural check applied after normalization.
pub fn is_valid(domain: &str) -> bool {
    domain.contains('.')
        && domain.len() < MAX_DOMAIN_LEN
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}
