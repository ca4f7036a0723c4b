//! Line-format detection for hosts files, adblock filters and bare domain lists.
//!
//! The checks run in a fixed order: comment, null-route hosts entry, adblock
//! `||domain^`, then bare domain. Format markers win over the bare-domain
//! fallback, so a line is never reinterpreted when the order changes output.

/// Null-route addresses that mark a hosts-file entry.
const NULL_ROUTE_PREFIXES: [&str; 2] = ["0.0.0.0", "127.0.0.1"];

/// Which format a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `0.0.0.0 domain` / `127.0.0.1 domain`
    Hosts,
    /// `||domain^`
    Adblock,
    /// `domain`
    Bare,
}

/// A candidate domain extracted from one line. Not yet normalized or validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub format: LineFormat,
    pub domain: &'a str,
}

/// Extracts a candidate domain from one line, or `None` if the line carries none.
/// Surrounding whitespace is trimmed first.
pub fn parse_line(line: &str) -> Option<Candidate<'_>> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    if is_null_route(line) {
        return line.split_whitespace().nth(1).map(|domain| Candidate {
            format: LineFormat::Hosts,
            domain,
        });
    }

    if let Some(inner) = line
        .strip_prefix("||")
        .and_then(|rest| rest.strip_suffix('^'))
    {
        return Some(Candidate {
            format: LineFormat::Adblock,
            domain: inner,
        });
    }

    if line.contains('.') && !line.contains(char::is_whitespace) {
        return Some(Candidate {
            format: LineFormat::Bare,
            domain: line,
        });
    }

    None
}

/// Convenience for callers that only want the domain text.
pub fn extract_domain(line: &str) -> Option<&str> {
    parse_line(line).map(|c| c.domain)
}

fn is_null_route(line: &str) -> bool {
    NULL_ROUTE_PREFIXES.iter().any(|prefix| {
        line.strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_yield_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# 0.0.0.0 ads.com"), None);
        assert_eq!(parse_line("! Title: EasyList"), None);
        assert_eq!(parse_line("   # indented comment"), None);
    }

    #[test]
    fn hosts_entries_take_second_token() {
        let c = parse_line("0.0.0.0 ads.example.com").unwrap();
        assert_eq!(c.format, LineFormat::Hosts);
        assert_eq!(c.domain, "ads.example.com");

        assert_eq!(extract_domain("127.0.0.1\ttracker.net"), Some("tracker.net"));
        assert_eq!(
            extract_domain("0.0.0.0   spaced.example.org  # trailing"),
            Some("spaced.example.org")
        );
    }

    #[test]
    fn bare_address_is_a_bare_candidate() {
        // Trimming removes the separator, so the address itself is the candidate.
        assert_eq!(
            parse_line("0.0.0.0 "),
            Some(Candidate {
                format: LineFormat::Bare,
                domain: "0.0.0.0",
            })
        );
        assert_eq!(extract_domain("127.0.0.1"), Some("127.0.0.1"));
    }

    #[test]
    fn prefix_must_be_followed_by_whitespace() {
        // No whitespace after the address: falls through to bare-domain handling.
        let c = parse_line("0.0.0.0ads.com").unwrap();
        assert_eq!(c.format, LineFormat::Bare);
        assert_eq!(c.domain, "0.0.0.0ads.com");
    }

    #[test]
    fn adblock_filters_take_inner_text() {
        let c = parse_line("||tracker.net^").unwrap();
        assert_eq!(c.format, LineFormat::Adblock);
        assert_eq!(c.domain, "tracker.net");
        // Options after the caret do not match the adblock form.
        assert_eq!(
            parse_line("||tracker.net^$third-party").map(|c| c.format),
            Some(LineFormat::Bare)
        );
    }

    #[test]
    fn hosts_prefix_wins_over_adblock_syntax() {
        let c = parse_line("0.0.0.0 ||ads.com^").unwrap();
        assert_eq!(c.format, LineFormat::Hosts);
        assert_eq!(c.domain, "||ads.com^");
    }

    #[test]
    fn bare_domains_need_a_dot_and_no_whitespace() {
        let c = parse_line("www.spammy.biz").unwrap();
        assert_eq!(c.format, LineFormat::Bare);
        assert_eq!(c.domain, "www.spammy.biz");
        assert_eq!(parse_line("localhost"), None);
        assert_eq!(parse_line("not a domain at all"), None);
        assert_eq!(parse_line("two words.com here"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(extract_domain("  ads.com \r"), Some("ads.com"));
    }
}
