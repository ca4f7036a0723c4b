//! Blocking HTTP GET of a source list.
//!
//! Uses the curl crate (libcurl). The whole body is buffered in memory and
//! decoded as text; invalid UTF-8 is replaced rather than rejected.

mod error;

pub use error::FetchError;

use crate::config::HostbucketConfig;
use std::time::Duration;

/// Floor for both timeouts; curl treats zero as "wait forever".
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Retrieves the body of a URL as text.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Timeouts and headers for a curl GET.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &HostbucketConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// Connect and total timeouts handed to curl, with zero raised to [`MIN_TIMEOUT`].
    pub fn effective_timeouts(&self) -> (Duration, Duration) {
        (bounded(self.connect_timeout), bounded(self.timeout))
    }
}

fn bounded(d: Duration) -> Duration {
    if d.is_zero() {
        MIN_TIMEOUT
    } else {
        d
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        let (connect_timeout, timeout) = self.effective_timeouts();
        easy.connect_timeout(connect_timeout)?;
        easy.timeout(timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }

        tracing::debug!(url, bytes = body.len(), "fetched source");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeouts_are_raised_to_floor() {
        let f = CurlFetcher {
            connect_timeout: Duration::ZERO,
            timeout: Duration::ZERO,
            user_agent: None,
        };
        assert_eq!(f.effective_timeouts(), (MIN_TIMEOUT, MIN_TIMEOUT));
    }

    #[test]
    fn nonzero_timeouts_pass_through() {
        let f = CurlFetcher {
            connect_timeout: Duration::from_millis(200),
            timeout: Duration::from_secs(45),
            user_agent: None,
        };
        assert_eq!(
            f.effective_timeouts(),
            (Duration::from_millis(200), Duration::from_secs(45))
        );
    }

    #[test]
    fn from_config_copies_settings() {
        let cfg = HostbucketConfig {
            timeout_secs: 7,
            connect_timeout_secs: 3,
            user_agent: Some("ua".into()),
            ..HostbucketConfig::default()
        };
        let f = CurlFetcher::from_config(&cfg);
        assert_eq!(f.timeout, Duration::from_secs(7));
        assert_eq!(f.connect_timeout, Duration::from_secs(3));
        assert_eq!(f.user_agent.as_deref(), Some("ua"));
    }
}
