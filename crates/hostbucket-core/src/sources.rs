//! Static registry of blocklist sources.
//!
//! Which sources are fetched is decided here, in [`ENABLED`], not at runtime.

use anyhow::{Context, Result};

/// One blocklist source: a unique id, where to fetch it, and what it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Source {
    pub id: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

impl Source {
    /// Host part of the source URL, for display.
    pub fn host(&self) -> Result<String> {
        let parsed = url::Url::parse(self.url)
            .with_context(|| format!("invalid URL for source {}: {}", self.id, self.url))?;
        parsed
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("URL missing host for source {}", self.id))
    }
}

pub const REGISTRY: &[Source] = &[
    Source {
        id: "yoyo",
        url: "https://pgl.yoyo.org/adservers/serverlist.php?hostformat=hosts&mimetype=plaintext&useip=0.0.0.0",
        description: "Peter Lowe's ad and tracking server list (hosts format)",
    },
    Source {
        id: "windows_spy",
        url: "https://raw.githubusercontent.com/crazy-max/WindowsSpyBlocker/master/data/hosts/spy.txt",
        description: "WindowsSpyBlocker telemetry hosts",
    },
    Source {
        id: "stevenblack",
        url: "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
        description: "StevenBlack unified hosts (adware + malware)",
    },
    Source {
        id: "adguard_dns",
        url: "https://adguardteam.github.io/AdGuardSDNSFilter/Filters/filter.txt",
        description: "AdGuard DNS filter (adblock syntax)",
    },
    Source {
        id: "oisd_small",
        url: "https://small.oisd.nl/",
        description: "OISD small (adblock syntax)",
    },
    Source {
        id: "easyprivacy",
        url: "https://easylist.to/easylist/easyprivacy.txt",
        description: "EasyPrivacy tracking filters (adblock syntax)",
    },
];

/// Sources fetched by `generate`, in processing order. Larger lists stay disabled
/// because the device filesystem is small.
pub const ENABLED: &[&str] = &["yoyo", "windows_spy"];

pub fn find(id: &str) -> Option<&'static Source> {
    REGISTRY.iter().find(|s| s.id == id)
}

pub fn is_enabled(id: &str) -> bool {
    ENABLED.contains(&id)
}

/// Enabled sources in declared [`ENABLED`] order. Unknown ids are skipped with a warning.
pub fn enabled_sources() -> Vec<&'static Source> {
    ENABLED
        .iter()
        .filter_map(|id| {
            let found = find(id);
            if found.is_none() {
                tracing::warn!(source = id, "enabled source not in registry");
            }
            found
        })
        .collect()
}
