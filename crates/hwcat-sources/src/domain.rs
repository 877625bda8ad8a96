// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL parsing and reduction of hostnames to their registrable domain.

use thiserror::Error;
use url::{Host, Url};

/// Two-label public suffixes under which registrations happen one level down.
///
/// `shop.example.co.uk` reduces to `example.co.uk`, not `co.uk`.
const COMPOUND_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "com.au", "net.au", "org.au", "co.jp", "ne.jp",
    "or.jp", "co.kr", "co.nz", "co.in", "co.za", "com.br", "com.cn", "com.tw", "com.hk",
    "com.sg", "com.mx", "com.ar", "com.tr", "com.es",
];

/// The input could not be parsed as an absolute `http`/`https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid URL format: {input} ({detail})")]
pub struct InvalidUrl {
    /// The rejected input, verbatim.
    pub input: String,
    /// What was wrong with it.
    pub detail: String,
}

impl InvalidUrl {
    fn new(input: &str, detail: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            detail: detail.into(),
        }
    }
}

/// The host part of a source URL, in full and reduced form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHost {
    /// Full lower-case hostname, e.g. `ark.intel.com`.
    pub hostname: String,
    /// Registrable domain, e.g. `intel.com`. IP literals are kept as-is.
    pub domain: String,
}

/// Parse a source URL into its hostname and registrable domain.
pub fn parse_source_url(input: &str) -> Result<SourceHost, InvalidUrl> {
    let url = Url::parse(input).map_err(|e| InvalidUrl::new(input, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(InvalidUrl::new(
            input,
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }

    let host = match url.host() {
        Some(Host::Domain(name)) => {
            let hostname = name.trim_end_matches('.').to_ascii_lowercase();
            if hostname.is_empty() || hostname.split('.').any(str::is_empty) {
                return Err(InvalidUrl::new(input, "malformed host name"));
            }
            let domain = registrable_domain(&hostname).to_string();
            SourceHost { hostname, domain }
        }
        Some(Host::Ipv4(ip)) => SourceHost {
            hostname: ip.to_string(),
            domain: ip.to_string(),
        },
        Some(Host::Ipv6(ip)) => SourceHost {
            hostname: ip.to_string(),
            domain: ip.to_string(),
        },
        None => return Err(InvalidUrl::new(input, "missing host")),
    };

    Ok(host)
}

/// Extract the registrable domain from a URL.
///
/// `https://ark.intel.com/...` and `https://www.intel.com/...` both yield
/// `intel.com`. Fails rather than guessing when `url` is not a well-formed
/// absolute `http`/`https` URL.
pub fn extract_domain(url: &str) -> Result<String, InvalidUrl> {
    parse_source_url(url).map(|host| host.domain)
}

/// Reduce a lower-case hostname to its registrable domain.
pub fn registrable_domain(hostname: &str) -> &str {
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() <= 2 {
        return hostname;
    }

    let last_two = labels[labels.len() - 2..].join(".");
    let keep = if COMPOUND_SUFFIXES.contains(&last_two.as_str()) {
        3
    } else {
        2
    };

    // Byte offset of the first kept label.
    let dropped: usize = labels[..labels.len() - keep]
        .iter()
        .map(|label| label.len() + 1)
        .sum();
    &hostname[dropped..]
}

/// Whether `domain` appears as a contiguous run of whole labels in `hostname`.
///
/// `pcpartpicker.com` matches `pcpartpicker.com`, `uk.pcpartpicker.com` and
/// `pcpartpicker.com.mirror.net`, but not `notpcpartpicker.com`.
pub fn host_contains_domain(hostname: &str, domain: &str) -> bool {
    let host_labels: Vec<&str> = hostname.split('.').collect();
    let domain_labels: Vec<&str> = domain.split('.').collect();
    if domain_labels.len() > host_labels.len() {
        return false;
    }
    host_labels
        .windows(domain_labels.len())
        .any(|window| window == domain_labels.as_slice())
}
