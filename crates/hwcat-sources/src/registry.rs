// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The source allowlist registry.
//!
//! Maps registrable domains to the set of [`SourceType`]s each may be cited
//! for, plus a denylist of aggregator and community-database domains that
//! are never acceptable. The registry is assembled once at startup from the
//! built-in table and the `[sources]` config section, then shared read-only.

use std::collections::{BTreeMap, BTreeSet};

use hwcat_config::SourcesConfig;
use hwcat_core::SourceType;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{host_contains_domain, registrable_domain};

use SourceType::*;

/// Built-in grants. A domain may appear more than once; its grants merge.
const BUILTIN_ALLOWED: &[(&str, &[SourceType], &str)] = &[
    ("pccomponentes.com", &[PriceAvailability], "PcComponentes, Spanish retailer"),
    ("intel.com", &[CpuSpecs], "Intel ARK and product pages"),
    ("amd.com", &[CpuSpecs], "AMD Ryzen processor pages"),
    ("amd.com", &[GpuSpecs], "AMD Radeon graphics pages"),
    ("nvidia.com", &[GpuSpecs], "NVIDIA GeForce product pages"),
    // Reserved for component categories the catalog does not carry yet.
    ("asus.com", &[MotherboardSpecs, CoolingSpecs], "ASUS product pages"),
    ("msi.com", &[MotherboardSpecs, CoolingSpecs], "MSI product pages"),
    ("gigabyte.com", &[MotherboardSpecs], "Gigabyte product pages"),
    ("asrock.com", &[MotherboardSpecs], "ASRock product pages"),
    (
        "corsair.com",
        &[RamSpecs, PsuSpecs, CaseSpecs, CoolingSpecs, StorageSpecs],
        "Corsair product pages",
    ),
    ("gskill.com", &[RamSpecs], "G.Skill memory pages"),
    ("crucial.com", &[RamSpecs, StorageSpecs], "Crucial memory and storage pages"),
    ("samsung.com", &[StorageSpecs, RamSpecs], "Samsung semiconductor pages"),
    ("westerndigital.com", &[StorageSpecs], "Western Digital product pages"),
    ("seagate.com", &[StorageSpecs], "Seagate product pages"),
    ("evga.com", &[PsuSpecs], "EVGA power supply pages"),
    ("noctua.at", &[CoolingSpecs], "Noctua cooling pages"),
    ("bequiet.com", &[PsuSpecs, CoolingSpecs, CaseSpecs], "be quiet! product pages"),
    ("seasonic.com", &[PsuSpecs], "Seasonic power supply pages"),
    (
        "fractal-design.com",
        &[CaseSpecs, CoolingSpecs, PsuSpecs],
        "Fractal Design product pages",
    ),
    ("nzxt.com", &[CaseSpecs, CoolingSpecs], "NZXT product pages"),
];

/// Aggregators and community databases. Never valid for any source type.
const BUILTIN_FORBIDDEN: &[&str] = &[
    "pcpartpicker.com",
    "techpowerup.com",
    "cpu-world.com",
    "wikichip.org",
    "userbenchmark.com",
    "passmark.com",
];

/// One approved domain and everything it is granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowedDomain {
    /// Registrable domain, lower-case.
    pub domain: String,
    /// Union of every grant registered for this domain.
    pub types: BTreeSet<SourceType>,
    /// Descriptions of each distinct registration, joined with `; `.
    pub description: String,
}

/// Immutable allowlist and denylist of source domains.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    allowed: BTreeMap<String, AllowedDomain>,
    forbidden: BTreeSet<String>,
}

impl SourceRegistry {
    /// Start building a registry from nothing.
    pub fn builder() -> SourceRegistryBuilder {
        SourceRegistryBuilder::default()
    }

    /// The built-in registry with no configured additions.
    pub fn builtin() -> Self {
        Self::builtin_builder().build()
    }

    /// The built-in registry extended by the `[sources]` config section.
    ///
    /// Lookups use registrable domains, so a grant written for a subdomain
    /// (`shop.corsair.com`) is registered under `corsair.com`.
    pub fn from_config(config: &SourcesConfig) -> Self {
        let mut builder = Self::builtin_builder();
        for grant in &config.extra_allowed {
            let configured = grant.domain.to_ascii_lowercase();
            let domain = registrable_domain(&configured);
            if domain != configured {
                warn!(
                    configured = %configured,
                    registered = domain,
                    "extra source grant reduced to its registrable domain"
                );
            }
            builder = builder.allow(domain, grant.types.iter().copied(), &grant.description);
        }
        for domain in &config.extra_forbidden {
            builder = builder.forbid(domain);
        }
        let registry = builder.build();
        debug!(
            allowed = registry.allowed.len(),
            forbidden = registry.forbidden.len(),
            "source registry assembled"
        );
        registry
    }

    fn builtin_builder() -> SourceRegistryBuilder {
        let mut builder = Self::builder();
        for (domain, types, description) in BUILTIN_ALLOWED {
            builder = builder.allow(domain, types.iter().copied(), description);
        }
        for domain in BUILTIN_FORBIDDEN {
            builder = builder.forbid(domain);
        }
        builder
    }

    /// Whether `domain` is registered with at least one grant.
    pub fn is_domain_allowed(&self, domain: &str) -> bool {
        self.get(domain).is_some_and(|entry| !entry.types.is_empty())
    }

    /// The grant set for `domain`; empty when unregistered.
    pub fn allowed_types(&self, domain: &str) -> BTreeSet<SourceType> {
        self.get(domain)
            .map(|entry| entry.types.clone())
            .unwrap_or_default()
    }

    /// Look up a registered domain.
    pub fn get(&self, domain: &str) -> Option<&AllowedDomain> {
        self.allowed.get(&domain.to_ascii_lowercase())
    }

    /// The forbidden domain `hostname` falls under, if any.
    ///
    /// Matches when the forbidden domain occurs as a whole-label run anywhere
    /// in the hostname, so subdomains and mirror-style prefixes are caught.
    pub fn forbidden_match(&self, hostname: &str) -> Option<&str> {
        let hostname = hostname.to_ascii_lowercase();
        self.forbidden
            .iter()
            .find(|domain| host_contains_domain(&hostname, domain))
            .map(String::as_str)
    }

    /// All approved domains, sorted.
    pub fn allowed(&self) -> impl Iterator<Item = &AllowedDomain> {
        self.allowed.values()
    }

    /// All forbidden domains, sorted.
    pub fn forbidden(&self) -> impl Iterator<Item = &str> {
        self.forbidden.iter().map(String::as_str)
    }
}

/// Collects registrations before the registry is frozen.
#[derive(Debug, Default)]
pub struct SourceRegistryBuilder {
    allowed: BTreeMap<String, AllowedDomain>,
    forbidden: BTreeSet<String>,
}

impl SourceRegistryBuilder {
    /// Grant `types` to `domain`, merging with any earlier grant.
    pub fn allow(
        mut self,
        domain: &str,
        types: impl IntoIterator<Item = SourceType>,
        description: &str,
    ) -> Self {
        let key = domain.to_ascii_lowercase();
        let entry = self
            .allowed
            .entry(key.clone())
            .or_insert_with(|| AllowedDomain {
                domain: key,
                types: BTreeSet::new(),
                description: String::new(),
            });
        entry.types.extend(types);

        let description = description.trim();
        if !description.is_empty() && !entry.description.split("; ").any(|d| d == description) {
            if !entry.description.is_empty() {
                entry.description.push_str("; ");
            }
            entry.description.push_str(description);
        }
        self
    }

    /// Add `domain` to the denylist.
    pub fn forbid(mut self, domain: &str) -> Self {
        self.forbidden.insert(domain.to_ascii_lowercase());
        self
    }

    pub fn build(self) -> SourceRegistry {
        SourceRegistry {
            allowed: self.allowed,
            forbidden: self.forbidden,
        }
    }
}
