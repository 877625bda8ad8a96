// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the hwcat workspace.
//!
//! Spec fields are `Option` throughout: `None` means "not officially
//! published" and is carried as SQL `NULL`, never coerced to zero.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of fact a source URL may be cited for.
///
/// A domain's grant set is a set of these; a URL validated for one type says
/// nothing about any other type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    PriceAvailability,
    CpuSpecs,
    GpuSpecs,
    RamSpecs,
    MotherboardSpecs,
    PsuSpecs,
    StorageSpecs,
    CaseSpecs,
    CoolingSpecs,
}

impl SourceType {
    /// Whether this type describes a specification (as opposed to a price).
    pub fn is_specs(self) -> bool {
        !matches!(self, SourceType::PriceAvailability)
    }
}

/// The component classes the catalog stores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl ComponentKind {
    /// The source type a specs URL for this kind must be validated against.
    pub fn specs_source_type(self) -> SourceType {
        match self {
            ComponentKind::Cpu => SourceType::CpuSpecs,
            ComponentKind::Gpu => SourceType::GpuSpecs,
        }
    }

    /// Upper-case label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::Gpu => "GPU",
        }
    }
}

/// Component manufacturers known to the catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Brand {
    #[strum(serialize = "Intel")]
    Intel,
    #[strum(serialize = "AMD")]
    #[serde(rename = "AMD")]
    Amd,
    #[strum(serialize = "NVIDIA")]
    #[serde(rename = "NVIDIA")]
    Nvidia,
}

impl Brand {
    /// Manufacturer display name, as stored in `manufacturers.name`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Manufacturer website, as stored in `manufacturers.website`.
    pub fn website(self) -> &'static str {
        match self {
            Brand::Intel => "https://www.intel.com",
            Brand::Amd => "https://www.amd.com",
            Brand::Nvidia => "https://www.nvidia.com",
        }
    }

    /// Registrable domain of the manufacturer's official site.
    pub fn official_domain(self) -> &'static str {
        match self {
            Brand::Intel => "intel.com",
            Brand::Amd => "amd.com",
            Brand::Nvidia => "nvidia.com",
        }
    }
}

/// CPU specification fields, mirroring the `cpu_specs` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSpecs {
    pub cores: Option<u32>,
    pub threads: Option<u32>,
    pub base_clock_ghz: Option<f64>,
    pub boost_clock_ghz: Option<f64>,
    pub tdp_watts: Option<u32>,
    pub socket: Option<String>,
}

impl CpuSpecs {
    /// Names of the fields that are not officially published.
    pub fn null_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.cores.is_none() {
            fields.push("cores");
        }
        if self.threads.is_none() {
            fields.push("threads");
        }
        if self.base_clock_ghz.is_none() {
            fields.push("base_clock_ghz");
        }
        if self.boost_clock_ghz.is_none() {
            fields.push("boost_clock_ghz");
        }
        if self.tdp_watts.is_none() {
            fields.push("tdp_watts");
        }
        if self.socket.is_none() {
            fields.push("socket");
        }
        fields
    }
}

/// GPU specification fields, mirroring the `gpu_specs` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuSpecs {
    pub memory_gb: Option<u32>,
    pub memory_type: Option<String>,
    pub core_clock_mhz: Option<u32>,
    pub boost_clock_mhz: Option<u32>,
    pub tdp_watts: Option<u32>,
    pub interface: Option<String>,
}

impl GpuSpecs {
    /// Names of the fields that are not officially published.
    pub fn null_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.memory_gb.is_none() {
            fields.push("memory_gb");
        }
        if self.memory_type.is_none() {
            fields.push("memory_type");
        }
        if self.core_clock_mhz.is_none() {
            fields.push("core_clock_mhz");
        }
        if self.boost_clock_mhz.is_none() {
            fields.push("boost_clock_mhz");
        }
        if self.tdp_watts.is_none() {
            fields.push("tdp_watts");
        }
        if self.interface.is_none() {
            fields.push("interface");
        }
        fields
    }
}

/// Type-specific specification sheet of a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpecSheet {
    Cpu(CpuSpecs),
    Gpu(GpuSpecs),
}

impl SpecSheet {
    pub fn kind(&self) -> ComponentKind {
        match self {
            SpecSheet::Cpu(_) => ComponentKind::Cpu,
            SpecSheet::Gpu(_) => ComponentKind::Gpu,
        }
    }
}

/// A denormalized catalog record: component, manufacturer, specs, current
/// price and provenance, as read from the `v_*_complete` views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub external_id: String,
    pub slug: String,
    pub model: String,
    pub manufacturer_name: String,
    pub manufacturer_website: String,
    pub specs: SpecSheet,
    pub current_price_eur: Option<f64>,
    pub price_recorded_at: Option<String>,
    pub spec_source_url: Option<String>,
    pub spec_source_domain: Option<String>,
    pub spec_verified_at: Option<String>,
    pub price_source_url: Option<String>,
    pub price_source_domain: Option<String>,
}

impl CatalogEntry {
    pub fn kind(&self) -> ComponentKind {
        self.specs.kind()
    }

    /// CPU specs, if this entry is a CPU.
    pub fn cpu_specs(&self) -> Option<&CpuSpecs> {
        match &self.specs {
            SpecSheet::Cpu(specs) => Some(specs),
            SpecSheet::Gpu(_) => None,
        }
    }

    /// GPU specs, if this entry is a GPU.
    pub fn gpu_specs(&self) -> Option<&GpuSpecs> {
        match &self.specs {
            SpecSheet::Gpu(specs) => Some(specs),
            SpecSheet::Cpu(_) => None,
        }
    }
}
