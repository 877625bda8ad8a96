// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small fixture catalog shared by the storage unit tests.

use hwcat_core::{ComponentKind, CpuSpecs, GpuSpecs, SourceType};
use rusqlite::Connection;

use crate::models::NewComponent;
use crate::queries::reseed::*;

pub(crate) const VERIFIED_AT: &str = "2025-01-26T00:00:00Z";

/// Two CPUs (Intel, AMD) and two GPUs (NVIDIA, AMD), plus one CPU with no
/// specs source, which the complete views must hide.
pub(crate) fn seed_fixture(conn: &Connection) -> rusqlite::Result<()> {
    let intel = insert_manufacturer(conn, "Intel", "https://www.intel.com")?;
    let amd = insert_manufacturer(conn, "AMD", "https://www.amd.com")?;
    let nvidia = insert_manufacturer(conn, "NVIDIA", "https://www.nvidia.com")?;
    let (shop, _) = upsert_source(
        conn,
        "https://www.pccomponentes.com/shop",
        "pccomponentes.com",
        SourceType::PriceAvailability,
    )?;

    let add_cpu = |external_id: &str, model: &str, maker: i64, specs: CpuSpecs| {
        let id = insert_component(
            conn,
            &NewComponent {
                external_id: external_id.into(),
                kind: ComponentKind::Cpu,
                model: model.into(),
                manufacturer_id: maker,
            },
        )?;
        insert_cpu_specs(conn, id, &specs)?;
        Ok::<_, rusqlite::Error>(id)
    };
    let add_gpu = |external_id: &str, model: &str, maker: i64, specs: GpuSpecs| {
        let id = insert_component(
            conn,
            &NewComponent {
                external_id: external_id.into(),
                kind: ComponentKind::Gpu,
                model: model.into(),
                manufacturer_id: maker,
            },
        )?;
        insert_gpu_specs(conn, id, &specs)?;
        Ok::<_, rusqlite::Error>(id)
    };
    let cite = |component: i64, url: &str, domain: &str, ty: SourceType| {
        let (source, _) = upsert_source(conn, url, domain, ty)?;
        link_source(conn, component, source, VERIFIED_AT)?;
        Ok::<_, rusqlite::Error>(())
    };

    let i5 = add_cpu(
        "cpu-intel-i5-14600k",
        "Core i5-14600K",
        intel,
        CpuSpecs {
            cores: Some(14),
            threads: Some(20),
            base_clock_ghz: Some(3.5),
            boost_clock_ghz: Some(5.3),
            tdp_watts: Some(125),
            socket: Some("LGA1700".into()),
        },
    )?;
    cite(i5, "https://ark.intel.com/i5", "intel.com", SourceType::CpuSpecs)?;
    insert_price(conn, i5, shop, 289.9, "2026-01-01T00:00:00Z")?;
    insert_price(conn, i5, shop, 279.9, "2026-02-01T00:00:00Z")?;

    let r5 = add_cpu(
        "cpu-amd-ryzen5-7600x",
        "Ryzen 5 7600X",
        amd,
        CpuSpecs {
            cores: Some(6),
            threads: Some(12),
            base_clock_ghz: Some(4.7),
            boost_clock_ghz: Some(5.3),
            tdp_watts: Some(105),
            socket: Some("AM5".into()),
        },
    )?;
    cite(r5, "https://www.amd.com/r5", "amd.com", SourceType::CpuSpecs)?;

    add_cpu("cpu-unsourced", "Core i3-14100", intel, CpuSpecs::default())?;

    let rtx = add_gpu(
        "gpu-nvidia-rtx4060",
        "GeForce RTX 4060",
        nvidia,
        GpuSpecs {
            memory_gb: Some(8),
            memory_type: Some("GDDR6".into()),
            core_clock_mhz: Some(1830),
            boost_clock_mhz: Some(2460),
            tdp_watts: Some(115),
            interface: Some("PCIe 4.0 x8".into()),
        },
    )?;
    cite(rtx, "https://www.nvidia.com/4060", "nvidia.com", SourceType::GpuSpecs)?;

    let rx = add_gpu(
        "gpu-amd-rx7600",
        "Radeon RX 7600",
        amd,
        GpuSpecs {
            memory_gb: Some(8),
            memory_type: Some("GDDR6".into()),
            core_clock_mhz: None,
            boost_clock_mhz: Some(2655),
            tdp_watts: Some(165),
            interface: Some("PCIe 4.0 x8".into()),
        },
    )?;
    cite(rx, "https://www.amd.com/rx7600", "amd.com", SourceType::GpuSpecs)?;

    Ok(())
}
