//! 계산 결과를 사람이 읽는 텍스트 보고서로 만든다.

use std::fmt::Write as _;

use crate::arcflash::{ArcFlashInputs, ArcFlashResult, EquipmentDefaults, EquipmentType};
use crate::config::DefaultUnits;
use crate::units::{convert_energy, convert_length, EnergyUnit, LengthUnit};

fn energy(value_cal: f64, units: &DefaultUnits) -> String {
    let v = convert_energy(value_cal, EnergyUnit::CalPerCm2, units.energy);
    format!("{v:.2} {}", units.energy.symbol())
}

fn distance(value_mm: f64, units: &DefaultUnits) -> String {
    let v = convert_length(value_mm, LengthUnit::Millimeter, units.distance);
    match units.distance {
        LengthUnit::Millimeter => format!("{v:.0} mm"),
        other => format!("{v:.2} {}", other.symbol()),
    }
}

/// 입력과 결과를 텍스트 보고서로 렌더링한다.
pub fn render_text(inputs: &ArcFlashInputs, result: &ArcFlashResult, units: &DefaultUnits) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Arc Flash Assessment ===");
    let _ = writeln!(
        out,
        "Equipment: {} ({}, {})",
        inputs.equipment_type.label(),
        inputs.electrode_config.key(),
        inputs.enclosure_type.label()
    );
    let _ = writeln!(
        out,
        "System: {:.0} V, bolted fault {:.2} kA, clearing time {:.3} s",
        inputs.voltage,
        inputs.bolted_fault_current / 1000.0,
        inputs.clearing_time
    );
    let _ = writeln!(
        out,
        "Working distance: {}, conductor gap: {:.1} mm",
        distance(inputs.working_distance, units),
        result.conductor_gap
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Arcing current:      {:.2} kA", result.arcing_current);
    let _ = writeln!(
        out,
        "Incident energy:     {} ({:.2} J/cm²)",
        energy(result.incident_energy, units),
        result.incident_energy_joules
    );
    let _ = writeln!(out, "Arc flash boundary:  {}", distance(result.arc_flash_boundary, units));
    let _ = writeln!(out, "Energy let-through:  {:.3e} A²s", result.energy_let_through);
    let _ = writeln!(out, "Arc duration:        {:.3} s", result.arc_duration);
    match (result.ppe_category, result.min_arc_rating_required) {
        (Some(cat), Some(rating)) => {
            let _ = writeln!(out, "PPE category:        {cat} (minimum arc rating {rating} cal/cm²)");
        }
        _ => {
            let _ = writeln!(out, "PPE category:        none (energy above category 4)");
        }
    }
    let _ = writeln!(out, "Method:              {}", result.calculation_method);
    let _ = writeln!(out, "BS 7671:             {}", result.bs7671_disconnection_check);

    let _ = writeln!(out, "\nBoundary table:");
    for point in &result.boundary_table {
        let _ = writeln!(
            out,
            "  {:>12}  {}",
            distance(point.distance, units),
            energy(point.energy, units)
        );
    }

    let _ = writeln!(out, "\nPPE / controls:");
    for line in &result.ppe_recommendations {
        let _ = writeln!(out, "  - {line}");
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for w in &result.warnings {
            let _ = writeln!(out, "  ! {w}");
        }
    }
    out
}

/// 설비 기본값을 텍스트로 렌더링한다.
pub fn render_defaults(equipment: EquipmentType, defaults: &EquipmentDefaults, units: &DefaultUnits) -> String {
    format!(
        "{}: working distance {}, enclosure {}, electrode configuration {}",
        equipment.label(),
        distance(defaults.working_distance, units),
        defaults.enclosure_type.label(),
        defaults.default_config.key()
    )
}
