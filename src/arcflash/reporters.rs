//! 경고 목록, IEEE 시험 범위 판정, 계산 방법 라벨.

use super::bs7671::{CheckOutcome, DisconnectionCheck};
use super::coefficients::{envelope, VoltageClass};
use super::inputs::{ArcFlashInputs, EnclosureType};

pub const METHOD_LABEL: &str = "IEEE 1584-2018 empirical model (simplified regression)";
pub const METHOD_LABEL_EXTRAPOLATED: &str =
    "IEEE 1584-2018 empirical model (simplified regression, extrapolated beyond test range)";

/// 입력값이 시험 범위의 전형 구간 밖에 있는 경우의 사유 목록.
pub fn envelope_findings(inputs: &ArcFlashInputs, gap_mm: f64) -> Vec<String> {
    let mut findings = Vec::new();
    let v = inputs.voltage;

    if v < envelope::VOLTAGE_MIN_V * 1.1 || v > envelope::VOLTAGE_MAX_V * 0.9 {
        findings.push(format!(
            "Voltage {v:.0}V is near the IEEE 1584 applicability limit (208-15000V)"
        ));
    }

    let low = VoltageClass::of(v) == VoltageClass::Low;
    let (i_min, i_max) = if low {
        (envelope::LV_FAULT_MIN_A, envelope::LV_FAULT_MAX_A)
    } else {
        (envelope::MV_FAULT_MIN_A, envelope::MV_FAULT_MAX_A)
    };
    let ibf = inputs.bolted_fault_current;
    if ibf < i_min || ibf > i_max {
        findings.push(format!(
            "Bolted fault current {ibf:.0}A is outside the IEEE 1584 test range for this voltage ({i_min:.0}-{i_max:.0}A)"
        ));
    }

    let (g_min, g_max) = if low {
        (envelope::LV_GAP_MIN_MM, envelope::LV_GAP_MAX_MM)
    } else {
        (envelope::MV_GAP_MIN_MM, envelope::MV_GAP_MAX_MM)
    };
    if gap_mm < g_min || gap_mm > g_max {
        findings.push(format!(
            "Conductor gap {gap_mm:.1}mm is outside the IEEE 1584 test range ({g_min}-{g_max}mm)"
        ));
    }

    if inputs.working_distance < envelope::WORKING_DISTANCE_MIN_MM {
        findings.push(format!(
            "Working distance {:.0}mm is below the 305mm IEEE 1584 minimum; energy is extrapolated",
            inputs.working_distance
        ));
    }

    if inputs.clearing_time >= envelope::SUSTAINED_ARC_WARNING_S {
        findings.push(format!(
            "Clearing time {:.2}s is close to the 2s sustained arc threshold",
            inputs.clearing_time
        ));
    }

    findings
}

/// 결과 전체에 대한 경고를 모은다. `findings`는 `envelope_findings`의 결과이다.
pub fn collect_warnings(
    inputs: &ArcFlashInputs,
    findings: &[String],
    arcing_current_clamped: bool,
    incident_energy_cal: f64,
    is_unrealistic: bool,
    disconnection: &DisconnectionCheck,
) -> Vec<String> {
    let mut warnings: Vec<String> = findings.to_vec();

    if arcing_current_clamped {
        warnings.push("Arcing current limited to 98% of the bolted fault current".to_string());
    }

    let open_config = inputs.electrode_config.is_open_air();
    let open_enclosure = inputs.enclosure_type == EnclosureType::Open;
    if open_config != open_enclosure {
        warnings.push(format!(
            "Electrode configuration {} does not match enclosure type '{}'",
            inputs.electrode_config.key(),
            inputs.enclosure_type.label()
        ));
    }

    if is_unrealistic {
        warnings.push(format!(
            "Incident energy {incident_energy_cal:.1} cal/cm² exceeds 40 cal/cm²: no PPE category applies, do not work on this equipment energised"
        ));
    }

    if disconnection.outcome == CheckOutcome::Fail {
        warnings.push(
            "Clearing time exceeds the BS 7671 maximum disconnection time for this circuit".to_string(),
        );
    }

    warnings
}

pub fn method_label(within_bounds: bool) -> &'static str {
    if within_bounds {
        METHOD_LABEL
    } else {
        METHOD_LABEL_EXTRAPOLATED
    }
}
