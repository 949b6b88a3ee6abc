//! 아크플래시 입사 에너지 계산기.
//!
//! 입력 검증 → 기본 간격 결정 → 아크 전류 → 정규화 에너지 → 거리/시간 환산
//! → PPE 분류 → 보조 리포트 순서로 순차 실행되는 순수 함수 파이프라인이다.
//! 같은 입력에 대해서는 항상 같은 결과를 돌려준다.

pub mod arcing_current;
pub mod bs7671;
pub mod coefficients;
pub mod equipment;
pub mod incident_energy;
pub mod inputs;
pub mod ppe;
pub mod reporters;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use arcing_current::{estimate_arcing_current, ArcingCurrent};
pub use bs7671::{check_disconnection_time, CheckOutcome, DisconnectionCheck};
pub use coefficients::{ClassBlend, VoltageClass};
pub use equipment::{apply_equipment_defaults, default_gap_mm, equipment_defaults, EquipmentDefaults};
pub use incident_energy::{BoundaryPoint, BOUNDARY_TABLE_DISTANCES_MM};
pub use inputs::{
    ArcFlashInputs, CircuitType, EarthingSystem, ElectrodeConfig, EnclosureType, EquipmentType,
    Grounding, ParseLabelError,
};
pub use ppe::PpeClass;
pub use validation::{parse_raw_inputs, validate_inputs, InputField, RawInputs, ValidationErrors};

use coefficients::JOULES_PER_CALORIE;

/// 아크플래시 계산 결과. 계산마다 새로 만들어지며 이후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcFlashResult {
    /// 아크 전류 [kA]
    pub arcing_current: f64,
    /// 입사 에너지 [cal/cm²]
    pub incident_energy: f64,
    /// 입사 에너지 [J/cm²]
    pub incident_energy_joules: f64,
    /// 아크플래시 경계 [mm] (1.2 cal/cm² 지점)
    pub arc_flash_boundary: f64,
    /// I²t [A²s]
    pub energy_let_through: f64,
    /// 아크 지속시간 [s]
    pub arc_duration: f64,
    pub ppe_category: Option<u8>,
    /// 카테고리의 최소 아크 등급 [cal/cm²]
    pub min_arc_rating_required: Option<f64>,
    pub is_within_ieee_bounds: bool,
    pub is_unrealistic: bool,
    pub calculation_method: String,
    pub warnings: Vec<String>,
    pub boundary_table: Vec<BoundaryPoint>,
    pub bs7671_disconnection_check: String,
    pub ppe_recommendations: Vec<String>,
    /// 실제 사용한 도체 간격 [mm]
    pub conductor_gap: f64,
    /// 정규화 에너지 [cal/cm²] (610 mm, 0.2 s)
    pub normalized_energy: f64,
    pub distance_exponent: f64,
    pub correction_factor: f64,
}

/// 아크플래시 입사 에너지와 부가 정보를 계산한다.
///
/// 입력 검증에 실패하면 필드별 오류 맵을 돌려주고 계산을 진행하지 않는다.
pub fn calculate_arc_flash(inputs: &ArcFlashInputs) -> Result<ArcFlashResult, ValidationErrors> {
    if let Err(errors) = validate_inputs(inputs).into_result() {
        tracing::warn!(%errors, "arc flash input rejected");
        return Err(errors);
    }

    let gap = inputs
        .conductor_gap
        .unwrap_or_else(|| default_gap_mm(inputs.equipment_type, inputs.voltage));

    let iarc = estimate_arcing_current(
        inputs.voltage,
        inputs.bolted_fault_current,
        gap,
        inputs.electrode_config,
    );
    let en = incident_energy::normalized_energy(
        iarc.kilo_amps,
        gap,
        inputs.voltage,
        inputs.electrode_config,
        inputs.grounding,
    );
    let cf = coefficients::correction_factor(inputs.enclosure_type);
    let x = coefficients::distance_exponent(
        inputs.voltage,
        inputs.equipment_type,
        inputs.electrode_config,
        inputs.enclosure_type,
    );
    let blend = ClassBlend::at(inputs.voltage);
    tracing::debug!(?blend, gap, normalized_energy = en, cf, x, "normalized energy");

    let t = inputs.clearing_time;
    let energy = incident_energy::scale(en, t, inputs.working_distance, cf, x);
    let boundary = incident_energy::arc_flash_boundary(en, t, cf, x);
    let table = incident_energy::boundary_table(en, t, cf, x);

    let ppe = ppe::classify(energy);
    let disconnection =
        check_disconnection_time(inputs.voltage, t, inputs.circuit_type, inputs.earthing_system);

    let findings = reporters::envelope_findings(inputs, gap);
    let within_bounds = findings.is_empty();
    let warnings = reporters::collect_warnings(
        inputs,
        &findings,
        iarc.clamped,
        energy,
        ppe.is_unrealistic(),
        &disconnection,
    );

    if ppe.is_unrealistic() {
        tracing::warn!(incident_energy = energy, "incident energy above PPE category 4");
    }
    tracing::debug!(
        incident_energy = energy,
        boundary_mm = boundary,
        category = ?ppe.category(),
        "arc flash calculated"
    );

    Ok(ArcFlashResult {
        arcing_current: iarc.kilo_amps,
        incident_energy: energy,
        incident_energy_joules: energy * JOULES_PER_CALORIE,
        arc_flash_boundary: boundary,
        energy_let_through: incident_energy::energy_let_through(iarc.kilo_amps, t),
        arc_duration: t,
        ppe_category: ppe.category(),
        min_arc_rating_required: ppe.min_arc_rating(),
        is_within_ieee_bounds: within_bounds,
        is_unrealistic: ppe.is_unrealistic(),
        calculation_method: reporters::method_label(within_bounds).to_string(),
        warnings,
        boundary_table: table,
        bs7671_disconnection_check: disconnection.message,
        ppe_recommendations: ppe::recommendations(ppe),
        conductor_gap: gap,
        normalized_energy: en,
        distance_exponent: x,
        correction_factor: cf,
    })
}
