use serde::{Deserialize, Serialize};

use super::coefficients::{
    energy_coefficients, grounding_term, ClassBlend, BOUNDARY_ENERGY_CAL, REFERENCE_DISTANCE_MM,
    REFERENCE_TIME_S,
};
use super::inputs::{ElectrodeConfig, Grounding};

/// 경계 표에 사용하는 표준 작업거리 [mm].
pub const BOUNDARY_TABLE_DISTANCES_MM: [f64; 5] = [300.0, 450.0, 600.0, 900.0, 1200.0];

/// 경계 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// 거리 [mm]
    pub distance: f64,
    /// 해당 거리의 입사 에너지 [cal/cm²]
    pub energy: f64,
}

/// 기준 조건(610 mm, 0.2 s)의 정규화 입사 에너지 [cal/cm²].
///
/// 로그 회귀값을 전압 등급별 계수로 구한 뒤 `voltage_v`에 맞춰 보간한다.
pub fn normalized_energy(
    arcing_current_ka: f64,
    gap_mm: f64,
    voltage_v: f64,
    config: ElectrodeConfig,
    grounding: Grounding,
) -> f64 {
    let log_iarc = arcing_current_ka.log10();
    let log_en = ClassBlend::at(voltage_v).mix(|class| {
        let k = energy_coefficients(class, config);
        k.k1 + k.k2 * log_iarc + k.k3 * gap_mm
    });
    10f64.powf(log_en + grounding_term(grounding))
}

/// 정규화 에너지를 실제 동작시간과 작업거리로 환산한다.
///
/// `E = Cf × En × (t / 0.2) × (610 / D)^x`
pub fn scale(
    normalized_energy_cal: f64,
    clearing_time_s: f64,
    working_distance_mm: f64,
    correction_factor: f64,
    distance_exponent: f64,
) -> f64 {
    correction_factor
        * normalized_energy_cal
        * (clearing_time_s / REFERENCE_TIME_S)
        * (REFERENCE_DISTANCE_MM / working_distance_mm).powf(distance_exponent)
}

/// 입사 에너지가 1.2 cal/cm²가 되는 거리 [mm]. `scale`의 역함수이다.
pub fn arc_flash_boundary(
    normalized_energy_cal: f64,
    clearing_time_s: f64,
    correction_factor: f64,
    distance_exponent: f64,
) -> f64 {
    let energy_at_reference =
        correction_factor * normalized_energy_cal * (clearing_time_s / REFERENCE_TIME_S);
    REFERENCE_DISTANCE_MM * (energy_at_reference / BOUNDARY_ENERGY_CAL).powf(1.0 / distance_exponent)
}

/// 표준 거리들에서의 입사 에너지 표를 만든다.
pub fn boundary_table(
    normalized_energy_cal: f64,
    clearing_time_s: f64,
    correction_factor: f64,
    distance_exponent: f64,
) -> Vec<BoundaryPoint> {
    BOUNDARY_TABLE_DISTANCES_MM
        .iter()
        .map(|&distance| BoundaryPoint {
            distance,
            energy: scale(
                normalized_energy_cal,
                clearing_time_s,
                distance,
                correction_factor,
                distance_exponent,
            ),
        })
        .collect()
}

/// I²t 에너지 통과량 [A²s].
pub fn energy_let_through(arcing_current_ka: f64, clearing_time_s: f64) -> f64 {
    (arcing_current_ka * 1000.0).powi(2) * clearing_time_s
}
