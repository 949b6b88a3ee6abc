//! BS 7671 최대 차단시간(Table 41.1, 411.3.2.3/411.3.2.4) 교차 확인.

use serde::{Deserialize, Serialize};

use super::inputs::{CircuitType, EarthingSystem};

/// 판정 결과 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Pass,
    Fail,
    /// 표 적용 범위 밖이라 판정하지 않음
    Advisory,
}

/// 차단시간 확인 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisconnectionCheck {
    pub outcome: CheckOutcome,
    /// 적용된 최대 차단시간 [s]
    pub max_disconnection_time: Option<f64>,
    /// 대지전압 U0 [V]
    pub nominal_u0: f64,
    pub message: String,
}

const BS7671_MAX_VOLTAGE_V: f64 = 1000.0;

// (U0 상한, TN 시간, TT 시간). 하한은 50 V.
const TABLE_41_1: [(f64, f64, f64); 4] = [
    (120.0, 0.8, 0.3),
    (230.0, 0.4, 0.2),
    (400.0, 0.2, 0.07),
    (f64::INFINITY, 0.1, 0.04),
];

fn max_disconnection_time(u0: f64, circuit: CircuitType, earthing: EarthingSystem) -> Option<f64> {
    match circuit {
        CircuitType::FinalUpTo32A => {
            if u0 <= 50.0 {
                return None;
            }
            TABLE_41_1
                .iter()
                .find(|(upper, _, _)| u0 <= *upper)
                .map(|&(_, tn, tt)| if earthing.is_tn() { tn } else { tt })
        }
        CircuitType::FinalOver32A | CircuitType::Distribution => {
            Some(if earthing.is_tn() { 5.0 } else { 1.0 })
        }
    }
}

/// 보호장치 동작시간을 BS 7671 최대 차단시간과 비교한다.
///
/// `voltage_v`는 선간전압으로 보고 U0 = V/√3 으로 환산한다.
pub fn check_disconnection_time(
    voltage_v: f64,
    clearing_time_s: f64,
    circuit: CircuitType,
    earthing: EarthingSystem,
) -> DisconnectionCheck {
    let u0 = voltage_v / 3f64.sqrt();
    let context = format!(
        "{}, {}, U0 {:.0}V",
        earthing.label(),
        circuit.label(),
        u0
    );

    if voltage_v > BS7671_MAX_VOLTAGE_V {
        return DisconnectionCheck {
            outcome: CheckOutcome::Advisory,
            max_disconnection_time: None,
            nominal_u0: u0,
            message: format!(
                "ADVISORY: BS 7671 covers installations up to 1000V a.c.; verify protection against the HV/MV protection study for {voltage_v:.0}V equipment"
            ),
        };
    }

    let Some(limit) = max_disconnection_time(u0, circuit, earthing) else {
        return DisconnectionCheck {
            outcome: CheckOutcome::Advisory,
            max_disconnection_time: None,
            nominal_u0: u0,
            message: format!(
                "ADVISORY: U0 {u0:.0}V is outside BS 7671 Table 41.1; no maximum disconnection time applies"
            ),
        };
    };

    if clearing_time_s <= limit {
        DisconnectionCheck {
            outcome: CheckOutcome::Pass,
            max_disconnection_time: Some(limit),
            nominal_u0: u0,
            message: format!(
                "PASS: clearing time {clearing_time_s:.3}s is within the BS 7671 maximum disconnection time of {limit}s ({context})"
            ),
        }
    } else {
        DisconnectionCheck {
            outcome: CheckOutcome::Fail,
            max_disconnection_time: Some(limit),
            nominal_u0: u0,
            message: format!(
                "FAIL: clearing time {clearing_time_s:.3}s exceeds the BS 7671 maximum disconnection time of {limit}s ({context})"
            ),
        }
    }
}
