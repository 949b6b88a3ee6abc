//! 아크 전류/정규화 에너지 회귀 계수, 거리 지수, 보정 계수 테이블.
//!
//! 계산 단계(arcing_current, incident_energy)는 분기 없이 이 테이블만 조회한다.
//! 아크 전류 계수는 IEEE 1584-2018 Table 1의 600 V / 2700 V / 14300 V 기준값 중
//! 로그 항(k1~k3)만 사용한 간이 모델이고, 정규화 에너지·거리 지수는 IEEE 1584-2002 식을 따른다.
//! 정밀 해석이 필요한 경우 표준 전체 모델로 검증해야 한다.
//!
//! 전압 등급별 테이블은 모두 같은 기준 전압에서 정의되고, 기준 전압 사이에서는
//! [`ClassBlend`]로 선형 보간한다. 등급 경계에서 값이 불연속으로 바뀌지 않는다.

use serde::{Deserialize, Serialize};

use super::inputs::{ElectrodeConfig, EnclosureType, EquipmentType, Grounding};

/// 기준 작업거리 [mm]
pub const REFERENCE_DISTANCE_MM: f64 = 610.0;
/// 기준 아크 지속시간 [s]
pub const REFERENCE_TIME_S: f64 = 0.2;
/// cal/cm² → J/cm²
pub const JOULES_PER_CALORIE: f64 = 4.184;
/// 2도 화상 한계 에너지 [cal/cm²]. 아크플래시 경계 정의에 사용한다.
pub const BOUNDARY_ENERGY_CAL: f64 = 1.2;
/// 아크 전류가 볼티드 고장전류 대비 가질 수 있는 최대 비율
pub const MAX_ARCING_FRACTION: f64 = 0.98;

/// 계수 세트를 고르는 전압 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoltageClass {
    /// 600 V 이하
    Low,
    /// 600 V 초과 2700 V 이하
    Medium,
    /// 2700 V 초과
    High,
}

impl VoltageClass {
    pub fn of(voltage_v: f64) -> Self {
        if voltage_v <= 600.0 {
            VoltageClass::Low
        } else if voltage_v <= 2700.0 {
            VoltageClass::Medium
        } else {
            VoltageClass::High
        }
    }

    /// 계수 세트의 기준 전압 [V]
    pub fn reference_voltage(self) -> f64 {
        match self {
            VoltageClass::Low => 600.0,
            VoltageClass::Medium => 2700.0,
            VoltageClass::High => 14300.0,
        }
    }
}

/// 전압이 놓인 기준 전압 구간과 상위 등급 쪽 가중치.
///
/// 600 V 이하는 Low, 14300 V 이상은 High 값 그대로이고 그 사이는 인접한 두
/// 등급 값을 선형 보간한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassBlend {
    pub lower: VoltageClass,
    pub upper: VoltageClass,
    /// 0이면 `lower`, 1이면 `upper`
    pub weight: f64,
}

impl ClassBlend {
    fn pinned(class: VoltageClass) -> Self {
        Self {
            lower: class,
            upper: class,
            weight: 0.0,
        }
    }

    pub fn at(voltage_v: f64) -> Self {
        let (lower, upper) = match VoltageClass::of(voltage_v) {
            VoltageClass::Low => return Self::pinned(VoltageClass::Low),
            VoltageClass::Medium => (VoltageClass::Low, VoltageClass::Medium),
            VoltageClass::High if voltage_v >= VoltageClass::High.reference_voltage() => {
                return Self::pinned(VoltageClass::High)
            }
            VoltageClass::High => (VoltageClass::Medium, VoltageClass::High),
        };
        let v0 = lower.reference_voltage();
        let v1 = upper.reference_voltage();
        Self {
            lower,
            upper,
            weight: (voltage_v - v0) / (v1 - v0),
        }
    }

    /// 등급별 값을 가중 평균한다.
    pub fn mix(self, value: impl Fn(VoltageClass) -> f64) -> f64 {
        if self.lower == self.upper {
            return value(self.lower);
        }
        value(self.lower) * (1.0 - self.weight) + value(self.upper) * self.weight
    }
}

/// `log10(Iarc) = k1 + k2·log10(Ibf) + k3·log10(G)` 계수 (Ibf: kA, G: mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurrentCoefficients {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
}

const fn ac(k1: f64, k2: f64, k3: f64) -> ArcCurrentCoefficients {
    ArcCurrentCoefficients { k1, k2, k3 }
}

// [VoltageClass][ElectrodeConfig] = VCB, VCBB, HCB, VOA, HOA
const ARC_CURRENT_TABLE: [[ArcCurrentCoefficients; 5]; 3] = [
    // 600 V
    [
        ac(-0.04287, 1.035, -0.083),
        ac(-0.017432, 0.98, -0.05),
        ac(0.054922, 0.988, -0.11),
        ac(0.043785, 1.04, -0.18),
        ac(0.111147, 1.008, -0.24),
    ],
    // 2700 V
    [
        ac(0.0065, 1.001, -0.024),
        ac(0.002823, 0.995, -0.0125),
        ac(0.001011, 1.003, -0.0249),
        ac(0.008693, 0.999, -0.02),
        ac(0.005, 1.001, -0.0275),
    ],
    // 14300 V
    [
        ac(0.005795, 1.015, -0.011),
        ac(0.014827, 1.01, -0.01),
        ac(0.008693, 1.005, -0.0131),
        ac(0.005, 1.006, -0.0111),
        ac(0.005, 1.004, -0.0112),
    ],
];

pub fn arc_current_coefficients(class: VoltageClass, config: ElectrodeConfig) -> ArcCurrentCoefficients {
    ARC_CURRENT_TABLE[class as usize][config as usize]
}

/// `log10(En) = k1 + k2·log10(Iarc) + k3·G + 접지항` 계수 (Iarc: kA, G: mm, En: cal/cm²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCoefficients {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
}

const fn ec(k1: f64, k2: f64, k3: f64) -> EnergyCoefficients {
    EnergyCoefficients { k1, k2, k3 }
}

// [VoltageClass][ElectrodeConfig]
// 박스형 -0.555, 개방형 -0.792 를 기준으로 barrier 종단/수평 배치 가산치를 더한 값.
// 600 V 행의 k1에는 저압 계산 계수 1.5가 log10(1.5) = 0.176091 로 포함되어 있다.
const ENERGY_TABLE: [[EnergyCoefficients; 5]; 3] = [
    // 600 V
    [
        ec(-0.378909, 1.081, 0.0011),
        ec(-0.278909, 1.081, 0.0011),
        ec(-0.178909, 1.081, 0.0011),
        ec(-0.615909, 1.081, 0.0011),
        ec(-0.515909, 1.081, 0.0011),
    ],
    // 2700 V
    [
        ec(-0.555, 1.081, 0.0011),
        ec(-0.455, 1.081, 0.0011),
        ec(-0.355, 1.081, 0.0011),
        ec(-0.792, 1.081, 0.0011),
        ec(-0.692, 1.081, 0.0011),
    ],
    // 14300 V
    [
        ec(-0.555, 1.081, 0.0011),
        ec(-0.455, 1.081, 0.0011),
        ec(-0.355, 1.081, 0.0011),
        ec(-0.792, 1.081, 0.0011),
        ec(-0.692, 1.081, 0.0011),
    ],
];

pub fn energy_coefficients(class: VoltageClass, config: ElectrodeConfig) -> EnergyCoefficients {
    ENERGY_TABLE[class as usize][config as usize]
}

/// 정규화 에너지 회귀식의 접지 항.
pub fn grounding_term(grounding: Grounding) -> f64 {
    match grounding {
        Grounding::Solid => -0.113,
        Grounding::Ungrounded => 0.0,
    }
}

// [VoltageClass][EquipmentType] = Panelboard, SwitchgearLv, SwitchgearMv, Mcc, CableJunction, OpenAir
const DISTANCE_EXPONENT_TABLE: [[f64; 6]; 3] = [
    [1.641, 1.473, 1.473, 1.641, 2.0, 2.0],
    [0.973, 0.973, 0.973, 0.973, 2.0, 2.0],
    [0.973, 0.973, 0.973, 0.973, 2.0, 2.0],
];

/// 거리 지수 x. 개방 공기 배치나 개방형 외함은 역제곱(2.0)을 사용한다.
pub fn distance_exponent(
    voltage_v: f64,
    equipment: EquipmentType,
    config: ElectrodeConfig,
    enclosure: EnclosureType,
) -> f64 {
    if config.is_open_air() || enclosure == EnclosureType::Open {
        return 2.0;
    }
    ClassBlend::at(voltage_v).mix(|class| DISTANCE_EXPONENT_TABLE[class as usize][equipment as usize])
}

/// 스케일러에 들어가는 외함 보정 계수 Cf.
pub fn correction_factor(enclosure: EnclosureType) -> f64 {
    match enclosure {
        EnclosureType::Box | EnclosureType::Open => 1.0,
        EnclosureType::Shallow => 1.1,
    }
}

/// IEEE 1584-2018 시험 범위(전형 범위) 정의.
pub mod envelope {
    pub const VOLTAGE_MIN_V: f64 = 208.0;
    pub const VOLTAGE_MAX_V: f64 = 15000.0;
    pub const LV_FAULT_MIN_A: f64 = 500.0;
    pub const LV_FAULT_MAX_A: f64 = 106_000.0;
    pub const MV_FAULT_MIN_A: f64 = 200.0;
    pub const MV_FAULT_MAX_A: f64 = 65_000.0;
    pub const LV_GAP_MIN_MM: f64 = 6.35;
    pub const LV_GAP_MAX_MM: f64 = 76.2;
    pub const MV_GAP_MIN_MM: f64 = 19.05;
    pub const MV_GAP_MAX_MM: f64 = 254.0;
    pub const WORKING_DISTANCE_MIN_MM: f64 = 305.0;
    /// 지속 아크 한계로 간주하는 동작 시간 [s]
    pub const SUSTAINED_ARC_TIME_S: f64 = 2.0;
    /// 이 시간 이상이면 지속 아크 한계에 근접했다고 경고한다.
    pub const SUSTAINED_ARC_WARNING_S: f64 = 1.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_class_boundaries() {
        assert_eq!(VoltageClass::of(415.0), VoltageClass::Low);
        assert_eq!(VoltageClass::of(600.0), VoltageClass::Low);
        assert_eq!(VoltageClass::of(601.0), VoltageClass::Medium);
        assert_eq!(VoltageClass::of(2700.0), VoltageClass::Medium);
        assert_eq!(VoltageClass::of(11_000.0), VoltageClass::High);
    }

    #[test]
    fn open_air_forces_inverse_square() {
        let x = distance_exponent(
            415.0,
            EquipmentType::Panelboard,
            ElectrodeConfig::Voa,
            EnclosureType::Box,
        );
        assert_eq!(x, 2.0);
        let x = distance_exponent(
            415.0,
            EquipmentType::Panelboard,
            ElectrodeConfig::Vcb,
            EnclosureType::Box,
        );
        assert!((x - 1.641).abs() < 1e-12);
    }

    #[test]
    fn blend_is_pinned_outside_reference_span() {
        assert_eq!(ClassBlend::at(415.0).mix(|c| c as usize as f64), 0.0);
        assert_eq!(ClassBlend::at(15_000.0).mix(|c| c as usize as f64), 2.0);
        let mid = ClassBlend::at(1650.0);
        assert_eq!((mid.lower, mid.upper), (VoltageClass::Low, VoltageClass::Medium));
        assert!((mid.weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn energy_rows_differ_by_voltage_class() {
        let low = energy_coefficients(VoltageClass::Low, ElectrodeConfig::Vcb);
        let medium = energy_coefficients(VoltageClass::Medium, ElectrodeConfig::Vcb);
        assert!((low.k1 - medium.k1 - 1.5f64.log10()).abs() < 1e-6);
    }

    #[test]
    fn exponent_is_continuous_across_600v() {
        let at = |v| {
            distance_exponent(v, EquipmentType::Panelboard, ElectrodeConfig::Vcb, EnclosureType::Box)
        };
        assert!((at(600.0) - 1.641).abs() < 1e-12);
        assert!((at(601.0) - at(600.0)).abs() < 1e-3);
        assert!((at(2700.0) - 0.973).abs() < 1e-12);
    }
}
