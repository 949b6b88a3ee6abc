use serde::{Deserialize, Serialize};

use super::coefficients::{arc_current_coefficients, ClassBlend, VoltageClass, MAX_ARCING_FRACTION};
use super::inputs::ElectrodeConfig;

/// 아크 전류 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcingCurrent {
    /// 아크 전류 [kA]
    pub kilo_amps: f64,
    /// 볼티드 고장전류 비율 상한으로 잘렸는지 여부
    pub clamped: bool,
}

/// 기준 전압 계수 세트로 로그 회귀식을 평가한다. 결과 단위는 kA.
fn regression_at(class: VoltageClass, ibf_ka: f64, gap_mm: f64, config: ElectrodeConfig) -> f64 {
    let k = arc_current_coefficients(class, config);
    10f64.powf(k.k1 + k.k2 * ibf_ka.log10() + k.k3 * gap_mm.log10())
}

/// 600 V 기준 아크 전류를 실제 저압(600 V 이하)으로 보정한다.
fn low_voltage_correction(iarc_600_ka: f64, ibf_ka: f64, voltage_kv: f64) -> f64 {
    let ratio = 0.6 / voltage_kv;
    let bracket = 1.0 / iarc_600_ka.powi(2)
        - (0.6f64.powi(2) - voltage_kv.powi(2)) / (0.6f64.powi(2) * ibf_ka.powi(2));
    if bracket <= 0.0 {
        return iarc_600_ka;
    }
    1.0 / (ratio.powi(2) * bracket).sqrt()
}

/// 볼티드 고장전류, 전압, 도체 간격, 전극 배치로 아크 전류를 추정한다.
///
/// - `voltage_v`: 계통 전압 [V]
/// - `bolted_fault_current_a`: 볼티드 고장전류 [A]
/// - `gap_mm`: 도체 간격 [mm]
///
/// 600 V 이하는 600 V 계수 결과를 저압 보정식으로 낮추고, 그 이상은 기준 전압
/// 사이를 선형 보간한다(14300 V 이상은 14300 V 계수). 결과는 볼티드 전류의 98%를 넘지 않는다.
pub fn estimate_arcing_current(
    voltage_v: f64,
    bolted_fault_current_a: f64,
    gap_mm: f64,
    config: ElectrodeConfig,
) -> ArcingCurrent {
    let ibf_ka = bolted_fault_current_a / 1000.0;
    let raw = match VoltageClass::of(voltage_v) {
        VoltageClass::Low => {
            let i600 = regression_at(VoltageClass::Low, ibf_ka, gap_mm, config);
            low_voltage_correction(i600, ibf_ka, voltage_v / 1000.0)
        }
        _ => ClassBlend::at(voltage_v).mix(|class| regression_at(class, ibf_ka, gap_mm, config)),
    };

    let ceiling = ibf_ka * MAX_ARCING_FRACTION;
    let clamped = raw > ceiling;
    let kilo_amps = if clamped { ceiling } else { raw };
    tracing::debug!(ibf_ka, raw_ka = raw, kilo_amps, clamped, "arcing current estimated");
    ArcingCurrent { kilo_amps, clamped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcing_current_below_bolted() {
        for config in ElectrodeConfig::ALL {
            for &(v, gap) in &[(415.0, 25.0), (1000.0, 50.0), (11_000.0, 152.0)] {
                let iarc = estimate_arcing_current(v, 25_000.0, gap, config);
                assert!(iarc.kilo_amps > 0.0);
                assert!(iarc.kilo_amps <= 25.0 * MAX_ARCING_FRACTION + 1e-12);
            }
        }
    }

    #[test]
    fn low_voltage_correction_is_identity_at_600v() {
        let i = low_voltage_correction(18.0, 25.0, 0.6);
        assert!((i - 18.0).abs() < 1e-9);
    }

    #[test]
    fn lower_voltage_gives_lower_arcing_current() {
        let a = estimate_arcing_current(240.0, 20_000.0, 25.0, ElectrodeConfig::Vcb);
        let b = estimate_arcing_current(480.0, 20_000.0, 25.0, ElectrodeConfig::Vcb);
        assert!(a.kilo_amps < b.kilo_amps);
    }

    #[test]
    fn continuous_at_reference_voltages() {
        for v in [600.0, 2700.0, 14_300.0] {
            let a = estimate_arcing_current(v, 20_000.0, 32.0, ElectrodeConfig::Vcb);
            let b = estimate_arcing_current(v + 1.0, 20_000.0, 32.0, ElectrodeConfig::Vcb);
            assert!((a.kilo_amps - b.kilo_amps).abs() < 0.01, "{v} V");
        }
    }
}
