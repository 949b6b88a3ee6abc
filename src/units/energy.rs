use serde::{Deserialize, Serialize};

/// 입사 에너지(면적당 에너지) 단위. 내부 기준은 cal/cm²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    CalPerCm2,
    JoulePerCm2,
    KilojoulePerM2,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::CalPerCm2 => "cal/cm²",
            EnergyUnit::JoulePerCm2 => "J/cm²",
            EnergyUnit::KilojoulePerM2 => "kJ/m²",
        }
    }
}

fn to_cal_per_cm2(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::CalPerCm2 => value,
        EnergyUnit::JoulePerCm2 => value / 4.184,
        EnergyUnit::KilojoulePerM2 => value / 41.84,
    }
}

fn from_cal_per_cm2(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::CalPerCm2 => value,
        EnergyUnit::JoulePerCm2 => value * 4.184,
        EnergyUnit::KilojoulePerM2 => value * 41.84,
    }
}

/// 입사 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let cal = to_cal_per_cm2(value, from);
    from_cal_per_cm2(cal, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cal_to_joule() {
        let j = convert_energy(1.2, EnergyUnit::CalPerCm2, EnergyUnit::JoulePerCm2);
        assert!((j - 5.0208).abs() < 1e-9);
        let kj = convert_energy(1.0, EnergyUnit::JoulePerCm2, EnergyUnit::KilojoulePerM2);
        assert!((kj - 10.0).abs() < 1e-9);
    }
}
