//! NFPA 70E 기준 PPE 카테고리 분류.

use serde::{Deserialize, Serialize};

/// PPE 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PpeClass {
    /// 카테고리 1~4와 해당 최소 아크 등급 [cal/cm²]
    Category { category: u8, min_arc_rating: f64 },
    /// 40 cal/cm² 초과. PPE만으로 보호할 수 없다.
    Unrealistic,
}

impl PpeClass {
    pub fn category(self) -> Option<u8> {
        match self {
            PpeClass::Category { category, .. } => Some(category),
            PpeClass::Unrealistic => None,
        }
    }

    pub fn min_arc_rating(self) -> Option<f64> {
        match self {
            PpeClass::Category { min_arc_rating, .. } => Some(min_arc_rating),
            PpeClass::Unrealistic => None,
        }
    }

    pub fn is_unrealistic(self) -> bool {
        matches!(self, PpeClass::Unrealistic)
    }
}

// (상한 에너지, 카테고리). 최소 아크 등급은 상한과 같다.
const PPE_TABLE: [(f64, u8); 4] = [(4.0, 1), (8.0, 2), (25.0, 3), (40.0, 4)];

/// 입사 에너지 [cal/cm²]로 PPE 카테고리를 분류한다.
pub fn classify(incident_energy_cal: f64) -> PpeClass {
    PPE_TABLE
        .iter()
        .find(|(ceiling, _)| incident_energy_cal <= *ceiling)
        .map(|&(ceiling, category)| PpeClass::Category {
            category,
            min_arc_rating: ceiling,
        })
        .unwrap_or(PpeClass::Unrealistic)
}

/// 분류 결과에 맞는 보호구/조치 권고 목록.
pub fn recommendations(class: PpeClass) -> Vec<String> {
    let lines: &[&str] = match class {
        PpeClass::Category { category: 1, .. } => &[
            "Arc-rated long-sleeve shirt and trousers or coverall (minimum 4 cal/cm²)",
            "Arc-rated face shield or arc flash suit hood",
            "Hard hat, safety glasses and hearing protection",
            "Heavy-duty leather gloves or rubber insulating gloves with leather protectors",
            "Leather footwear as needed",
        ],
        PpeClass::Category { category: 2, .. } => &[
            "Arc-rated long-sleeve shirt and trousers or coverall (minimum 8 cal/cm²)",
            "Arc-rated flash suit hood, or arc-rated face shield with balaclava",
            "Hard hat, safety glasses and hearing protection",
            "Heavy-duty leather gloves or rubber insulating gloves with leather protectors",
            "Leather footwear",
        ],
        PpeClass::Category { category: 3, .. } => &[
            "Arc-rated flash suit jacket and trousers or coverall (system rating minimum 25 cal/cm²)",
            "Arc-rated flash suit hood",
            "Arc-rated gloves or rubber insulating gloves with leather protectors",
            "Hard hat with arc-rated liner, safety glasses and hearing protection",
            "Leather footwear",
        ],
        PpeClass::Category { .. } => &[
            "Arc-rated flash suit jacket and trousers or coverall (system rating minimum 40 cal/cm²)",
            "Arc-rated flash suit hood",
            "Arc-rated gloves or rubber insulating gloves with leather protectors",
            "Hard hat with arc-rated liner, safety glasses and hearing protection",
            "Leather footwear",
        ],
        PpeClass::Unrealistic => &[
            "No PPE category covers this energy level: do not rely on PPE alone",
            "De-energise and prove dead to establish an electrically safe work condition",
            "Use remote operation or remote racking from outside the arc flash boundary",
            "Apply engineering controls: faster protection (maintenance switch, arc flash relay, bus differential) or current limiting",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}
