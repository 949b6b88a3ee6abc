//! 입력값 검증. 모든 규칙을 빠짐없이 평가하고 필드별 오류 메시지를 모은다.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::coefficients::envelope;
use super::inputs::ArcFlashInputs;

/// 검증 대상 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Voltage,
    BoltedFaultCurrent,
    ClearingTime,
    WorkingDistance,
    ConductorGap,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            InputField::Voltage => "Voltage",
            InputField::BoltedFaultCurrent => "Fault current",
            InputField::ClearingTime => "Clearing time",
            InputField::WorkingDistance => "Working distance",
            InputField::ConductorGap => "Conductor gap",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 필드 → 오류 메시지 맵. 비어 있으면 유효한 입력이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("invalid input: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<InputField, String>,
}

fn summarize(errors: &BTreeMap<InputField, String>) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("{field}: {msg}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: InputField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (InputField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// 같은 필드에 이미 메시지가 있으면 덮어쓴다.
    fn set(&mut self, field: InputField, msg: impl Into<String>) {
        self.errors.insert(field, msg.into());
    }

    fn merge(&mut self, field: InputField, msg: Option<&'static str>) {
        if let Some(m) = msg {
            self.set(field, m);
        }
    }

    /// 비어 있으면 `Ok(())`, 아니면 자기 자신을 오류로 반환한다.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn outside(value: f64, min: f64, max: f64) -> bool {
    !(min..=max).contains(&value)
}

fn check_voltage(v: f64) -> Option<&'static str> {
    let mut msg = None;
    if !(v > 0.0) {
        msg = Some("Voltage must be positive");
    }
    if outside(v, envelope::VOLTAGE_MIN_V, envelope::VOLTAGE_MAX_V) {
        msg = Some("Outside IEEE 1584 range (208-15000V)");
    }
    if !v.is_finite() {
        msg = Some("Voltage must be a finite number");
    }
    msg
}

fn check_fault_current(i: f64) -> Option<&'static str> {
    let mut msg = None;
    if !(i > 0.0) {
        msg = Some("Fault current must be positive");
    }
    if outside(i, 700.0, envelope::LV_FAULT_MAX_A) {
        msg = Some("Outside typical range (700-106000A)");
    }
    if !i.is_finite() {
        msg = Some("Fault current must be a finite number");
    }
    msg
}

fn check_clearing_time(t: f64) -> Option<&'static str> {
    let mut msg = None;
    if !(t > 0.0) {
        msg = Some("Clearing time must be positive");
    }
    if t > envelope::SUSTAINED_ARC_TIME_S {
        msg = Some("Clearing time above 2s indicates sustained arc risk");
    }
    if !t.is_finite() {
        msg = Some("Clearing time must be a finite number");
    }
    msg
}

fn check_working_distance(d: f64) -> Option<&'static str> {
    let mut msg = None;
    if !(d > 0.0) {
        msg = Some("Working distance must be positive");
    }
    if d < 200.0 {
        msg = Some("Below 200mm not recommended");
    }
    if !d.is_finite() {
        msg = Some("Working distance must be a finite number");
    }
    msg
}

fn check_gap(gap: Option<f64>) -> Option<&'static str> {
    match gap {
        Some(g) if !g.is_finite() => Some("Conductor gap must be a finite number"),
        Some(g) if !(g > 0.0) => Some("Conductor gap must be positive"),
        _ => None,
    }
}

/// 입력값을 검증한다. 반환 맵이 비어 있을 때만 계산을 진행한다.
pub fn validate_inputs(inputs: &ArcFlashInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.merge(InputField::Voltage, check_voltage(inputs.voltage));
    errors.merge(InputField::BoltedFaultCurrent, check_fault_current(inputs.bolted_fault_current));
    errors.merge(InputField::ClearingTime, check_clearing_time(inputs.clearing_time));
    errors.merge(InputField::WorkingDistance, check_working_distance(inputs.working_distance));
    errors.merge(InputField::ConductorGap, check_gap(inputs.conductor_gap));
    errors
}

/// 폼에서 받은 문자열 입력.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub voltage: String,
    pub bolted_fault_current: String,
    pub clearing_time: String,
    pub working_distance: String,
    /// 비어 있거나 "auto"이면 기본 간격을 사용한다.
    #[serde(default)]
    pub conductor_gap: String,
}

fn parse_field(raw: &str, field: InputField, errors: &mut ValidationErrors) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        errors.set(field, format!("{} is required", field.label()));
        return None;
    }
    match s.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.set(field, format!("{} must be a number", field.label()));
            None
        }
    }
}

/// 문자열 입력을 파싱·검증해 `base`의 숫자 필드를 채운 입력을 돌려준다.
///
/// 설비/전극/외함 등 선택형 값은 `base`의 값을 그대로 사용한다.
pub fn parse_raw_inputs(raw: &RawInputs, base: ArcFlashInputs) -> Result<ArcFlashInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let voltage = parse_field(&raw.voltage, InputField::Voltage, &mut errors);
    let current = parse_field(&raw.bolted_fault_current, InputField::BoltedFaultCurrent, &mut errors);
    let time = parse_field(&raw.clearing_time, InputField::ClearingTime, &mut errors);
    let distance = parse_field(&raw.working_distance, InputField::WorkingDistance, &mut errors);

    let gap_raw = raw.conductor_gap.trim();
    let gap = if gap_raw.is_empty() || gap_raw.eq_ignore_ascii_case("auto") {
        None
    } else {
        parse_field(gap_raw, InputField::ConductorGap, &mut errors)
    };

    if let Some(v) = voltage {
        errors.merge(InputField::Voltage, check_voltage(v));
    }
    if let Some(i) = current {
        errors.merge(InputField::BoltedFaultCurrent, check_fault_current(i));
    }
    if let Some(t) = time {
        errors.merge(InputField::ClearingTime, check_clearing_time(t));
    }
    if let Some(d) = distance {
        errors.merge(InputField::WorkingDistance, check_working_distance(d));
    }
    errors.merge(InputField::ConductorGap, check_gap(gap));

    match (voltage, current, time, distance) {
        (Some(voltage), Some(bolted_fault_current), Some(clearing_time), Some(working_distance))
            if errors.is_empty() =>
        {
            Ok(ArcFlashInputs {
                voltage,
                bolted_fault_current,
                clearing_time,
                working_distance,
                conductor_gap: gap,
                ..base
            })
        }
        _ => Err(errors),
    }
}
