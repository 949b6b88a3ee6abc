//! 입력 검증 규칙 테스트. 모든 필드를 평가하며 같은 필드는 마지막 메시지가 남는다.
use arc_flash_toolbox::arcflash::{
    calculate_arc_flash, parse_raw_inputs, validate_inputs, ArcFlashInputs, EquipmentType,
    InputField, RawInputs,
};

fn valid() -> ArcFlashInputs {
    ArcFlashInputs::for_equipment(EquipmentType::Panelboard, 415.0, 25_000.0, 0.1)
}

#[test]
fn valid_inputs_give_empty_map() {
    assert!(validate_inputs(&valid()).is_empty());
}

#[test]
fn negative_voltage_reports_range_message() {
    let errors = validate_inputs(&ArcFlashInputs {
        voltage: -5.0,
        ..valid()
    });
    assert_eq!(
        errors.get(InputField::Voltage),
        Some("Outside IEEE 1584 range (208-15000V)")
    );
}

#[test]
fn every_field_is_checked() {
    let errors = validate_inputs(&ArcFlashInputs {
        voltage: 100.0,
        bolted_fault_current: 500.0,
        clearing_time: 3.0,
        working_distance: 150.0,
        conductor_gap: Some(0.0),
        ..valid()
    });
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.get(InputField::BoltedFaultCurrent),
        Some("Outside typical range (700-106000A)")
    );
    assert_eq!(
        errors.get(InputField::ClearingTime),
        Some("Clearing time above 2s indicates sustained arc risk")
    );
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Below 200mm not recommended")
    );
    assert_eq!(
        errors.get(InputField::ConductorGap),
        Some("Conductor gap must be positive")
    );
}

#[test]
fn zero_time_must_be_positive_and_zero_distance_is_too_close() {
    let errors = validate_inputs(&ArcFlashInputs {
        clearing_time: 0.0,
        working_distance: 0.0,
        ..valid()
    });
    assert_eq!(
        errors.get(InputField::ClearingTime),
        Some("Clearing time must be positive")
    );
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Below 200mm not recommended")
    );
}

#[test]
fn range_limits_are_inclusive() {
    let errors = validate_inputs(&ArcFlashInputs {
        voltage: 208.0,
        bolted_fault_current: 106_000.0,
        clearing_time: 2.0,
        working_distance: 200.0,
        ..valid()
    });
    assert!(errors.is_empty(), "{errors}");
}

#[test]
fn raw_inputs_parse_and_validate() {
    let raw = RawInputs {
        voltage: "415".into(),
        bolted_fault_current: " 25000 ".into(),
        clearing_time: "0.1".into(),
        working_distance: "450".into(),
        conductor_gap: "auto".into(),
    };
    let inputs = parse_raw_inputs(&raw, valid()).expect("valid raw input");
    assert_eq!(inputs.voltage, 415.0);
    assert_eq!(inputs.bolted_fault_current, 25_000.0);
    assert_eq!(inputs.working_distance, 450.0);
    assert_eq!(inputs.conductor_gap, None);
    assert_eq!(inputs.equipment_type, EquipmentType::Panelboard);
}

#[test]
fn raw_inputs_report_missing_and_non_numeric() {
    let raw = RawInputs {
        voltage: "".into(),
        bolted_fault_current: "lots".into(),
        clearing_time: "3".into(),
        working_distance: "450".into(),
        conductor_gap: "x".into(),
    };
    let errors = parse_raw_inputs(&raw, valid()).expect_err("invalid raw input");
    assert_eq!(errors.get(InputField::Voltage), Some("Voltage is required"));
    assert_eq!(
        errors.get(InputField::BoltedFaultCurrent),
        Some("Fault current must be a number")
    );
    assert_eq!(
        errors.get(InputField::ClearingTime),
        Some("Clearing time above 2s indicates sustained arc risk")
    );
    assert_eq!(
        errors.get(InputField::ConductorGap),
        Some("Conductor gap must be a number")
    );
    assert_eq!(errors.get(InputField::WorkingDistance), None);
}

#[test]
fn errors_display_lists_fields() {
    let errors = validate_inputs(&ArcFlashInputs {
        voltage: 100.0,
        ..valid()
    });
    let text = errors.to_string();
    assert!(text.starts_with("invalid input"));
    assert!(text.contains("Voltage: Outside IEEE 1584 range"));
}

#[test]
fn non_finite_values_are_rejected() {
    let errors = validate_inputs(&ArcFlashInputs {
        voltage: f64::NAN,
        bolted_fault_current: f64::INFINITY,
        clearing_time: f64::NAN,
        working_distance: f64::INFINITY,
        conductor_gap: Some(f64::INFINITY),
        ..valid()
    });
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.get(InputField::Voltage),
        Some("Voltage must be a finite number")
    );
    assert_eq!(
        errors.get(InputField::BoltedFaultCurrent),
        Some("Fault current must be a finite number")
    );
    assert_eq!(
        errors.get(InputField::ClearingTime),
        Some("Clearing time must be a finite number")
    );
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Working distance must be a finite number")
    );
    assert_eq!(
        errors.get(InputField::ConductorGap),
        Some("Conductor gap must be a finite number")
    );
}

#[test]
fn infinite_distance_is_not_calculated() {
    let inputs = ArcFlashInputs {
        working_distance: f64::INFINITY,
        ..valid()
    };
    let errors = calculate_arc_flash(&inputs).expect_err("infinite distance");
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Working distance must be a finite number")
    );
}

#[test]
fn raw_inf_text_is_rejected() {
    let raw = RawInputs {
        voltage: "415".into(),
        bolted_fault_current: "25000".into(),
        clearing_time: "0.1".into(),
        working_distance: "inf".into(),
        conductor_gap: "NaN".into(),
    };
    let errors = parse_raw_inputs(&raw, valid()).expect_err("non-finite raw input");
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Working distance must be a finite number")
    );
    assert_eq!(
        errors.get(InputField::ConductorGap),
        Some("Conductor gap must be a finite number")
    );
}

#[test]
fn negative_values_report_range_message_for_every_field() {
    let errors = validate_inputs(&ArcFlashInputs {
        bolted_fault_current: -1.0,
        working_distance: -1.0,
        ..valid()
    });
    assert_eq!(
        errors.get(InputField::BoltedFaultCurrent),
        Some("Outside typical range (700-106000A)")
    );
    assert_eq!(
        errors.get(InputField::WorkingDistance),
        Some("Below 200mm not recommended")
    );
}
