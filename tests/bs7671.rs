//! BS 7671 최대 차단시간 판정 테스트.
use arc_flash_toolbox::arcflash::{
    check_disconnection_time, CheckOutcome, CircuitType, EarthingSystem,
};

#[test]
fn three_phase_tn_final_circuit() {
    // 415 V → U0 ≈ 240 V → 230 < U0 ≤ 400 구간, TN 0.2 s
    let pass = check_disconnection_time(415.0, 0.1, CircuitType::FinalUpTo32A, EarthingSystem::TnCS);
    assert_eq!(pass.outcome, CheckOutcome::Pass);
    assert_eq!(pass.max_disconnection_time, Some(0.2));
    assert!(pass.message.starts_with("PASS"));

    let fail = check_disconnection_time(415.0, 0.3, CircuitType::FinalUpTo32A, EarthingSystem::TnS);
    assert_eq!(fail.outcome, CheckOutcome::Fail);
    assert!(fail.message.starts_with("FAIL"));
}

#[test]
fn tt_limits_are_shorter() {
    // 230 V → U0 ≈ 133 V → 120 < U0 ≤ 230 구간
    let tn = check_disconnection_time(230.0, 0.1, CircuitType::FinalUpTo32A, EarthingSystem::TnS);
    let tt = check_disconnection_time(230.0, 0.1, CircuitType::FinalUpTo32A, EarthingSystem::Tt);
    assert_eq!(tn.max_disconnection_time, Some(0.4));
    assert_eq!(tt.max_disconnection_time, Some(0.2));
}

#[test]
fn distribution_circuits_use_five_and_one_seconds() {
    let tn = check_disconnection_time(415.0, 1.5, CircuitType::Distribution, EarthingSystem::TnCS);
    assert_eq!(tn.outcome, CheckOutcome::Pass);
    assert_eq!(tn.max_disconnection_time, Some(5.0));

    let tt = check_disconnection_time(415.0, 1.5, CircuitType::FinalOver32A, EarthingSystem::Tt);
    assert_eq!(tt.outcome, CheckOutcome::Fail);
    assert_eq!(tt.max_disconnection_time, Some(1.0));
}

#[test]
fn outside_bs7671_scope_is_advisory() {
    let hv = check_disconnection_time(11_000.0, 0.2, CircuitType::FinalUpTo32A, EarthingSystem::TnS);
    assert_eq!(hv.outcome, CheckOutcome::Advisory);
    assert_eq!(hv.max_disconnection_time, None);

    let elv = check_disconnection_time(80.0, 0.2, CircuitType::FinalUpTo32A, EarthingSystem::TnS);
    assert_eq!(elv.outcome, CheckOutcome::Advisory);
    assert!(elv.message.starts_with("ADVISORY"));
}
