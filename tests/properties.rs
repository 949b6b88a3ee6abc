//! 거리·시간 단조성, 경계 자기일관성, PPE 계단 함수의 성질 테스트.
use arc_flash_toolbox::arcflash::ppe;
use arc_flash_toolbox::arcflash::{
    calculate_arc_flash, ArcFlashInputs, ElectrodeConfig, EquipmentType,
};
use proptest::prelude::*;

fn inputs_strategy() -> impl Strategy<Value = ArcFlashInputs> {
    (
        208.0f64..15_000.0,
        700.0f64..106_000.0,
        0.01f64..1.0,
        200.0f64..3000.0,
        0usize..EquipmentType::ALL.len(),
        0usize..ElectrodeConfig::ALL.len(),
    )
        .prop_map(|(v, ibf, t, d, eq, cfg)| ArcFlashInputs {
            working_distance: d,
            electrode_config: ElectrodeConfig::ALL[cfg],
            ..ArcFlashInputs::for_equipment(EquipmentType::ALL[eq], v, ibf, t)
        })
}

fn rank(energy: f64) -> u8 {
    ppe::classify(energy).category().unwrap_or(5)
}

proptest! {
    #[test]
    fn energy_decreases_with_distance(inputs in inputs_strategy(), extra in 1.0f64..1000.0) {
        let near = calculate_arc_flash(&inputs).expect("valid");
        let far = calculate_arc_flash(&ArcFlashInputs {
            working_distance: inputs.working_distance + extra,
            ..inputs
        })
        .expect("valid");
        prop_assert!(far.incident_energy < near.incident_energy);
    }

    #[test]
    fn energy_is_linear_in_time(inputs in inputs_strategy()) {
        let single = calculate_arc_flash(&inputs).expect("valid");
        let double = calculate_arc_flash(&ArcFlashInputs {
            clearing_time: inputs.clearing_time * 2.0,
            ..inputs
        })
        .expect("valid");
        let ratio = double.incident_energy / single.incident_energy;
        prop_assert!((ratio - 2.0).abs() < 1e-9, "ratio={}", ratio);
    }

    #[test]
    fn arcing_current_below_bolted(inputs in inputs_strategy()) {
        let res = calculate_arc_flash(&inputs).expect("valid");
        prop_assert!(res.arcing_current > 0.0);
        prop_assert!(res.arcing_current * 1000.0 < inputs.bolted_fault_current);
    }

    #[test]
    fn joules_are_calories_times_4_184(inputs in inputs_strategy()) {
        let res = calculate_arc_flash(&inputs).expect("valid");
        let expected = res.incident_energy * 4.184;
        prop_assert!((res.incident_energy_joules - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn boundary_reproduces_threshold(inputs in inputs_strategy()) {
        let res = calculate_arc_flash(&inputs).expect("valid");
        prop_assume!(res.arc_flash_boundary >= 200.0);
        let at_boundary = calculate_arc_flash(&ArcFlashInputs {
            working_distance: res.arc_flash_boundary,
            ..inputs
        })
        .expect("valid");
        prop_assert!((at_boundary.incident_energy - 1.2).abs() < 0.012);
    }

    #[test]
    fn ppe_category_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(lo) <= rank(hi));
    }
}
