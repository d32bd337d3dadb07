mod support;

use sim_hardware::domain::Reading;
use sim_hardware::{RunConfig, run};
use std::time::Duration;

#[tokio::test]
async fn when_short_seeded_run_completes_then_vehicle_has_climbed_and_drained() {
    let config = RunConfig {
        seed: Some(support::SEED),
        tick_hz: 500,
        duration: Duration::from_secs(2),
        hover_throttle: 0.8,
        telemetry_every: 100,
        ..RunConfig::default()
    };

    let summary = run(config).await.expect("run should succeed");
    assert_eq!(summary.ticks, 1000);
    assert!(!summary.interrupted);
    assert!(summary.final_state.position.z > 0.0);
    assert!(summary.remaining_mah < 5000.0);
}

#[tokio::test]
async fn when_setup_is_invalid_then_run_reports_an_error() {
    let config = RunConfig {
        mass: 0.0,
        duration: Duration::from_millis(10),
        ..RunConfig::default()
    };
    assert!(run(config).await.is_err());
}

#[test]
fn when_vehicle_hovers_near_wall_then_lidar_sees_it_every_sample() {
    let mut vehicle = support::vehicle();
    vehicle.set_throttle_all(0.7);

    for _ in 0..100 {
        vehicle.tick(0.02);
        let readings = vehicle.sample();
        let scan = readings
            .iter()
            .find_map(|r| match r {
                Reading::Lidar(scan) => Some(scan),
                _ => None,
            })
            .expect("lidar reading present");
        assert!(scan.points.iter().any(|p| (p.x - 9.5).abs() < 1e-6));
    }
}
