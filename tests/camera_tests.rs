//! Camera Tests - Flight Physics, Collision, and the Sphere Barrier
//!
//! Scenario-level tests for the free camera: inertial movement, wall
//! sliding, render interpolation, and the distance tether.

use freecam_engine::input::FlightKeys;
use freecam_engine::physics::{resolve_movement, Aabb, DVec3};
use freecam_engine::{BlockGrid, CollisionWorld, FreeCamera, FreecamConfig};

fn forward_keys() -> FlightKeys {
    FlightKeys {
        forward: true,
        ..FlightKeys::default()
    }
}

// ============================================================================
// Collision Resolver Properties
// ============================================================================

#[test]
fn test_wall_slide_against_block_world() {
    let mut world = BlockGrid::new();
    // Wall filling x = 1, tall and wide enough to block any crossing
    world.fill((1, 60, -8), (1, 70, 8));

    let start = DVec3::new(0.0, 64.0, 0.0);
    let motion = DVec3::new(0.9, 0.0, 0.9);
    let bounds = Aabb::from_footprint(start, 0.6, 1.8);

    let resolved = resolve_movement(start, motion, bounds, |test| world.is_space_empty(test));

    // X is blocked (footprint would reach into the wall), Z slides through
    assert_eq!(resolved.x, 0.0, "motion into the wall is discarded");
    assert_eq!(resolved.z, 0.9, "wall-parallel motion survives");
    assert_eq!(resolved.y, 64.0);
}

#[test]
fn test_sub_threshold_motion_returns_input_exactly() {
    let mut world = BlockGrid::new();
    world.fill((-2, 62, -2), (2, 66, 2)); // solid everywhere around

    let start = DVec3::new(0.25, 63.0, 0.25);
    let motion = DVec3::new(0.004, 0.004, 0.004);
    let bounds = Aabb::from_footprint(start, 0.6, 1.8);

    let resolved = resolve_movement(start, motion, bounds, |test| world.is_space_empty(test));
    assert_eq!(resolved, start, "noise-level motion must be ignored bit-for-bit");
}

// ============================================================================
// Look Direction
// ============================================================================

#[test]
fn test_pitch_stays_in_range_under_extreme_input() {
    let mut camera = FreeCamera::new(DVec3::ZERO, 0.0, 0.0);

    for _ in 0..50 {
        camera.change_look_direction(12345.0, 98765.0, 3.0);
        assert!(camera.get_pitch() <= 90.0);
        assert!(camera.get_pitch() >= -90.0);
    }

    for _ in 0..50 {
        camera.change_look_direction(-12345.0, -98765.0, 3.0);
        assert!(camera.get_pitch() <= 90.0);
        assert!(camera.get_pitch() >= -90.0);
    }
}

// ============================================================================
// Velocity Smoothing
// ============================================================================

#[test]
fn test_zero_input_decay_is_strictly_decreasing() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    // Build up speed first
    for _ in 0..8 {
        camera.tick(&forward_keys(), &world, anchor, &config);
    }

    let idle = FlightKeys::new();
    let mut previous = camera.get_velocity().length();
    assert!(previous > 0.1);

    for _ in 0..30 {
        camera.tick(&idle, &world, anchor, &config);
        let speed = camera.get_velocity().length();
        assert!(speed < previous, "speed must strictly decrease each tick");
        assert!(speed > 0.0, "halving never algebraically reaches zero");
        previous = speed;
    }
}

#[test]
fn test_first_tick_reaches_half_target_speed() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    camera.tick(&forward_keys(), &world, anchor, &config);
    assert!((camera.get_velocity().length() - 0.1).abs() < 1e-12);
}

// ============================================================================
// Render Interpolation
// ============================================================================

#[test]
fn test_interpolation_endpoints_and_linearity() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    camera.tick(&forward_keys(), &world, anchor, &config);
    let after_first = camera.get_position();
    camera.tick(&forward_keys(), &world, anchor, &config);

    assert_eq!(camera.get_interpolated_position(0.0), after_first);
    assert_eq!(camera.get_interpolated_position(1.0), camera.get_position());

    let mid = camera.get_interpolated_position(0.5);
    let expected = (after_first + camera.get_position()) * 0.5;
    assert!((mid - expected).length() < 1e-12, "interpolation is linear per axis");

    // Monotonic along the path
    let quarter = camera.get_interpolated_position(0.25);
    let three_quarter = camera.get_interpolated_position(0.75);
    assert!(quarter.z < mid.z && mid.z < three_quarter.z);
}

// ============================================================================
// Sphere Barrier
// ============================================================================

#[test]
fn test_barrier_clamps_distance_and_strips_outward_velocity() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig {
        move_speed: 5.0, // fast enough to overshoot the tether quickly
        ..FreecamConfig::default()
    };
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    let mut clamped_ticks = 0;
    for _ in 0..20 {
        camera.tick(&forward_keys(), &world, anchor, &config);

        let offset = camera.get_position() - anchor;
        let distance = offset.length();
        assert!(
            distance <= f64::from(config.max_distance) + 1e-9,
            "camera escaped the tether: {distance}"
        );

        if distance >= f64::from(config.max_distance) - 1e-9 {
            clamped_ticks += 1;
            let outward = offset / distance;
            assert!(
                camera.get_velocity().dot(outward) <= 1e-9,
                "outward radial velocity must be stripped at the boundary"
            );
        }
    }
    assert!(clamped_ticks > 0, "scenario never reached the barrier");
}

#[test]
fn test_barrier_preserves_tangential_velocity() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(DVec3::new(0.0, 64.0, 11.9), 0.0, 0.0);
    camera.velocity = DVec3::new(1.0, 0.0, 1.0);

    // No keys: the tick halves the velocity, moves, then hits the barrier
    camera.tick(&FlightKeys::new(), &world, anchor, &config);

    let offset = camera.get_position() - anchor;
    let distance = offset.length();
    assert!((distance - 12.0).abs() < 1e-9, "clamped onto the sphere surface");

    let outward = offset / distance;
    let velocity = camera.get_velocity();
    assert!(velocity.dot(outward).abs() < 1e-9, "radial component removed");
    assert!(velocity.x > 0.4, "tangential sliding component survives");
}

#[test]
fn test_inward_velocity_passes_the_barrier_untouched() {
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();

    // Parked outside the sphere, moving back toward the anchor
    let mut camera = FreeCamera::new(DVec3::new(0.0, 64.0, 14.0), 0.0, 0.0);
    camera.velocity = DVec3::new(0.0, 0.0, -0.4);

    camera.tick(&FlightKeys::new(), &world, anchor, &config);

    // Velocity halved by smoothing but not projected: it points inward
    assert!((camera.get_velocity().z + 0.2).abs() < 1e-9);
}

// ============================================================================
// End-to-End Flight Scenario
// ============================================================================

#[test]
fn test_forward_flight_scenario_matches_smoothing_law() {
    // Avatar pose at (0, 64, 0) facing yaw 0; forward held for 10 ticks at
    // moveSpeed 0.2, no sprint, open world, tether 12 m.
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    for _ in 0..10 {
        camera.tick(&forward_keys(), &world, anchor, &config);
    }

    // Velocity after tick k is 0.2 * (1 - 0.5^k); displacement is the sum:
    // 0.2 * 10 - 0.2 * (1 - 2^-10) = 1.80019...
    let expected = 0.2 * 10.0 - 0.2 * (1.0 - 0.5f64.powi(10));
    let z = camera.get_position().z;

    assert!((z - expected).abs() < 1e-9, "z was {z}, expected {expected}");
    assert!(z < 10.0 * 0.2, "inertia must keep the camera short of the no-smoothing distance");
    assert!(camera.get_position().distance(anchor) <= 12.0);
    assert_eq!(camera.get_position().x, 0.0);
    assert_eq!(camera.get_position().y, 64.0);
}

#[test]
fn test_sprint_scenario_effective_speed() {
    // moveSpeed 0.2 with sprintMultiplier 2.5 -> target speed 0.5
    let world = BlockGrid::new();
    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    let keys = FlightKeys {
        forward: true,
        sprint: true,
        ..FlightKeys::default()
    };
    for _ in 0..20 {
        camera.tick(&keys, &world, anchor, &config);
    }

    assert!((camera.get_velocity().length() - 0.5).abs() < 1e-3);
}

#[test]
fn test_camera_stops_at_a_wall_but_keeps_sliding() {
    let mut world = BlockGrid::new();
    // Wall across the +Z flight line, 4 m ahead
    world.fill((-8, 60, 4), (8, 70, 4));

    let anchor = DVec3::new(0.0, 64.0, 0.0);
    let config = FreecamConfig::default();
    let mut camera = FreeCamera::new(anchor, 0.0, 0.0);

    // Fly diagonally into the wall: forward (+Z, blocked) plus left (+X, free)
    let keys = FlightKeys {
        forward: true,
        left: true,
        ..FlightKeys::default()
    };
    for _ in 0..60 {
        camera.tick(&keys, &world, anchor, &config);
    }

    // Footprint half-width is 0.3, so the camera center can never pass 3.7
    assert!(camera.get_position().z <= 3.7 + 1e-9);
    assert!(camera.get_position().x > 3.0, "slides along the wall on the free axis");
}
