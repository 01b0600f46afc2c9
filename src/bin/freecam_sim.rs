//! Freecam Simulator
//!
//! Headless reference host for the freecam engine. Wires the session
//! controller to a small voxel world, a scripted input stream, and a console
//! "renderer", and demonstrates the three host interception points: avatar
//! input is suppressed, avatar physics keeps running (gravity), and the
//! rendered pose is read from the freecam instead of the avatar while a
//! session is active.
//!
//! Run with `RUST_LOG=info cargo run --bin freecam-sim` to see the engine's
//! own log output alongside the simulation trace.

use std::path::Path;

use freecam_engine::camera::{SessionHost, ViewMode};
use freecam_engine::input::{FlightKey, FreecamInput};
use freecam_engine::physics::{resolve_movement, Aabb, DVec3};
use freecam_engine::{AvatarState, BlockGrid, CollisionWorld, FreecamConfig, FreecamController};

/// Downward acceleration applied to the avatar, in meters per tick squared.
const GRAVITY: f64 = 0.08;
/// Avatar hitbox width.
const AVATAR_WIDTH: f64 = 0.6;
/// Avatar hitbox height.
const AVATAR_HEIGHT: f64 = 1.8;
/// Avatar walking speed in meters per tick.
const WALK_SPEED: f64 = 0.1;

/// Console-backed host: perspective is a field, notifications go to stdout.
struct ConsoleHost {
    mode: ViewMode,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            mode: ViewMode::FirstPerson,
        }
    }
}

impl SessionHost for ConsoleHost {
    fn view_mode(&self) -> ViewMode {
        self.mode
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        println!("  [host] view mode -> {mode:?}");
        self.mode = mode;
    }

    fn notify(&mut self, message: &str) {
        println!("  [host] {message}");
    }
}

/// A flat floor with a wall across the camera's flight path.
fn build_world() -> BlockGrid {
    let mut world = BlockGrid::new();
    // Floor top surface at y = 64
    world.fill((-32, 63, -32), (32, 63, 32));
    // Wall 6 m ahead of the spawn point, crossing the +Z flight line
    world.fill((-4, 64, 6), (4, 68, 6));
    world
}

/// One step of the host's own avatar physics: gravity plus collision.
///
/// Runs every tick whether or not the freecam is active; the controller's
/// freeze only pins the horizontal coordinates, so a falling avatar keeps
/// falling.
fn step_avatar_physics(avatar: &mut AvatarState, world: &BlockGrid) {
    avatar.velocity.y -= GRAVITY;

    let bounds = Aabb::from_footprint(avatar.position, AVATAR_WIDTH, AVATAR_HEIGHT);
    let resolved = resolve_movement(avatar.position, avatar.velocity, bounds, |test| {
        world.is_space_empty(test)
    });

    // Landed: cancel the vertical velocity the floor absorbed
    if resolved.y == avatar.position.y {
        avatar.velocity.y = 0.0;
    }
    avatar.position = resolved;
}

/// The host's normal avatar movement, active only while freecam is off.
fn walk_avatar_forward(avatar: &mut AvatarState) {
    let yaw = f64::from(avatar.yaw).to_radians();
    avatar.velocity.x = -yaw.sin() * WALK_SPEED;
    avatar.velocity.z = yaw.cos() * WALK_SPEED;
}

/// Console "renderer": samples the pose the way a real renderer would,
/// between-tick fraction included.
fn render(
    tick: u32,
    controller: &FreecamController,
    avatar: &AvatarState,
    config: &FreecamConfig,
) {
    // Pose override interception point: while enabled the rendered pose
    // comes from the freecam, not the avatar
    let (pose, source) = match controller.camera() {
        Some(camera) => (camera.get_interpolated_position(0.5), "freecam"),
        None => (avatar.position, "avatar"),
    };

    print!(
        "t={tick:3}  {source:7} pose ({:6.2}, {:6.2}, {:6.2})  avatar ({:6.2}, {:6.2}, {:6.2})",
        pose.x, pose.y, pose.z, avatar.position.x, avatar.position.y, avatar.position.z
    );
    match controller.status_overlay(avatar, config) {
        Some(line) => println!("  {line}"),
        None => println!(),
    }
}

fn main() {
    env_logger::init();

    let config = FreecamConfig::load_or_default(Path::new("freecam.json"));
    let world = build_world();
    let mut avatar = AvatarState::new(DVec3::new(0.5, 64.0, 0.5), 0.0, 0.0);
    let mut controller = FreecamController::new();
    let mut host = ConsoleHost::new();
    let mut input = FreecamInput::new();

    println!("freecam-sim: flat floor at y=64, wall 6m ahead (+Z), tether {}m", config.max_distance);

    // A toggle with no world/avatar context must refuse politely
    controller.toggle(None, &mut host);
    assert!(!controller.is_enabled());

    controller.toggle(Some(&avatar), &mut host);

    for tick in 0..80u32 {
        // Scripted "keyboard": fly forward, sprint for a stretch, then stop
        input.keys.handle_key(FlightKey::Forward, tick < 50);
        input.keys.handle_key(FlightKey::Sprint, (20..50).contains(&tick));

        // Scripted "pointer": a slow turn to the right mid-flight
        if (55..65).contains(&tick) {
            input.look.accumulate(2.0, -0.5);
        }

        // Host pointer glue: drain the delta into the camera; taking it is
        // what keeps the same delta from also steering the avatar
        if let Some(camera) = controller.camera_mut() {
            let (dx, dy) = input.look.take();
            camera.change_look_direction(dx, dy, config.mouse_sensitivity);
        }

        // Avatar input interception point: while the freecam is enabled the
        // host feeds the avatar no movement of its own
        if !controller.is_enabled() {
            walk_avatar_forward(&mut avatar);
        }

        step_avatar_physics(&mut avatar, &world);
        controller.tick(&mut avatar, &input.keys, &world, &config);

        if tick % 10 == 0 {
            render(tick, &controller, &avatar, &config);
        }
    }

    controller.toggle(Some(&avatar), &mut host);
    input.reset();

    // With the session over the avatar is free again
    for tick in 80..90u32 {
        walk_avatar_forward(&mut avatar);
        step_avatar_physics(&mut avatar, &world);
        controller.tick(&mut avatar, &input.keys, &world, &config);

        if tick % 5 == 0 {
            render(tick, &controller, &avatar, &config);
        }
    }

    println!("done");
}
