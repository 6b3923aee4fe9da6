//! Walkthrough demo
//!
//! Headless run of the collision response: builds a tiled corridor, walks the
//! camera down it into the end wall, turns, and slides along the walls. Each
//! phase logs how many ticks collided or got stuck and where the camera ended.
//!
//! Usage: `walkthrough [config.toml|config.ron]`

use std::time::Duration;

use slide_engine::foundation::logging;
use slide_engine::prelude::*;

/// Default tick length when the config does not fix one
const DEFAULT_DELTA: f64 = 1.0 / 60.0;

/// One scripted stretch of movement
struct Phase {
    label: &'static str,
    direction: CameraDirection,
    /// Mouse x offset applied before the phase starts
    turn: f64,
    ticks: u32,
}

#[derive(Default)]
struct PhaseStats {
    collided: u32,
    stuck: u32,
    sliding: u32,
}

/// Grid of quads centered on `center`, `cells_u` by `cells_v`, facing
/// `half_u x half_v`
///
/// Walls are tiled because the near test only looks at vertices: a single
/// huge quad would never be considered near.
fn grid(center: Vec3, half_u: Vec3, half_v: Vec3, cells_u: u32, cells_v: u32) -> (Vec<Vec3>, Vec<u32>) {
    let origin = center - half_u - half_v;
    let step_u = half_u * 2.0 / cells_u as f32;
    let step_v = half_v * 2.0 / cells_v as f32;

    let mut positions = Vec::new();
    for j in 0..=cells_v {
        for i in 0..=cells_u {
            positions.push(origin + step_u * i as f32 + step_v * j as f32);
        }
    }

    let row = cells_u + 1;
    let mut indices = Vec::new();
    for j in 0..cells_v {
        for i in 0..cells_u {
            let p00 = j * row + i;
            let p10 = p00 + 1;
            let p01 = p00 + row;
            let p11 = p01 + 1;
            indices.extend_from_slice(&[p00, p10, p11, p00, p11, p01]);
        }
    }

    (positions, indices)
}

/// Corridor along -z: floor at y = -1, side walls at x = -2 and x = 2, end
/// wall at z = -20
fn build_corridor() -> Result<Level, GeometryError> {
    let mut level = Level::new("corridor");

    let length_center = Vec3::new(0.0, 0.0, -9.0);
    let half_length = Vec3::new(0.0, 0.0, 11.0);
    let half_height = Vec3::new(0.0, 1.5, 0.0);
    let half_width = Vec3::new(2.0, 0.0, 0.0);

    let (positions, indices) = grid(length_center + Vec3::new(0.0, -1.0, 0.0), half_length, half_width, 11, 2);
    level.add_actor(MeshActor::new("floor", positions, indices)?);

    let (positions, indices) = grid(length_center + Vec3::new(-2.0, 0.5, 0.0), half_height, half_length, 2, 11);
    level.add_actor(MeshActor::new("left_wall", positions, indices)?);

    let (positions, indices) = grid(length_center + Vec3::new(2.0, 0.5, 0.0), half_length, half_height, 11, 2);
    level.add_actor(MeshActor::new("right_wall", positions, indices)?);

    let (positions, indices) = grid(Vec3::new(0.0, 0.5, -20.0), half_width, half_height, 2, 2);
    level.add_actor(MeshActor::new("end_wall", positions, indices)?);

    level.rebuild_collision();
    Ok(level)
}

fn load_config() -> Result<ApplicationConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => ApplicationConfig::load_from_file(path)?,
        None => ApplicationConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting walkthrough demo");

    let level = build_corridor()?;
    let physics = PhysicsSystem::new(config.collision.clone());
    let mut camera = Camera::new(Vec3::zeros(), 16.0 / 9.0, &config.camera);

    let phases = [
        Phase { label: "walk to end wall", direction: CameraDirection::Front, turn: 0.0, ticks: 480 },
        // Short enough to stay clear of the corner: only one wall is
        // resolved per tick, so sliding into the side wall passes through it
        Phase { label: "slide along end wall", direction: CameraDirection::Front, turn: -112.5, ticks: 20 },
        Phase { label: "back away diagonally", direction: CameraDirection::BackLeft, turn: 0.0, ticks: 120 },
        Phase { label: "strafe into right wall", direction: CameraDirection::Right, turn: 112.5, ticks: 120 },
    ];

    let mut timestep = TimeStep::new(config.engine.rt_speed);
    let mut scan_time = Stopwatch::default();
    let mut total_ticks = 0u64;

    for phase in &phases {
        if phase.turn != 0.0 {
            camera.look(phase.turn, 0.0);
        }
        camera.set_direction(Some(phase.direction));

        let mut stats = PhaseStats::default();
        for _ in 0..phase.ticks {
            let delta = match config.engine.fixed_delta {
                Some(delta) => delta,
                None => {
                    std::thread::sleep(Duration::from_secs_f64(DEFAULT_DELTA));
                    let delta = timestep.analyse();
                    timestep.reset();
                    delta
                }
            };

            scan_time.start();
            let result = camera.update_interpolation(&physics, delta, level.world());
            scan_time.stop();
            total_ticks += 1;

            if let Some(result) = result {
                stats.collided += u32::from(result.collided);
                match result.state {
                    ResponseState::Stuck(_) => stats.stuck += 1,
                    ResponseState::Sliding(_) => stats.sliding += 1,
                    ResponseState::Free | ResponseState::Near => {}
                }
            }
        }
        camera.set_direction(None);

        log::info!(
            "{}: {} tick(s), {} collided ({} sliding, {} stuck), camera at {:?} yaw {:.1}",
            phase.label,
            phase.ticks,
            stats.collided,
            stats.sliding,
            stats.stuck,
            camera.position(),
            camera.yaw()
        );
    }

    log::info!(
        "Walkthrough complete: {} tick(s) against {} triangle(s), {} us in collision response",
        total_ticks,
        level.world().len(),
        scan_time.elapsed_micros()
    );

    Ok(())
}
