//! Sphere Feast headless driver
//!
//! Stands in for the rendering/input collaborators: paces ticks with a
//! fixed-timestep accumulator, steers the player with a simple autopilot,
//! resets after each game over and prints the results as JSON.
//!
//! Usage: `sphere-feast [config.json] [--runs N] [--max-ticks N] [--realtime]`

use std::time::{Duration, Instant};

use glam::Vec2;
use sphere_feast::consts::*;
use sphere_feast::sim::{MoveIntent, SimulationSnapshot};
use sphere_feast::{SimConfig, Simulation};

/// Distance at which a larger rival makes the autopilot run away
const FLEE_DISTANCE: f32 = 25.0;

/// Driver state wrapped around the simulation
struct Game {
    sim: Simulation,
    snapshot: SimulationSnapshot,
    accumulator: f32,
    ticks: u64,
}

impl Game {
    fn new(sim: Simulation) -> Self {
        let snapshot = sim.snapshot();
        Self {
            sim,
            snapshot,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Run as many fixed ticks as the elapsed frame time allows
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let intent = autopilot(&self.snapshot);
            self.snapshot = self.sim.tick(&intent);
            self.accumulator -= SIM_DT;
            self.ticks += 1;
            substeps += 1;
            if !self.snapshot.running {
                break;
            }
        }
    }
}

/// Head for the nearest edible body unless a bigger rival is close
fn autopilot(snapshot: &SimulationSnapshot) -> MoveIntent {
    let player = &snapshot.player;
    let here = Vec2::new(player.pos.x, player.pos.z);
    let planar = |p: glam::Vec3| Vec2::new(p.x, p.z);

    let threat = snapshot
        .rivals
        .iter()
        .filter(|r| r.radius > player.radius * DOMINANCE_MARGIN)
        .map(|r| planar(r.pos))
        .filter(|p| p.distance(here) < FLEE_DISTANCE + player.radius)
        .min_by(|a, b| a.distance(here).total_cmp(&b.distance(here)));

    if let Some(threat) = threat {
        let away = (here - threat).normalize_or_zero();
        return MoveIntent::toward(here + away * FLEE_DISTANCE);
    }

    let prey = snapshot
        .rivals
        .iter()
        .filter(|r| player.radius > r.radius * DOMINANCE_MARGIN)
        .map(|r| planar(r.pos));
    let food = snapshot.food.iter().map(|f| planar(f.pos));

    prey.chain(food)
        .min_by(|a, b| a.distance(here).total_cmp(&b.distance(here)))
        .map(MoveIntent::toward)
        .unwrap_or_default()
}

struct Args {
    config: SimConfig,
    runs: u32,
    max_ticks: u64,
    realtime: bool,
}

fn parse_args() -> sphere_feast::Result<Args> {
    let mut args = Args {
        config: SimConfig::default(),
        runs: 3,
        max_ticks: 20_000,
        realtime: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--runs" => args.runs = parse_number(iter.next(), "--runs")?,
            "--max-ticks" => args.max_ticks = parse_number(iter.next(), "--max-ticks")?,
            "--realtime" => args.realtime = true,
            path => args.config = SimConfig::from_json_file(path)?,
        }
    }
    Ok(args)
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    flag: &str,
) -> sphere_feast::Result<T> {
    value.and_then(|v| v.parse().ok()).ok_or_else(|| {
        sphere_feast::SimError::InvalidConfiguration(format!("{flag} expects a number"))
    })
}

fn run(args: Args) -> sphere_feast::Result<()> {
    let mut game = Game::new(Simulation::new(args.config)?);
    let mut runs = 0;
    let mut last_frame = Instant::now();

    while game.ticks < args.max_ticks {
        let dt = if args.realtime {
            std::thread::sleep(Duration::from_secs_f32(SIM_DT));
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            dt
        } else {
            SIM_DT
        };

        game.update(dt);

        if !game.snapshot.running {
            runs += 1;
            log::info!(
                "Run {} ended: score {}, mass {:.1}, rivals left {}",
                runs,
                game.snapshot.score,
                game.snapshot.player.mass,
                game.snapshot.rivals.len()
            );
            if runs >= args.runs {
                break;
            }
            game.snapshot = game.sim.reset();
            game.accumulator = 0.0;
        }
    }

    println!("{}", serde_json::to_string_pretty(game.sim.high_scores())?);
    println!("{}", serde_json::to_string(&game.snapshot)?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Sphere Feast (headless) starting...");

    let result = parse_args().and_then(run);
    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
