//! Compare the greedy walk with A* on a small map, then drive a navigator
//! across it while obstacles appear.
//!
//! Run with `RUST_LOG=debug` to see the searches being logged.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracegrid_core::{Cell, Connectivity};
use tracegrid_paths::Strategy;
use tracegrid_scene::{Layout, NavUpdate, Scene, SceneConfig};

const MAP: &str = "\
S.......#.....
..####..#..#..
.....#..#..#..
.##..#.....#..
..#..####..#..
..#........#.T";

const CELL_SIZE: f32 = 16.0;
const SEED: u64 = 0x7261_6365;
const DENSITY: f64 = 0.08;
const MAX_FRAMES: usize = 64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let layout = Layout::parse(MAP)?;
    let (Some(start), Some(target)) = (layout.start(), layout.target()) else {
        return Err("map needs both an S and a T marker".into());
    };

    for (name, strategy, connectivity) in [
        ("greedy, 4-connected", Strategy::Greedy, Connectivity::Four),
        ("A*, 4-connected", Strategy::AStar, Connectivity::Four),
        ("greedy, 8-connected", Strategy::Greedy, Connectivity::Eight),
        ("A*, 8-connected", Strategy::AStar, Connectivity::Eight),
    ] {
        let cfg = SceneConfig {
            connectivity,
            strategy,
            ..SceneConfig::default()
        };
        let scene = Scene::from_layout(&layout, cfg)?;
        let r = scene.plan(start, target);
        if r.reachable {
            println!("{name}: {} steps, cost {:.1}", r.steps(), r.cost);
        } else {
            println!("{name}: no route");
        }
        print!("{}", scene.render(&r.path));
        println!();
    }

    let cfg = SceneConfig {
        cell_size: CELL_SIZE,
        strategy: Strategy::AStar,
        ..SceneConfig::default()
    };
    let mut scene = Scene::from_layout(&layout, cfg)?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let n = scene.scatter(&mut rng, DENSITY, &[]);
    log::info!("seed {SEED:#x}: scattered {n} extra blocks");

    let mut nav = scene.navigator(target);
    let mut pos = centre(start);
    for frame in 0..MAX_FRAMES {
        let route = match nav.tick(&scene, pos.0, pos.1) {
            NavUpdate::Arrived => {
                println!("frame {frame}: arrived at {target}");
                return Ok(());
            }
            NavUpdate::OffGrid => return Err("subject left the grid".into()),
            NavUpdate::Unchanged => nav.last_result().clone(),
            NavUpdate::Replanned(r) => {
                println!("frame {frame}: re-planned, {} steps left", r.steps());
                print!("{}", scene.render(&r.path));
                r
            }
        };
        let Some(next) = route.next_step() else {
            println!("frame {frame}: stuck at {:?}", nav.current_cell());
            return Ok(());
        };

        // Every fifth frame something drops onto the cell ahead.
        if frame % 5 == 4 && next != target {
            scene.blocks_mut().block(next);
            nav.invalidate();
            println!("frame {frame}: {next} blocked");
            continue;
        }
        pos = centre(next);
    }
    println!("gave up after {MAX_FRAMES} frames");
    Ok(())
}

/// World position of the middle of `c`.
fn centre(c: Cell) -> (f32, f32) {
    (
        (c.x as f32 + 0.5) * CELL_SIZE,
        (c.y as f32 + 0.5) * CELL_SIZE,
    )
}
