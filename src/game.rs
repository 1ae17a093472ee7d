//! The default application: a skeleton walking the tile floor plan.
//!
//! Internals here are invisible to the host; it only sees the [`App`]
//! contract. The run ends when the walker steps out through a doorway or
//! the step budget runs out.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::App;
use crate::config::GameConfig;
use crate::world::FloorPlan;

// Up, down, left, right; y grows downward.
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Where the skeleton wakes up in the built-in room.
const SPAWN: (i32, i32) = (3, 2);

pub struct Game {
    plan: FloorPlan,
    x: i32,
    y: i32,
    rng: StdRng,
    steps: u64,
    escaped: bool,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Game {
        Game::with_plan(config, FloorPlan::bordered_room(), SPAWN)
    }

    fn with_plan(config: GameConfig, plan: FloorPlan, spawn: (i32, i32)) -> Game {
        debug_assert!(plan.is_empty(spawn.0, spawn.1));

        Game {
            plan,
            x: spawn.0,
            y: spawn.1,
            rng: StdRng::seed_from_u64(config.seed),
            steps: 0,
            escaped: false,
            config,
        }
    }

    /// Attempts one step in a random direction. A wall blocks the step but
    /// still spends it. Returns whether the run should continue.
    fn tick(&mut self) -> bool {
        if self.escaped || self.steps >= self.config.max_steps {
            return false;
        }

        let (dx, dy) = DIRECTIONS[self.rng.gen_range(0..DIRECTIONS.len())];
        let (to_x, to_y) = (self.x + dx, self.y + dy);
        self.steps += 1;

        if self.plan.is_empty(to_x, to_y) {
            self.x = to_x;
            self.y = to_y;
            trace!("step {}: at ({}, {})", self.steps, self.x, self.y);
            if !self.plan.contains(self.x, self.y) {
                self.escaped = true;
            }
        } else {
            trace!("step {}: wall at ({}, {})", self.steps, to_x, to_y);
        }

        !self.escaped && self.steps < self.config.max_steps
    }
}

impl App for Game {
    fn run(&mut self) -> Result<()> {
        let tick_hz = self.config.tick_hz.max(1);
        let tick_budget = Duration::from_secs_f64(1.0 / f64::from(tick_hz));
        info!(
            "walking from ({}, {}) at {} Hz with a budget of {} steps",
            self.x, self.y, tick_hz, self.config.max_steps
        );

        loop {
            let started = Instant::now();
            if !self.tick() {
                break;
            }
            if let Some(rest) = tick_budget.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            } else {
                warn!("step {} overran the tick budget", self.steps);
            }
        }

        if self.escaped {
            info!("escaped through a doorway after {} steps", self.steps);
        } else {
            info!("still inside when the step budget ran out");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "walking-skeleton"
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        debug!(
            "releasing the game after {} steps ({})",
            self.steps,
            if self.escaped { "escaped" } else { "contained" }
        );
    }
}
