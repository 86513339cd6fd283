//! Fixed-timestep integrator clock
//!
//! Wall time is fed in by whatever drives the runner (an interval in the
//! browser, the test directly). Elapsed time accumulates and is paid out in
//! whole `delta_ms` steps, capped per tick so a backgrounded tab does not
//! come back to a burst of hundreds of steps.

pub struct Runner {
    delta_ms: f64,
    max_steps: u32,
    accumulator: f64,
    last_time: Option<f64>,
    enabled: bool,
    steps_total: u64,
}

// Float slack so that exactly N * delta of wall time yields N steps
const STEP_EPSILON: f64 = 1e-6;

impl Runner {
    pub fn new(delta_ms: f64, max_steps: u32) -> Self {
        Self {
            delta_ms,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
            last_time: None,
            enabled: true,
            steps_total: 0,
        }
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn steps_total(&self) -> u64 {
        self.steps_total
    }

    /// Number of fixed steps owed at wall time `now_ms`. The first call
    /// only sets the baseline.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if !self.enabled {
            return 0;
        }
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };
        // Clocks can jump backwards (tab restore, test reuse)
        self.accumulator += (now_ms - last).max(0.0);

        let mut steps = 0;
        while self.accumulator + STEP_EPSILON >= self.delta_ms && steps < self.max_steps {
            self.accumulator -= self.delta_ms;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator > self.delta_ms {
            // Drop the backlog instead of spiralling
            self.accumulator = self.delta_ms;
        }
        self.accumulator = self.accumulator.max(0.0);
        self.steps_total += steps as u64;
        steps
    }

    /// Stop paying out steps; later `advance` calls return 0
    pub fn stop(&mut self) {
        self.enabled = false;
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
