//! Thread-local xorshift32 generator
//!
//! Used for spawn jitter and correlation labels. Not cryptographic and not
//! reproducible across sessions (seeded from `Math.random` on wasm32).

use std::cell::Cell;

thread_local! {
    static STATE: Cell<u32> = Cell::new(initial_seed());
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[cfg(target_arch = "wasm32")]
fn initial_seed() -> u32 {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    seed.max(1)
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_seed() -> u32 {
    12345
}

/// Reseed the generator (zero is mapped to 1, xorshift's only fixed point)
pub fn seed(value: u32) {
    STATE.with(|s| s.set(value.max(1)));
}

pub fn next_u32() -> u32 {
    STATE.with(|s| {
        let mut state = s.get();
        let out = xorshift32(&mut state);
        s.set(state);
        out
    })
}

/// Uniform in [0, 1)
pub fn next_f32() -> f32 {
    (next_u32() >> 8) as f32 / (1u32 << 24) as f32
}
