use wasm_bindgen::prelude::*;

/// Snapshot of the last integrator tick and the last sync pass.
/// All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) steps: u32,
    pub(super) contacts: u32,
    pub(super) bodies_synced: u32,
    pub(super) elements_missing: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Time spent in the last tick's physics steps
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    /// Fixed steps run by the last tick
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn bodies_synced(&self) -> u32 { self.bodies_synced }
    /// Dynamic bodies whose element could not be found last frame
    #[wasm_bindgen(getter)]
    pub fn elements_missing(&self) -> u32 { self.elements_missing }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
