/// Sampler state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplerState {
    /// Nothing recorded since the last tick
    Idle,
    /// A value is buffered and will be delivered on the next tick
    Pending(f32),
}

/// Single-slot trailing sampler: keeps only the most recent value and hands it
/// out at most once per tick.
///
/// The sampler has no clock of its own. Whoever owns the timer calls
/// [`Sampler::on_tick`] each time it fires.
#[derive(Debug, Default)]
pub struct Sampler {
    slot: Option<f32>,
    dropped: u64,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer `value`, overwriting anything still pending
    pub fn record(&mut self, value: f32) {
        if self.slot.replace(value).is_some() {
            self.dropped += 1;
        }
    }

    /// Timer fired: take the pending value, leaving the sampler idle
    pub fn on_tick(&mut self) -> Option<f32> {
        self.slot.take()
    }

    /// Discard any pending value without delivering it
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn state(&self) -> SamplerState {
        match self.slot {
            Some(value) => SamplerState::Pending(value),
            None => SamplerState::Idle,
        }
    }

    /// Number of values overwritten before they could be delivered
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
