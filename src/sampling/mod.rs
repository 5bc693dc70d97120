//! Rate limiting for progress notifications: a single-slot sampler plus the
//! periodic clock that drives it.

pub mod sampler;
pub mod ticker;

pub use sampler::{Sampler, SamplerState};
pub use ticker::{Ticker, Waker};
