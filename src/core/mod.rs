//! Runtime core: shuffling, run orchestration and sessions.
//!
//! Internal modules:
//! - [`shuffle`](mod@shuffle): in-place Fisher–Yates over any slice;
//! - [`orchestrator`]: admits one run at a time, paces it, relays events and completion;
//! - [`session`]: binds an image, its slices and an orchestrator behind one lock.

mod orchestrator;
mod session;
mod shuffle;

pub use orchestrator::{Orchestrator, RunReport, RunState};
pub use session::{Session, SliceItems};
pub use shuffle::shuffle;
