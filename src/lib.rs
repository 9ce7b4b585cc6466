//! Core logic for the tally counter widget.
//!
//! Everything here is host-testable: no browser, clock, or async runtime. The
//! front-ends (`tally_web`, `tally_term`) feed timestamps in and render what the
//! [`counter::Counter`] reports.

#[path = "core/format.rs"]
pub mod format;

#[path = "core/target.rs"]
pub mod target;

#[path = "core/speed.rs"]
pub mod speed;

#[path = "core/pacer.rs"]
pub mod pacer;

#[path = "core/counter.rs"]
pub mod counter;

#[path = "core/variant.rs"]
pub mod variant;

#[cfg(all(feature = "std", feature = "serde"))]
#[path = "core/config.rs"]
pub mod config;

pub use counter::{Counter, Frame, Phase, StartError};
pub use format::NumberStyle;
pub use speed::Fps;
pub use target::TargetInput;
pub use variant::Variant;
