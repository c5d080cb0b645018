pub mod counter;
pub mod session;

pub use counter::{Mode, Pulse, RakatState, Theme};
pub use session::{CounterState, Transition};
