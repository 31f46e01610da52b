mod broadcaster;
mod session_rng;

pub mod clock;
pub mod snake;

pub use broadcaster::GameBroadcaster;
pub use clock::{IntervalClock, ManualClock, ManualClockHandle, TickClock, manual_clock};
pub use session_rng::SessionRng;
