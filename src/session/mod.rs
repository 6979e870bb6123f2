pub mod controller;
pub mod state;

pub use controller::{SaveGuard, SessionController};
pub use state::{SaveOutcome, SessionState};
