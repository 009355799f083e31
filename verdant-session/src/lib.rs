pub mod state;

pub use state::{ImageCountOutcome, SessionError, SessionState};
