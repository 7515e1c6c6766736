//! The session engine: cards, shuffling, state machine, and scheduling

pub mod cards;
pub mod driver;
pub mod session;
pub mod shuffle;
pub mod traits;

pub use cards::{paired_deck, Card, CardId, FaceValue, Visibility};
pub use driver::{SessionDriver, SessionTiming};
pub use session::{CountdownStep, FlipOutcome, Outcome, Session, SessionHooks, SessionPhase};
pub use traits::{AudioNotifier, GameDisplay, OutcomePrompt};
