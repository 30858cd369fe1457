// Interview rehearsal pipeline: résumé text → skills → questions → answer scoring.
// Everything here is stateless; shared configuration arrives through AppState.

pub mod evaluation;
pub mod extract;
pub mod form;
pub mod handlers;
pub mod questions;
pub mod session;
pub mod skills;
