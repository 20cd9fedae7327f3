pub mod gesture;

pub use gesture::{GestureController, GesturePhase, MIN_SELECTION_SIZE, matches_trigger};
