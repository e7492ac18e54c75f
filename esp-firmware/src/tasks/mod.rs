// Task-Modul: Enthält alle Embassy Tasks
//
// Jedes Binary spawnt nur die Tasks seines Effekts.
// Taster und Fade kommunizieren über einen Embassy Channel.

pub mod pair_fade;
pub mod phase_fade;
pub mod trail;

// Re-export Tasks für einfachen Import
pub use pair_fade::{pair_fade_task, reset_button_task};
pub use phase_fade::phase_fade_task;
pub use trail::trail_task;
