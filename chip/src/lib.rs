//! A CHIP-8 interpreter core. The [`ChipSet`](chip8::ChipSet) owns the whole machine state
//! and is advanced one instruction at a time by the host, the [`Runner`] is a ready made
//! host loop that connects it to a display, a keyboard and a speaker.

pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod display;
pub mod opcode;
pub mod resources;
pub mod timer;
mod error;

// reexporting for convinience
mod runner;
pub use error::*;
pub use runner::*;
