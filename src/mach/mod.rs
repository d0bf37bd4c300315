/*!
# Machine Module

This Rust module provides the virtual machine that runs parsed
Hyeo-ung commands.

*/

mod runtime;
mod state;

pub use runtime::Runtime;
pub use state::State;
