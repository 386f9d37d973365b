//! Window management module
//!
//! Provides window records, focus management and z-order bookkeeping.

mod registry;
#[allow(clippy::module_inception)]
mod window;

pub use registry::{RegistrySnapshot, WindowRegistry};
pub use window::Window;

// Re-export WindowId from crate types module
pub use crate::types::WindowId;
