//! Type definitions for the NetworkManager enumerations this crate decodes.

mod device;
mod states;

pub use device::*;
pub use states::*;

#[cfg(test)]
mod tests;
