//! Wire-format packing for the browser bridge.

pub mod protocol;
