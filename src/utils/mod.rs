pub mod constants;
pub mod google_ffi;
pub mod storage;

pub use constants::*;
