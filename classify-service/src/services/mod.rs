pub mod classify;
pub mod decode;
