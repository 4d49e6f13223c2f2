pub mod input;
pub mod terminal;  // Console output wrapper
pub mod timer;
