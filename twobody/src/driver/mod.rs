pub mod frames;
pub mod sink;
