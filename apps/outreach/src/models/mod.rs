pub mod blob;
pub mod candidate;
pub mod handoff;
pub mod viewer;
