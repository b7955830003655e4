pub mod pitch;
pub mod scales;
pub mod verify;
