pub mod drivers;
pub mod tasks;
