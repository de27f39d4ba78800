pub mod actions;
pub mod agents;
pub mod health;
pub mod status;
pub mod tickets;
