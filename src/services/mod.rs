pub mod action_log;
pub mod ticketing;
