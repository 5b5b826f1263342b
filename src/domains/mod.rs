// Domain modules
pub mod auth;
pub mod orders;
pub mod integrations;
pub mod alerts;
pub mod dashboard;
pub mod scheduler;
