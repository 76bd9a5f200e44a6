// API routes and handlers

pub mod error;
pub mod health;
pub mod plans;
pub mod routes;
pub mod routines;
