// Application layer - Use cases and the ports they depend on
pub mod cell_validator;
pub mod dashboard_service;
pub mod dashboard_store;
pub mod id_generator;
