pub mod config;
pub mod reporter;
pub mod routes;
pub mod state;
pub mod translate;
