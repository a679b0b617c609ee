pub mod routes;
pub mod startup;
pub mod errors;

pub use routes::ServerState;
pub use startup::run;
