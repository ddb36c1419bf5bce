//! HTTP binding for the leasing workflow engine.
//!
//! Exposes the eight workflow phases as `POST /workflow/*` endpoints with a
//! uniform JSON envelope. The engine itself is synchronous Diesel; handlers
//! bridge onto blocking threads and open a WAL connection per request.

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
