//! Campaign management shell — in-memory store, REST handlers, router.
//!
//! Everything here is plumbing around the diagnostic engine: it supplies
//! campaign records and serves the engine's output. Data is stored in
//! DashMap (development); swap to an ACID store for production.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::ApiState;
pub use router::api_router;
pub use store::ScopeStore;
