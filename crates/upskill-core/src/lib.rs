//! Ambient pieces shared by the portal service: health endpoints,
//! request-id middleware, and tracing setup.

pub mod health;
pub mod middleware;
pub mod tracing;
