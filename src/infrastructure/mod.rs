//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Connection pool lifecycle and storage error classification (PostgreSQL)
//! - Repositories implementing the domain storage capabilities
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
