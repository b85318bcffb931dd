//! Outbound gateway trait definitions.
//!
//! Gateways abstract the network so the pipeline can be exercised without it.
//! Implementations live in `crate::infrastructure::http`; mocks are generated via
//! `mockall` for unit tests.

pub mod http_gateway;

pub use http_gateway::HttpGateway;

#[cfg(test)]
pub use http_gateway::MockHttpGateway;
