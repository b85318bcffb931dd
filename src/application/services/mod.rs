//! Pipeline services for the application layer.

pub mod age_service;
pub mod character_service;
pub mod page_service;
pub mod reference_resolver;
pub mod request_client;

pub use age_service::AgeEstimator;
pub use character_service::CharacterAggregator;
pub use page_service::PageService;
pub use reference_resolver::ReferenceResolver;
pub use request_client::RequestClient;
