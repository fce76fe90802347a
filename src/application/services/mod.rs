mod dispatch_error;
mod dispatch_service;
mod recommendation_engine;

pub use dispatch_error::{DispatchError, ErrorKind};
pub use dispatch_service::{BackendTimeouts, DispatchService};
pub use recommendation_engine::{
    RecommendationEngine, RecommendationError, SYSTEM_INSTRUCTION, build_prompt,
};
