/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Wallex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ClientConfig,
    RequestCause,
    RequestError,
    RequestStage,
    Result,
    WallexClient,
    WallexError,
};

// Re-export all types
pub use types::*;
