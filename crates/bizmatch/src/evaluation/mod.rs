//! Business evaluation through an external chat-completion API.
//!
//! Two modes share one gateway. Simple mode asks for a bare 1-10 grade and
//! never fails visibly once configured: transport and parse problems fall
//! back to a score of 50. Structured mode asks for a five-field JSON report
//! and surfaces every failure, so callers never display a fabricated
//! analysis.

pub mod domain;
pub mod error;
pub mod gateway;
pub mod normalizer;
pub mod prompt;
pub mod router;
pub mod transport;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{
    EvaluationMode, EvaluationRequest, InvestmentPotential, NormalizedRating, RiskLevel,
    SimpleRating, StructuredRating,
};
pub use error::EvaluationError;
pub use gateway::{EvaluationGateway, SimpleEvaluation};
pub use normalizer::{normalize, normalize_simple, normalize_structured, SimpleNormalization};
pub use prompt::{PromptTemplate, SYSTEM_PROMPT};
pub use router::evaluation_router;
pub use transport::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatEndpoint, ChatMessage,
    ChatRole, ChatTransport, HttpChatTransport,
};
