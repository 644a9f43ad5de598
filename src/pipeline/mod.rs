//! Linguistic pipelines.
//!
//! The annotator talks to pipelines only through [`LinguisticPipeline`]
//! and the plain [`ParsedDoc`] it returns. Pipelines are looked up by
//! identifier in a [`PipelineRegistry`].

mod backend;
pub mod english;
mod registry;

pub use backend::{LinguisticPipeline, ParsedDoc, ParsedToken, SentenceSpan};
pub use english::EnglishPipeline;
pub use registry::{PipelineRegistry, DEFAULT_MODEL};
