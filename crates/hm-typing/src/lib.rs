//! Hindley-Milner type inference for the `hm-core` expression language.

pub mod error;
pub mod typing;

pub use error::{Constructor, Result, TypeError};
pub use typing::primitives::PRIMITIVE_NAMES;
pub use typing::{
    analyze, InferredType, NonGeneric, TypeArena, TypeEnv, TypeId, TypeInferencer, TypeNames,
    TypeOperator, TypeTerm,
};
