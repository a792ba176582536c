pub mod env;
pub mod infer_expr;
pub mod pretty;
pub mod primitives;
pub mod scheme;
pub mod types;
pub mod unify;

use std::fmt;

use hm_core::ast::Node;

pub use env::{NonGeneric, TypeEnv};
pub use infer_expr::TypeInferencer;
pub use pretty::{DisplayType, TypeNames};
pub use types::{TypeId, TypeOperator, TypeTerm};
pub use unify::TypeArena;

use crate::error::Result;

/// The outcome of one self-contained analysis: the arena it ran in and the
/// type it produced.
#[derive(Debug, Clone)]
pub struct InferredType {
    arena: TypeArena,
    root: TypeId,
}

impl InferredType {
    pub fn root(&self) -> TypeId {
        self.root
    }

    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arena.display(self.root))
    }
}

/// Analyse `node` in a fresh arena under the primitive environment.
pub fn analyze(node: &Node) -> Result<InferredType> {
    tracing::debug!(expr = %node, "analyze expression");
    let mut inferencer = TypeInferencer::new();
    let root = inferencer.infer(node)?;
    Ok(InferredType {
        arena: inferencer.into_arena(),
        root,
    })
}
