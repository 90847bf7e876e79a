//! Resolve a user-supplied resource name to one schema model
//!
//! Matching is case-insensitive and runs an ordered list of strategies; the
//! first strategy that finds a model wins. Within a strategy models are
//! tried in declaration order.

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::naming::singularize;
use crate::schema::{ModelDefinition, SchemaTable};

/// One way of turning the requested name into a candidate model name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// `post` matches `Post`
    Exact,
    /// `posts` matches `Post`
    Singular,
    /// Flip the trailing `s`: `post` matches `Posts`, `posts` matches `Post`
    PluralGuess,
}

impl MatchStrategy {
    /// Strategies in evaluation order
    pub const ORDER: [MatchStrategy; 3] = [
        MatchStrategy::Exact,
        MatchStrategy::Singular,
        MatchStrategy::PluralGuess,
    ];

    /// Lower-cased model name this strategy looks for
    pub fn candidate(self, requested: &str) -> String {
        let lower = requested.trim().to_lowercase();
        match self {
            MatchStrategy::Exact => lower,
            MatchStrategy::Singular => singularize(&lower),
            MatchStrategy::PluralGuess => match lower.strip_suffix('s') {
                Some(stripped) => stripped.to_string(),
                None => format!("{lower}s"),
            },
        }
    }
}

/// Pick the model the caller meant by `requested`
///
/// Fails with [`ScaffoldError::ModelNotFound`] listing every model when no
/// strategy matches.
pub fn resolve_model<'a>(requested: &str, schema: &'a SchemaTable) -> Result<&'a ModelDefinition> {
    for strategy in MatchStrategy::ORDER {
        let candidate = strategy.candidate(requested);
        if let Some(model) = schema
            .models
            .values()
            .find(|m| m.name.to_lowercase() == candidate)
        {
            debug!(requested, model = %model.name, ?strategy, "resolved model");
            return Ok(model);
        }
    }
    Err(ScaffoldError::ModelNotFound {
        requested: requested.to_string(),
        available: schema.model_names(),
    })
}
