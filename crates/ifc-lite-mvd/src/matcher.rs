// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Requirement evaluation
//!
//! The [`Engine`] resolves each sentence against its [`Registry`] and runs
//! the bound check against its [`EvaluationContext`].

use crate::checks;
use crate::config::EngineConfig;
use crate::registry::Registry;
use crate::{CheckError, ErrorCategory, EvaluationContext, Result};
use serde::Serialize;

/// Result of one requirement
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The requirement holds
    Passed,
    /// The requirement was evaluated and does not hold
    Failed {
        /// Failure class
        category: ErrorCategory,
        /// Human readable diagnostic
        message: String,
    },
    /// The requirement was not evaluated because setup failed earlier
    Skipped {
        /// Diagnostic of the setup failure
        reason: String,
    },
}

impl Outcome {
    /// Whether the requirement passed
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// A requirement sentence with its outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Sentence as given
    pub sentence: String,
    /// Evaluation outcome
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Requirement engine
#[derive(Debug)]
pub struct Engine {
    registry: Registry,
    context: EvaluationContext,
}

impl Engine {
    /// Engine with the standard vocabulary
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self::with_registry(Registry::standard()?, EvaluationContext::new(config)))
    }

    /// Engine with a custom vocabulary and context
    pub fn with_registry(registry: Registry, context: EvaluationContext) -> Self {
        Self { registry, context }
    }

    /// Bound vocabulary
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Evaluation state
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// Mutable evaluation state
    pub fn context_mut(&mut self) -> &mut EvaluationContext {
        &mut self.context
    }

    /// Resolve and evaluate one sentence
    pub fn check(&mut self, sentence: &str) -> Result<()> {
        let (binding, params) = self.registry.resolve(sentence)?;
        log::debug!(
            "\"{}\" matched \"{}\" ({} parameters)",
            sentence.trim(),
            binding.pattern.source(),
            params.len()
        );
        checks::run(&binding.check, &mut self.context, &params)
    }

    /// Evaluate one sentence into a verdict
    pub fn evaluate(&mut self, sentence: &str) -> Verdict {
        let outcome = match self.check(sentence) {
            Ok(()) => Outcome::Passed,
            Err(err) => {
                log::warn!("requirement failed: {}: {}", sentence.trim(), err);
                Outcome::from(&err)
            }
        };
        Verdict {
            sentence: sentence.to_string(),
            outcome,
        }
    }

    /// Evaluate a scenario in order, starting from a fresh context
    ///
    /// After a setup failure (no model, or a model that failed to load) the
    /// remaining requirements are reported as skipped.
    pub fn run_scenario<I, S>(&mut self, sentences: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.context.reset();
        let mut setup_failure: Option<String> = None;
        let mut verdicts = Vec::new();

        for sentence in sentences {
            let sentence = sentence.as_ref();
            let verdict = match &setup_failure {
                Some(reason) => {
                    log::warn!("requirement skipped: {}", sentence.trim());
                    Verdict {
                        sentence: sentence.to_string(),
                        outcome: Outcome::Skipped {
                            reason: reason.clone(),
                        },
                    }
                }
                None => self.evaluate(sentence),
            };
            if let Outcome::Failed {
                category: ErrorCategory::Setup,
                message,
            } = &verdict.outcome
            {
                setup_failure = Some(message.clone());
            }
            verdicts.push(verdict);
        }
        verdicts
    }
}

impl From<&CheckError> for Outcome {
    fn from(err: &CheckError) -> Self {
        Outcome::Failed {
            category: err.category(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Params;
    use crate::registry::Check;

    #[test]
    fn test_undefined_sentence_is_not_fatal() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let verdicts = engine.run_scenario(["The walls must be blue", "The IFC file \"x.ifc\" is exempt from being provided"]);
        assert_eq!(verdicts.len(), 2);
        assert!(matches!(
            verdicts[0].outcome,
            Outcome::Failed { category: ErrorCategory::AmbiguousInput, .. }
        ));
        assert!(verdicts[1].outcome.is_passed());
    }

    #[test]
    fn test_setup_failure_skips_the_rest() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let verdicts = engine.run_scenario([
            "The IFC file \"/nonexistent/model.ifc\" must be provided",
            "IFC data must use the IFC4 schema",
            "there is at least one IfcWall element",
        ]);
        assert!(matches!(
            verdicts[0].outcome,
            Outcome::Failed { category: ErrorCategory::Setup, .. }
        ));
        for verdict in &verdicts[1..] {
            match &verdict.outcome {
                Outcome::Skipped { reason } => assert!(reason.contains("/nonexistent/model.ifc")),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_no_model_is_a_setup_failure() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let verdicts = engine.run_scenario(["IFC data must use the IFC4 schema", "all buildings have an address"]);
        assert!(matches!(
            &verdicts[0].outcome,
            Outcome::Failed { category: ErrorCategory::Setup, message }
                if message == "No file was loaded, so this requirement cannot be checked"
        ));
        assert!(matches!(verdicts[1].outcome, Outcome::Skipped { .. }));
    }

    #[test]
    fn test_custom_vocabulary() {
        fn bookmark_count(ctx: &mut EvaluationContext, params: &Params) -> Result<()> {
            let expected = params.integer("count")?;
            let actual = ctx.bookmarks().len() as i64;
            if actual == expected {
                Ok(())
            } else {
                Err(CheckError::mismatch(format!("{} bookmarks recorded", actual)))
            }
        }

        let mut registry = Registry::new();
        registry.bind_parse("{count:d} bookmarks are recorded", Check::Custom(bookmark_count)).unwrap();
        let mut engine = Engine::with_registry(registry, EvaluationContext::default());
        assert!(engine.check("0 bookmarks are recorded").is_ok());
        assert_eq!(engine.check("2 bookmarks are recorded").unwrap_err().to_string(), "0 bookmarks recorded");
    }

    #[test]
    fn test_verdict_serializes() {
        let verdict = Verdict {
            sentence: "there is at least one IfcWall element".into(),
            outcome: Outcome::from(&CheckError::absent("There are no IfcWall elements")),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["category"], "AbsentValue");
        assert_eq!(json["message"], "There are no IfcWall elements");
        assert_eq!(json["sentence"], "there is at least one IfcWall element");
    }
}
