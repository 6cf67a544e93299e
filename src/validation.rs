mod error;

pub use self::error::ValidationError;
use crate::ir::{BuildRule, RuleComponent};

/// Checks that a rule has every component needed to spawn its command.
pub fn validate_rule(rule: &BuildRule) -> Result<(), ValidationError> {
    let missing = [
        (RuleComponent::Compiler, rule.compiler().is_none()),
        (RuleComponent::Target, rule.target().is_none()),
        (
            RuleComponent::Dependencies,
            rule.dependencies().is_empty(),
        ),
    ]
    .into_iter()
    .filter_map(|(component, missing)| missing.then_some(component))
    .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::IncompleteRule(missing))
    }
}
