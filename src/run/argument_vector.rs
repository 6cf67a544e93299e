use super::error::RunError;
use crate::{
    ir::{BuildRule, Compiler, Token},
    validation::validate_rule,
};
use itertools::Itertools;

const OUTPUT_OPTION: &str = "-o";

/// Counts the arguments of a rule's command including the program name.
pub fn argument_count(rule: &BuildRule) -> usize {
    // compiler + "-o" + output + target
    4 + rule
        .compiler()
        .map(|compiler| compiler.flags().len())
        .unwrap_or_default()
        + rule.dependencies().len()
}

/// Builds the arguments of a rule's command in their positional order.
///
/// The order is `[compiler, flags.., "-o", output, target, dependencies..]`.
pub fn argument_vector(rule: &BuildRule) -> Result<Vec<&str>, RunError> {
    validate_rule(rule)?;

    let compiler = rule.compiler();
    let mut arguments = Vec::new();

    arguments
        .try_reserve_exact(argument_count(rule))
        .map_err(|_| RunError::AllocationFailure)?;

    arguments.extend(compiler.map(Compiler::command));
    arguments.extend(compiler.into_iter().flat_map(|compiler| compiler.flags().iter()));
    arguments.push(OUTPUT_OPTION);
    arguments.push(rule.output());
    arguments.extend(rule.target().map(Token::as_str));
    arguments.extend(rule.dependencies().iter());

    Ok(arguments)
}

pub fn render_command_line(arguments: &[&str]) -> String {
    arguments.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ir::{RuleComponent, TokenList},
        validation::ValidationError,
    };
    use pretty_assertions::assert_eq;

    fn make_rule(flags: &[&str], dependencies: &[&str]) -> BuildRule {
        BuildRule::make(
            Some(Compiler::new("gcc").unwrap()),
            TokenList::try_from_iter(flags).unwrap(),
            Some(Token::object("test/main.c").unwrap()),
            Some(TokenList::try_from_iter(dependencies).unwrap()),
            "out",
        )
        .unwrap()
    }

    #[test]
    fn build_argument_vector() {
        assert_eq!(
            argument_vector(&make_rule(
                &["-Wall", "-Wextra"],
                &["test/foo.c", "test/bar.c"]
            ))
            .unwrap(),
            [
                "gcc",
                "-Wall",
                "-Wextra",
                "-o",
                "out",
                "test/main.c",
                "test/foo.c",
                "test/bar.c"
            ]
        );
    }

    #[test]
    fn build_argument_vector_without_flags() {
        assert_eq!(
            argument_vector(&make_rule(&[], &["foo.c"])).unwrap(),
            ["gcc", "-o", "out", "test/main.c", "foo.c"]
        );
    }

    #[test]
    fn count_arguments() {
        let rule = make_rule(&["-Wall", "-Wextra"], &["test/foo.c", "test/bar.c"]);

        assert_eq!(argument_count(&rule), 8);
        assert_eq!(argument_vector(&rule).unwrap().len(), 8);
    }

    #[test]
    fn fail_to_build_argument_vector_of_incomplete_rule() {
        assert_eq!(
            argument_vector(&BuildRule::default()),
            Err(RunError::IncompleteRule(ValidationError::IncompleteRule(
                vec![
                    RuleComponent::Compiler,
                    RuleComponent::Target,
                    RuleComponent::Dependencies
                ]
            )))
        );
    }

    #[test]
    fn render_arguments() {
        assert_eq!(
            render_command_line(&["gcc", "-Wall", "-o", "out", "main.c", "foo.c"]),
            "gcc -Wall -o out main.c foo.c"
        );
    }
}
