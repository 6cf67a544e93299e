use super::{Compiler, OBJECT_CAPACITY, OUTPUT_CAPACITY, RuleError, Token, TokenList};
use std::fmt::{self, Display, Formatter};

/// A single compiler invocation.
///
/// A default rule has no components and can never be executed. A rule
/// returned by [`BuildRule::make`] always has all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildRule {
    compiler: Option<Compiler>,
    target: Option<Token>,
    dependencies: TokenList,
    output: Token,
}

impl BuildRule {
    /// Assembles a rule, moving the flags into the compiler.
    pub fn make(
        compiler: Option<Compiler>,
        flags: TokenList,
        target: Option<Token>,
        dependencies: Option<TokenList>,
        output: &str,
    ) -> Result<Self, RuleError> {
        let mut compiler = compiler.ok_or(RuleError::MissingCompiler)?;
        let dependencies = dependencies
            .filter(|dependencies| !dependencies.is_empty())
            .ok_or(RuleError::MissingDependencies)?;
        let target = target.ok_or(RuleError::MissingTarget)?;
        let output = Token::new(output, OUTPUT_CAPACITY)?;

        target.fit(OBJECT_CAPACITY)?;

        let mut objects = TokenList::with_token_capacity(OBJECT_CAPACITY);
        objects.extend(dependencies)?;
        compiler.add_flags(flags)?;

        Ok(Self {
            compiler: Some(compiler),
            target: Some(target),
            dependencies: objects,
            output,
        })
    }

    pub fn compiler(&self) -> Option<&Compiler> {
        self.compiler.as_ref()
    }

    pub fn target(&self) -> Option<&Token> {
        self.target.as_ref()
    }

    pub fn dependencies(&self) -> &TokenList {
        &self.dependencies
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Releases the rule together with every token it owns.
    pub fn cleanup(self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleComponent {
    Compiler,
    Target,
    Dependencies,
}

impl Display for RuleComponent {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Compiler => "compiler",
                Self::Target => "target",
                Self::Dependencies => "dependencies",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ConstructionError, FLAG_CAPACITY};
    use pretty_assertions::assert_eq;

    fn make_rule(
        compiler: Option<&str>,
        target: Option<&str>,
        dependencies: Option<&[&str]>,
    ) -> Result<BuildRule, RuleError> {
        BuildRule::make(
            compiler.map(|command| Compiler::new(command).unwrap()),
            TokenList::try_from_iter(["-Wall", "-Wextra"]).unwrap(),
            target.map(|target| Token::object(target).unwrap()),
            dependencies.map(|dependencies| TokenList::try_from_iter(dependencies).unwrap()),
            "out",
        )
    }

    #[test]
    fn make_rule_with_all_components() {
        let rule = make_rule(
            Some("gcc"),
            Some("test/main.c"),
            Some(&["test/foo.c", "test/bar.c"]),
        )
        .unwrap();

        let compiler = rule.compiler().unwrap();

        assert_eq!(compiler.command(), "gcc");
        assert_eq!(
            compiler.flags().iter().collect::<Vec<_>>(),
            ["-Wall", "-Wextra"]
        );
        assert_eq!(rule.target().map(Token::as_str), Some("test/main.c"));
        assert_eq!(
            rule.dependencies().iter().collect::<Vec<_>>(),
            ["test/foo.c", "test/bar.c"]
        );
        assert_eq!(rule.output(), "out");
    }

    #[test]
    fn append_flags_after_existing_ones() {
        let mut compiler = Compiler::new("gcc").unwrap();
        compiler.add_flag("-O2").unwrap();

        let rule = BuildRule::make(
            Some(compiler),
            TokenList::try_from_iter(["-g"]).unwrap(),
            Some(Token::object("main.c").unwrap()),
            Some(TokenList::try_from_iter(["foo.c"]).unwrap()),
            "out",
        )
        .unwrap();

        assert_eq!(
            rule.compiler().unwrap().flags().iter().collect::<Vec<_>>(),
            ["-O2", "-g"]
        );
    }

    #[test]
    fn fail_to_make_rule_without_compiler() {
        assert_eq!(
            make_rule(None, Some("main.c"), Some(&["foo.c"])),
            Err(RuleError::MissingCompiler)
        );
    }

    #[test]
    fn fail_to_make_rule_without_dependencies() {
        assert_eq!(
            make_rule(Some("gcc"), Some("main.c"), None),
            Err(RuleError::MissingDependencies)
        );
    }

    #[test]
    fn fail_to_make_rule_with_empty_dependencies() {
        assert_eq!(
            make_rule(Some("gcc"), Some("main.c"), Some(&[])),
            Err(RuleError::MissingDependencies)
        );
    }

    #[test]
    fn fail_to_make_rule_without_target() {
        assert_eq!(
            make_rule(Some("gcc"), None, Some(&["foo.c"])),
            Err(RuleError::MissingTarget)
        );
    }

    #[test]
    fn fail_to_make_rule_with_too_long_output() {
        assert_eq!(
            BuildRule::make(
                Some(Compiler::new("gcc").unwrap()),
                TokenList::new(),
                Some(Token::object("main.c").unwrap()),
                Some(TokenList::try_from_iter(["foo.c"]).unwrap()),
                &"o".repeat(OUTPUT_CAPACITY),
            ),
            Err(RuleError::Construction(ConstructionError::TokenTooLong {
                length: OUTPUT_CAPACITY,
                capacity: OUTPUT_CAPACITY
            }))
        );
    }

    fn long_token_list(text: &str) -> TokenList {
        let mut list = TokenList::with_token_capacity(1000);

        list.append(text).unwrap();

        list
    }

    #[test]
    fn fail_to_make_rule_with_too_long_flag() {
        let flag = format!("-D{}", "A".repeat(198));

        assert_eq!(
            BuildRule::make(
                Some(Compiler::new("gcc").unwrap()),
                long_token_list(&flag),
                Some(Token::object("main.c").unwrap()),
                Some(TokenList::try_from_iter(["foo.c"]).unwrap()),
                "out",
            ),
            Err(RuleError::Construction(ConstructionError::TokenTooLong {
                length: 200,
                capacity: FLAG_CAPACITY
            }))
        );
    }

    #[test]
    fn fail_to_make_rule_with_too_long_dependency() {
        assert_eq!(
            BuildRule::make(
                Some(Compiler::new("gcc").unwrap()),
                TokenList::new(),
                Some(Token::object("main.c").unwrap()),
                Some(long_token_list(&"d".repeat(200))),
                "out",
            ),
            Err(RuleError::Construction(ConstructionError::TokenTooLong {
                length: 200,
                capacity: OBJECT_CAPACITY
            }))
        );
    }

    #[test]
    fn fail_to_make_rule_with_too_long_target() {
        assert_eq!(
            BuildRule::make(
                Some(Compiler::new("gcc").unwrap()),
                TokenList::new(),
                Some(Token::new(&"t".repeat(200), 1000).unwrap()),
                Some(TokenList::try_from_iter(["foo.c"]).unwrap()),
                "out",
            ),
            Err(RuleError::Construction(ConstructionError::TokenTooLong {
                length: 200,
                capacity: OBJECT_CAPACITY
            }))
        );
    }

    #[test]
    fn create_empty_rule() {
        let rule = BuildRule::default();

        assert_eq!(rule.compiler(), None);
        assert_eq!(rule.target(), None);
        assert!(rule.dependencies().is_empty());
        assert_eq!(rule.output(), "");
    }

    #[test]
    fn release_tokens_on_cleanup() {
        let rule = make_rule(Some("gcc"), Some("main.c"), Some(&["foo.c", "bar.c"])).unwrap();
        let compiler = rule.compiler().unwrap();
        let tokens = compiler
            .flags()
            .tokens()
            .iter()
            .chain(rule.dependencies().tokens())
            .chain(rule.target())
            .map(Token::downgrade)
            .collect::<Vec<_>>();

        assert_eq!(tokens.len(), 5);

        rule.cleanup();

        assert!(tokens.iter().all(|token| token.upgrade().is_none()));
    }
}
