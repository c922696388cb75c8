//! Precedence-climbing expression parsers built from operator tables.
//!
//! Given the operator levels of a language and the parsers for its literals,
//! [`expression`] produces a parser where every binary operator is
//! left-associative and tighter levels bind first. Parenthesized
//! sub-expressions re-enter the top of the grammar.

use crate::and::AndExt;
use crate::cursor::SourceCursor;
use crate::lexer::Lexer;
use crate::maybe::Maybe;
use crate::or::{OrExt, or_many};
use crate::parser::{BoxExt, BoxedParser, ParseResult, Parser, WeakParser, from_fn};
use std::cell::OnceCell;
use std::rc::Rc;

/// Binary function combining a left and a right operand
pub type Combine<T> = Rc<dyn Fn(T, T) -> T>;

/// Operators sharing one precedence, in the order they are tried
pub struct PrecedenceLevel<T> {
    operators: Vec<(String, Combine<T>)>,
}

impl<T> Clone for PrecedenceLevel<T> {
    fn clone(&self) -> Self {
        PrecedenceLevel {
            operators: self.operators.clone(),
        }
    }
}

impl<T> Default for PrecedenceLevel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrecedenceLevel<T> {
    pub fn new() -> Self {
        PrecedenceLevel {
            operators: Vec::new(),
        }
    }

    pub fn operator<F>(mut self, symbol: impl Into<String>, combine: F) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        self.operators.push((symbol.into(), Rc::new(combine)));
        self
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|(symbol, _)| symbol.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// One precedence level: an operand followed by any number of
/// `operator operand` pairs, folded from the left
struct LeftAssoc<'code, T> {
    operand: BoxedParser<'code, T>,
    operators: Vec<(BoxedParser<'code, String>, Combine<T>)>,
}

impl<'code, T> LeftAssoc<'code, T> {
    fn operator(
        &self,
        cursor: SourceCursor<'code>,
    ) -> Result<Option<(&Combine<T>, SourceCursor<'code>)>, crate::error::FatalError> {
        for (symbol, combine) in &self.operators {
            if let Maybe::Present((_, next)) = symbol.parse(cursor)? {
                return Ok(Some((combine, next)));
            }
        }
        Ok(None)
    }
}

impl<'code, T> Parser<'code> for LeftAssoc<'code, T> {
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let Maybe::Present((mut left, mut cursor)) = self.operand.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };

        while let Some((combine, after_operator)) = self.operator(cursor)? {
            // An operator without a right operand is left for the caller
            let Maybe::Present((right, next)) = self.operand.parse(after_operator)? else {
                break;
            };
            left = combine(left, right);
            cursor = next;
        }

        Ok(Maybe::Present((left, cursor)))
    }
}

/// Build an expression parser.
///
/// `levels` is ordered from the loosest-binding level to the tightest, e.g.
/// `[{+, -}, {*, /}]`. Operator symbols are matched as tokens of `lexer`. The
/// innermost operand is either `( expression )`, where a missing `)` is a
/// fatal error, or the first of `literals` that matches.
pub fn expression<'code, T: 'code>(
    lexer: &Lexer,
    levels: Vec<PrecedenceLevel<T>>,
    literals: Vec<BoxedParser<'code, T>>,
) -> BoxedParser<'code, T> {
    tracing::trace!(
        levels = levels.len(),
        literals = literals.len(),
        "building expression grammar"
    );

    // Filled in with the finished grammar below. The handle is weak so the
    // grammar does not own itself.
    let top: Rc<OnceCell<WeakParser<'code, T>>> = Rc::new(OnceCell::new());
    let nested = {
        let top = Rc::clone(&top);
        from_fn(move |cursor: SourceCursor<'code>| {
            match top.get().and_then(WeakParser::upgrade) {
                Some(parser) => parser.parse(cursor),
                None => Ok(Maybe::Absent),
            }
        })
    };

    let mut level = lexer
        .accept("(")
        .second(nested)
        .first(lexer.require(")"))
        .or(or_many(literals))
        .boxed();

    for precedence in levels.into_iter().rev() {
        let operators = precedence
            .operators
            .into_iter()
            .map(|(symbol, combine)| (lexer.accept(symbol), combine))
            .collect();
        level = LeftAssoc {
            operand: level,
            operators,
        }
        .boxed();
    }

    // `top` was created empty just above, so this cannot fail
    let _ = top.set(level.downgrade());
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::raw::raw_literal;
    use crate::map::MapExt;
    use crate::settings::ParserSettings;
    use pretty_assertions::assert_eq;

    fn integers(lexer: &Lexer) -> BoxedParser<'static, i64> {
        let lexer = lexer.clone();
        lexer.token(lexer.integer()).boxed()
    }

    fn arithmetic(lexer: &Lexer) -> BoxedParser<'static, i64> {
        expression(
            lexer,
            vec![
                PrecedenceLevel::<i64>::new()
                    .operator("+", |a, b| a + b)
                    .operator("-", |a, b| a - b),
                PrecedenceLevel::<i64>::new()
                    .operator("*", |a, b| a * b)
                    .operator("/", |a, b| a / b),
            ],
            vec![integers(lexer)],
        )
    }

    fn eval(input: &'static str) -> Maybe<(i64, SourceCursor<'static>)> {
        let lexer = Lexer::default();
        arithmetic(&lexer).parse(SourceCursor::new(input)).unwrap()
    }

    fn value(input: &'static str) -> i64 {
        let (value, rest) = eval(input).unwrap();
        assert!(rest.is_at_end(), "left over: {:?}", rest.rest());
        value
    }

    #[test]
    fn test_level_symbols_keep_order() {
        let level = PrecedenceLevel::<i64>::new()
            .operator("-", |a, b| a - b)
            .operator("+", |a, b| a + b);

        assert_eq!(level.symbols().collect::<Vec<_>>(), vec!["-", "+"]);
        assert!(!level.is_empty());
        assert!(PrecedenceLevel::<i64>::default().is_empty());
    }

    #[test]
    fn test_single_literal() {
        assert_eq!(value("42"), 42);
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(value("3-2-1"), 0);
        assert_eq!(value("64/4/2"), 8);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(value("3+4*2"), 11);
        assert_eq!(value("3*4+2"), 14);
        assert_eq!(value("(3+4)*2"), 14);
    }

    #[test]
    fn test_same_level_left_to_right() {
        assert_eq!(value("3*4/2*2"), 12);
        assert_eq!(value("10-4+3"), 9);
    }

    #[test]
    fn test_whitespace_between_tokens() {
        assert_eq!(value("( 1 + 2 ) * ( 3 + 4 ) "), 21);
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(value("((((7))))"), 7);
        assert_eq!(value("2*(3+(4-1))*2"), 24);
    }

    #[test]
    fn test_missing_close_paren_is_fatal() {
        let lexer = Lexer::default();
        let error = arithmetic(&lexer)
            .parse(SourceCursor::new("(1+2"))
            .unwrap_err();

        assert_eq!(error.message(), "expected ')'");
        assert_eq!(error.column(), 5);
    }

    #[test]
    fn test_fatal_error_escapes_enclosing_alternative() {
        let lexer = Lexer::default();
        let fallback = raw_literal('(').map(|_| -1);
        let parser = arithmetic(&lexer).or(fallback);

        assert!(parser.parse(SourceCursor::new("(1")).is_err());
    }

    #[test]
    fn test_no_operand_fails() {
        assert!(eval("*3").is_absent());
        assert!(eval("").is_absent());
    }

    #[test]
    fn test_dangling_operator_is_left_unconsumed() {
        let (value, rest) = eval("1+2+").unwrap();

        assert_eq!(value, 3);
        assert!(rest.equals("+"));
    }

    #[test]
    fn test_trailing_input_is_returned() {
        let (value, rest) = eval("1+2 )").unwrap();

        assert_eq!(value, 3);
        assert!(rest.equals(")"));
    }

    #[test]
    fn test_no_levels_is_just_operands() {
        let lexer = Lexer::default();
        let parser = expression(&lexer, Vec::new(), vec![integers(&lexer)]);

        let (value, rest) = parser.parse(SourceCursor::new("((5))+1")).unwrap().unwrap();
        assert_eq!(value, 5);
        assert!(rest.equals("+1"));
    }

    #[test]
    fn test_operators_tried_in_order() {
        let lexer = Lexer::default();
        let parser = expression(
            &lexer,
            vec![
                PrecedenceLevel::<i64>::new()
                    .operator("*", |a, b| a * b)
                    .operator("**", |a, b: i64| a.pow(b as u32)),
            ],
            vec![integers(&lexer)],
        );

        // "*" wins over "**", so the second '*' is not an operand
        let (value, rest) = parser.parse(SourceCursor::new("2**3")).unwrap().unwrap();
        assert_eq!(value, 2);
        assert!(rest.equals("**3"));
    }

    #[test]
    fn test_tree_building_grammar() {
        let lexer = Lexer::default();
        let leaf = lexer.token(lexer.letter()).map(|c| c.to_string()).boxed();
        let parser = expression(
            &lexer,
            vec![
                PrecedenceLevel::<String>::new().operator("|", |a, b| format!("({a}|{b})")),
                PrecedenceLevel::<String>::new().operator("&", |a, b| format!("({a}&{b})")),
            ],
            vec![leaf],
        );

        let (tree, _) = parser.parse(SourceCursor::new("a|b&c|d")).unwrap().unwrap();
        assert_eq!(tree, "((a|(b&c))|d)");
    }

    #[test]
    fn test_comments_inside_expression() {
        let lexer = Lexer::new(ParserSettings::default().with_line_comment("//"));
        let parser = arithmetic(&lexer);
        let input = "1 + // one\n 2 // two\n * 3";

        let (value, rest) = parser.parse(SourceCursor::new(input)).unwrap().unwrap();
        assert_eq!(value, 7);
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_grammar_outlives_builder_scope() {
        let parser = {
            let lexer = Lexer::default();
            arithmetic(&lexer)
        };
        let copy = parser.clone();
        drop(parser);

        let (value, _) = copy.parse(SourceCursor::new("(2+2)*2")).unwrap().unwrap();
        assert_eq!(value, 8);
    }
}
