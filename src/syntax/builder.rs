//! Postfix tree builder.
//!
//! A single left-to-right pass over the tokens with an explicit value stack.
//! Integer tokens are shifted onto the stack; an operator token reduces the top
//! two values into a new node. The most recently pushed value becomes the
//! right operand, so `4 2 -` builds `(- 4 2)`.

use tracing::trace;

use super::Token;
use crate::ast::{Operand, Operator};
use crate::errors::{to_source_span, ErrorReporting, SourceContext, TranslateError};

/// Build a tree from postfix tokens.
///
/// Succeeds only if exactly one value is left on the stack once every token has
/// been consumed.
pub fn build(tokens: &[Token<'_>], source: &SourceContext) -> Result<Operand, TranslateError> {
    let mut stack: Vec<Operand> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let span = to_source_span(token.span);

        if let Some(op) = Operator::from_symbol(token.text) {
            let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                return Err(source.operator_underflow(op, span));
            };
            trace!(op = op.symbol(), depth = stack.len(), "reduce");
            stack.push(Operand::node(op, left, right));
        } else {
            let value = token
                .text
                .parse::<i64>()
                .map_err(|_| source.bad_token(token.text, span))?;
            trace!(value, depth = stack.len(), "shift");
            stack.push(Operand::Literal(value));
        }
    }

    let Some(result) = stack.pop() else {
        return Err(source.missing_value(source.full_span()));
    };
    if !stack.is_empty() {
        return Err(source.leftover_values(stack.len() + 1, source.full_span()));
    }

    Ok(result)
}
