use crate::expression::errors::ParseError;
use crate::expression::token::{Op, Token};

/// What the previous token was, for deciding whether `+`/`-` is unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Number,
    Operator,
    LParen,
    RParen,
}

enum StackEntry {
    Op(Op),
    Paren,
}

/// Reorder an infix token stream into postfix (RPN) form.
///
/// Standard shunting-yard: literals go straight to the output; an operator
/// pops while the stack top binds strictly tighter, or equally tight for a
/// left-associative incoming operator; parentheses bracket the stack. A `+`
/// or `-` that follows the start of input, another operator or `(` is
/// unary: unary plus is dropped, unary minus becomes [`Op::Neg`].
///
/// # Errors
///
/// Returns an error when a closing parenthesis has no matching opener, or
/// an opener is still unmatched after the last token.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut prev = Prev::Start;

    for token in tokens {
        match token {
            Token::Number(n) => {
                output.push(Token::Number(*n));
                prev = Prev::Number;
            }
            Token::LParen => {
                stack.push(StackEntry::Paren);
                prev = Prev::LParen;
            }
            Token::RParen => {
                loop {
                    match stack.pop() {
                        Some(StackEntry::Op(op)) => output.push(Token::Op(op)),
                        Some(StackEntry::Paren) => break,
                        None => return Err(ParseError::UnmatchedParen),
                    }
                }
                prev = Prev::RParen;
            }
            Token::Op(op) => {
                let unary_position = matches!(prev, Prev::Start | Prev::Operator | Prev::LParen);
                let op = match (unary_position, *op) {
                    (true, Op::Add) => {
                        // unary plus is a no-op
                        prev = Prev::Operator;
                        continue;
                    }
                    (true, Op::Sub) => Op::Neg,
                    (_, other) => other,
                };

                while let Some(StackEntry::Op(top)) = stack.last() {
                    let pops = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && !op.is_right_associative());
                    if !pops {
                        break;
                    }
                    output.push(Token::Op(*top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(op));
                prev = Prev::Operator;
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(Token::Op(op)),
            StackEntry::Paren => return Err(ParseError::UnmatchedParen),
        }
    }

    Ok(output)
}
