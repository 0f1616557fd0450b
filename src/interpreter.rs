/// The evaluator module computes the value of a parse tree.
///
/// The evaluator traverses the tree in post-order and applies each operator
/// to the values of its two children.
///
/// # Responsibilities
/// - Evaluates operand and operator nodes.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw text and produces numbers, operators and
/// parentheses, discarding whitespace. Each token's kind is fixed here.
pub mod lexer;
/// The parser module turns tokens into a parse tree.
///
/// Parsing happens in two steps: the shunting-yard conversion from infix to
/// postfix order, then tree construction from the postfix sequence.
///
/// # Responsibilities
/// - Resolves operator precedence and grouping.
/// - Builds a binary expression tree with owned children.
pub mod parser;
/// The validator module decides whether an expression may be parsed.
///
/// Validation runs before any other stage and reports a single reason for
/// every rejected expression. The converter and tree builder rely on it and
/// do not repeat its checks.
pub mod validator;
