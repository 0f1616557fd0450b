/// Infix to postfix conversion.
///
/// Turns a validated infix expression into a postfix (Reverse Polish) token
/// sequence with the shunting-yard algorithm. Operator precedence is resolved
/// here; no values are computed.
pub mod postfix;
/// Parse tree construction.
///
/// Assembles a binary expression tree from a postfix sequence using a node
/// stack.
///
/// # Responsibilities
/// - Pops the right operand before the left one for every operator.
/// - Reports sequences that do not describe exactly one tree.
pub mod tree;
