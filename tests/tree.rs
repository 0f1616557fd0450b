use bodmas::{
    ast::{ExpressionNode, ExpressionTree, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{eval_node, evaluate},
        lexer::Token,
        parser::{
            postfix::{PostfixSequence, to_postfix},
            tree::{MAX_TREE_DEPTH, build_tree},
        },
    },
};

fn postfix(src: &str) -> Vec<String> {
    to_postfix(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
                   .to_strings()
}

fn tree(src: &str) -> ExpressionTree {
    build_tree(&to_postfix(src).unwrap()).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

fn leaf(value: f64) -> ExpressionNode {
    ExpressionNode::Operand(value)
}

#[test]
fn postfix_follows_precedence() {
    assert_eq!(postfix("34+5*60-8/2"),
               ["34", "5", "60", "*", "+", "8", "2", "/", "-"]);
    assert_eq!(postfix("3*4+5"), ["3", "4", "*", "5", "+"]);
    assert_eq!(postfix("(3+4)*5"), ["3", "4", "+", "5", "*"]);
    assert_eq!(postfix("2^3*4"), ["2", "3", "^", "4", "*"]);
}

#[test]
fn postfix_groups_equal_precedence_from_the_left() {
    assert_eq!(postfix("10-3-2"), ["10", "3", "-", "2", "-"]);
    assert_eq!(postfix("10/2*3"), ["10", "2", "/", "3", "*"]);
    assert_eq!(postfix("2^3^2"), ["2", "3", "^", "2", "^"]);
}

#[test]
fn postfix_never_contains_parentheses() {
    let sequence = to_postfix("((1+2)*(3-(4/5)))").unwrap();
    assert!(sequence.tokens()
                    .iter()
                    .all(|t| !matches!(t, Token::LParen | Token::RParen)));
    assert_eq!(sequence.len(), 9);
}

#[test]
fn postfix_renders_literals_as_numbers() {
    assert_eq!(postfix("3.50 + 007"), ["3.5", "7", "+"]);
    assert_eq!(to_postfix("1 + 2").unwrap().to_string(), "1 2 +");
}

#[test]
fn postfix_joins_digits_split_by_whitespace() {
    assert_eq!(postfix("12 34"), ["1234"]);
    assert_eq!(postfix("1 2 + 3"), ["12", "3", "+"]);
    assert_eq!(postfix("1 . 5"), ["1.5"]);
    assert!(to_postfix("3\u{a0}+4").is_err());
}

#[test]
fn postfix_reports_unvalidated_input() {
    assert!(to_postfix("3 + x").is_err());
    assert!(to_postfix("3+4)").is_err());
}

#[test]
fn right_operand_is_popped_first() {
    assert_eq!(tree("7-2").into_root(),
               Some(ExpressionNode::operator(Operator::Sub, leaf(7.0), leaf(2.0))));
    assert_eq!(tree("8/4").into_root(),
               Some(ExpressionNode::operator(Operator::Div, leaf(8.0), leaf(4.0))));
}

#[test]
fn tree_shape_matches_grouping() {
    let expected = ExpressionNode::operator(Operator::Pow,
                                            ExpressionNode::operator(Operator::Pow,
                                                                     leaf(2.0),
                                                                     leaf(3.0)),
                                            leaf(2.0));
    assert_eq!(tree("2^3^2").into_root(), Some(expected));

    let t = tree("3+4*5");
    let root = t.root().unwrap();
    assert_eq!(root.node_count(), 5);
    assert_eq!(root.depth(), 3);
    assert_eq!(t.to_string(), "(3 + (4 * 5))");
}

#[test]
fn operands_are_leaves() {
    let t = tree("42");
    let root = t.root().unwrap();
    assert!(root.is_leaf());
    assert!(!tree("1+1").root().unwrap().is_leaf());
}

#[test]
fn empty_postfix_builds_an_empty_tree() {
    let t = build_tree(&PostfixSequence::default()).unwrap();
    assert!(t.is_empty());
    assert_eq!(evaluate(&t), Ok(0.0));
    assert_eq!(t.to_json_pretty(), "{}");
    assert_eq!(serde_json::to_string(&t).unwrap(), "{}");
}

#[test]
fn malformed_sequences_are_reported() {
    let missing_operand = PostfixSequence::new(vec![Token::Number(1.0),
                                                    Token::Operator(Operator::Add)]);
    assert!(matches!(build_tree(&missing_operand),
                     Err(RuntimeError::MalformedTree { .. })));

    let missing_operator = PostfixSequence::new(vec![Token::Number(1.0), Token::Number(2.0)]);
    assert!(matches!(build_tree(&missing_operator),
                     Err(RuntimeError::MalformedTree { .. })));

    let parenthesis = PostfixSequence::from(vec![Token::Number(1.0), Token::LParen]);
    assert_eq!(build_tree(&parenthesis).unwrap_err().reason(), "MalformedTree");
}

#[test]
fn tree_depth_is_limited() {
    let chain = to_postfix(&vec!["1"; 100_000].join("+")).unwrap();
    assert_eq!(build_tree(&chain), Err(RuntimeError::TreeTooDeep { limit: MAX_TREE_DEPTH }));

    let longest = to_postfix(&vec!["1"; MAX_TREE_DEPTH].join("+")).unwrap();
    let t = build_tree(&longest).unwrap();
    assert_eq!(t.root().unwrap().depth(), MAX_TREE_DEPTH);
    assert_eq!(t.evaluate(), Ok(512.0));

    let too_deep = to_postfix(&vec!["1"; MAX_TREE_DEPTH + 1].join("+")).unwrap();
    assert_eq!(build_tree(&too_deep).unwrap_err().reason(), "TreeTooDeep");
}

#[test]
fn deep_trees_evaluate_and_drop() {
    let mut node = leaf(0.0);
    for _ in 0..100_000 {
        node = ExpressionNode::operator(Operator::Add, node, leaf(1.0));
    }
    assert_eq!(node.depth(), 100_001);
    assert_eq!(node.node_count(), 200_001);
    assert_eq!(eval_node(&node), Ok(100_000.0));

    let mut node = leaf(2.0);
    for _ in 0..100_000 {
        node = ExpressionNode::operator(Operator::Mul, leaf(1.0), node);
    }
    assert_eq!(ExpressionTree::new(Some(node)).evaluate(), Ok(2.0));
}

#[test]
fn tree_serializes_literals_as_strings() {
    let json = serde_json::to_value(tree("34+5*60-8/2")).unwrap();

    assert_eq!(json,
               serde_json::json!({
                   "operator": "-",
                   "left": {
                       "operator": "+",
                       "left": "34",
                       "right": { "operator": "*", "left": "5", "right": "60" }
                   },
                   "right": { "operator": "/", "left": "8", "right": "2" }
               }));
    assert_eq!(serde_json::to_value(tree("2.5")).unwrap(), "2.5");
}

#[test]
fn pretty_json_is_indented() {
    let pretty = tree("1+2").to_json_pretty();
    assert!(pretty.starts_with("{\n"));
    assert!(pretty.contains("\"operator\": \"+\""));
}

#[test]
fn evaluation_walks_the_tree() {
    assert_eq!(tree("3+4*5").evaluate(), Ok(23.0));
    assert_eq!(tree("(3+4)*5").evaluate(), Ok(35.0));
    assert_eq!(tree("9/(1-1)").evaluate(), Err(RuntimeError::DivisionByZero));
}

#[test]
fn operator_precedence_is_fixed() {
    let expected = [('+', 1), ('-', 1), ('*', 2), ('/', 2), ('^', 3)];
    for (operator, (symbol, precedence)) in Operator::ALL.into_iter().zip(expected) {
        assert_eq!(operator.symbol(), symbol);
        assert_eq!(operator.precedence(), precedence);
        assert_eq!(Operator::from_symbol(symbol), Some(operator));
    }
}
