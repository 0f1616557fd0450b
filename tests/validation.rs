use bodmas::{
    error::ValidationError,
    interpreter::validator::{MAX_EXPRESSION_LENGTH, validate},
    is_valid,
};

fn assert_rejected(src: &str, expected: &ValidationError) {
    match validate(src) {
        Ok(()) => panic!("{src:?} was accepted but should fail with {expected:?}"),
        Err(e) => assert_eq!(&e, expected, "{src:?}"),
    }
}

fn malformed(token: &str) -> ValidationError {
    ValidationError::MalformedNumber { token: token.to_string() }
}

#[test]
fn accepts_well_formed_expressions() {
    for src in ["3+4",
                "3-4",
                "3*4",
                "3/4",
                "3^4",
                "3 + 4 * 5",
                " 3+4 ",
                "3.5+4.2",
                "(3+4)*5",
                "((3+4)*2)",
                "(3)",
                "42"]
    {
        assert!(is_valid(src), "{src:?} should be valid");
    }
}

#[test]
fn empty_expressions() {
    assert_rejected("", &ValidationError::EmptyExpression);
    assert_rejected("   \t ", &ValidationError::EmptyExpression);
    assert_rejected("()", &ValidationError::EmptyExpression);
    assert_rejected("3*( )", &ValidationError::EmptyExpression);
}

#[test]
fn invalid_characters_report_the_offending_run() {
    assert_rejected("3a+4",
                    &ValidationError::InvalidCharacter { run: "a".to_string() });
    assert_rejected("3+abc*4",
                    &ValidationError::InvalidCharacter { run: "abc".to_string() });
    assert_rejected("3#+4",
                    &ValidationError::InvalidCharacter { run: "#".to_string() });
    assert_rejected("2%3",
                    &ValidationError::InvalidCharacter { run: "%".to_string() });
    assert_rejected("1e5",
                    &ValidationError::InvalidCharacter { run: "e".to_string() });
}

#[test]
fn consecutive_operators() {
    assert_rejected("3++4",
                    &ValidationError::ConsecutiveOperators { operators: "++".to_string() });
    assert_rejected("3+-4",
                    &ValidationError::ConsecutiveOperators { operators: "+-".to_string() });
    assert_rejected("3**4",
                    &ValidationError::ConsecutiveOperators { operators: "**".to_string() });
    assert_rejected("3 * / 4",
                    &ValidationError::ConsecutiveOperators { operators: "*/".to_string() });
    assert_rejected("1+2*-^3",
                    &ValidationError::ConsecutiveOperators { operators: "*-^".to_string() });
}

#[test]
fn unbalanced_parentheses() {
    for src in ["(3+4", "3+4)", ")3+4(", "((3+4)", "(3+4))", "(3)+4)"] {
        assert_rejected(src, &ValidationError::UnbalancedParentheses);
    }
}

#[test]
fn leading_or_trailing_operators() {
    assert_rejected("+3", &ValidationError::LeadingOrTrailingOperator { operator: '+' });
    assert_rejected("3+", &ValidationError::LeadingOrTrailingOperator { operator: '+' });
    assert_rejected("-3*4", &ValidationError::LeadingOrTrailingOperator { operator: '-' });
    assert_rejected("(+)", &ValidationError::LeadingOrTrailingOperator { operator: '+' });
    assert_rejected("(3*)+4", &ValidationError::LeadingOrTrailingOperator { operator: '*' });
    assert_rejected("2*(-3)", &ValidationError::LeadingOrTrailingOperator { operator: '-' });
}

#[test]
fn parentheses_may_open_and_close_an_expression() {
    assert!(is_valid("(3+4)"));
    assert!(is_valid("(3+4)*(5-2)"));
}

#[test]
fn malformed_numbers() {
    assert_rejected("3.4.5+6", &malformed("3.4.5"));
    assert_rejected("3.+5", &malformed("3."));
    assert_rejected(".4*2", &malformed(".4"));
    assert_rejected("1+.", &malformed("."));
    assert_rejected(&"9".repeat(400), &malformed(&"9".repeat(400)));
}

#[test]
fn juxtaposed_operands() {
    assert_rejected("3(4)", &ValidationError::MissingOperator { near: "3(".to_string() });
    assert_rejected("(4)3", &ValidationError::MissingOperator { near: ")3".to_string() });
    assert_rejected("(1)(2)", &ValidationError::MissingOperator { near: ")(".to_string() });
    assert_rejected("1 2(3)", &ValidationError::MissingOperator { near: "12(".to_string() });
}

#[test]
fn whitespace_is_discarded_before_scanning() {
    assert!(is_valid("12 34"));
    assert!(is_valid("1 2 + 3"));
    assert!(is_valid("1 . 5"));
    assert!(is_valid("\t3\r\n+\x0C4 "));
    assert_rejected("3 + + 4",
                    &ValidationError::ConsecutiveOperators { operators: "++".to_string() });
    assert_rejected("3 . 4 . 5", &malformed("3.4.5"));
}

#[test]
fn only_ascii_blanks_count_as_whitespace() {
    for (src, run) in [("3\u{a0}+4", "\u{a0}"),
                       ("3\u{b}+4", "\u{b}"),
                       ("3\u{2003}+ 4", "\u{2003}"),
                       ("\u{a0}3+4", "\u{a0}"),
                       ("3+4\u{3000}", "\u{3000}")]
    {
        assert!(!is_valid(src), "{src:?} should be invalid");
        assert_rejected(src, &ValidationError::InvalidCharacter { run: run.to_string() });
    }
    assert_rejected("\u{a0}", &ValidationError::InvalidCharacter { run: "\u{a0}".to_string() });
}

#[test]
fn long_expressions_are_rejected() {
    let longest = vec!["1"; MAX_EXPRESSION_LENGTH / 2].join("+");
    assert_eq!(longest.len(), MAX_EXPRESSION_LENGTH - 1);
    assert!(is_valid(&longest));
    assert!(is_valid(&vec!["1"; MAX_EXPRESSION_LENGTH / 2].join(" + ")));

    let chain = vec!["1"; 100_000].join("+");
    assert_rejected(&chain,
                    &ValidationError::ExpressionTooLong { length: chain.len(),
                                                          limit:  MAX_EXPRESSION_LENGTH });

    let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(!is_valid(&nested));
    assert_eq!(validate(&nested).unwrap_err().reason(), "ExpressionTooLong");
}

#[test]
fn every_group_is_validated() {
    assert_rejected("((3)+)", &ValidationError::LeadingOrTrailingOperator { operator: '+' });
    assert_rejected("(1+(2*))", &ValidationError::LeadingOrTrailingOperator { operator: '*' });
    assert_rejected("((()))", &ValidationError::EmptyExpression);
    assert_rejected("( ( ) )", &ValidationError::EmptyExpression);
    assert!(is_valid("((1+2)*(3-(4/5)))"));

    let deep = format!("{}1{}", "(".repeat(400), ")".repeat(400));
    assert!(is_valid(&deep));
    let deep_empty = format!("{}{}", "(".repeat(400), ")".repeat(400));
    assert_rejected(&deep_empty, &ValidationError::EmptyExpression);
}

#[test]
fn first_failing_check_wins() {
    // Invalid characters are reported before consecutive operators.
    assert_rejected("3++x", &ValidationError::InvalidCharacter { run: "x".to_string() });
    // Consecutive operators are reported before unbalanced parentheses.
    assert_rejected("(3++4", &ValidationError::ConsecutiveOperators { operators: "++".to_string() });
    // Unbalanced parentheses are reported before a trailing operator.
    assert_rejected("(3+", &ValidationError::UnbalancedParentheses);
}

#[test]
fn reasons_are_named() {
    assert_eq!(ValidationError::EmptyExpression.reason(), "EmptyExpression");
    assert_eq!(malformed("1.").reason(), "MalformedNumber");
    assert_eq!(ValidationError::UnbalancedParentheses.reason(), "UnbalancedParentheses");
    assert_eq!(ValidationError::ExpressionTooLong { length: 2000, limit: 1024 }.reason(),
               "ExpressionTooLong");
}
