use serde::{Serialize, Serializer, ser::SerializeMap};

/// Represents a binary arithmetic operator.
///
/// Every operator in the language takes exactly two operands. Precedence is a
/// pure function of the symbol and never depends on where the operator
/// appears.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Every operator, in symbol order `+ - * / ^`.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the operator written as `symbol`, if any.
    ///
    /// # Example
    /// ```
    /// use bodmas::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength used by the postfix converter.
    ///
    /// `+` and `-` bind loosest (1), `*` and `/` tighter (2) and `^` tightest
    /// (3).
    ///
    /// # Example
    /// ```
    /// use bodmas::ast::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the binary expression tree.
///
/// Operands are leaves. Operator nodes own exactly two children, so a node
/// with a missing child cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    /// A numeric literal.
    Operand(f64),
    /// A binary operation applied to two subtrees.
    Operator {
        /// The operator.
        operator: Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl ExpressionNode {
    /// Creates an operator node from its two children.
    #[must_use]
    pub fn operator(operator: Operator, left: Self, right: Self) -> Self {
        Self::Operator { operator,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` for operands, which never have children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Operand(_))
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            if let Self::Operator { left, right, .. } = node {
                pending.push(left);
                pending.push(right);
            }
        }

        count
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            if let Self::Operator { left, right, .. } = node {
                pending.push((left, depth + 1));
                pending.push((right, depth + 1));
            }
        }

        deepest
    }

    /// Moves both children of an operator node onto `pending`, leaving
    /// operands in their place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::Operator { left, right, .. } = self {
            pending.push(std::mem::replace(left.as_mut(), Self::Operand(0.0)));
            pending.push(std::mem::replace(right.as_mut(), Self::Operand(0.0)));
        }
    }
}

/// Children are detached onto a heap stack before they are dropped, so
/// dropping a tree of any depth never recurses.
impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Operands serialize to their literal as a string and operators to an
/// object with `operator`, `left` and `right` keys.
impl Serialize for ExpressionNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match self {
            Self::Operand(value) => serializer.serialize_str(&value.to_string()),
            Self::Operator { operator,
                             left,
                             right, } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("operator", &operator.symbol().to_string())?;
                map.serialize_entry("left", left)?;
                map.serialize_entry("right", right)?;
                map.end()
            },
        }
    }
}

/// Fully parenthesised infix form, e.g. `((3 + 4) * 5)`.
impl std::fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator { operator,
                             left,
                             right, } => write!(f, "({left} {operator} {right})"),
        }
    }
}

/// A parse tree owning its root node.
///
/// The tree is built once from a postfix sequence and is immutable afterwards.
/// An empty tree has no root and evaluates to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionTree {
    root: Option<ExpressionNode>,
}

impl ExpressionTree {
    /// Creates a tree from an optional root.
    #[must_use]
    pub const fn new(root: Option<ExpressionNode>) -> Self {
        Self { root }
    }

    /// A tree without a root.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<&ExpressionNode> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Consumes the tree and returns its root.
    #[must_use]
    pub fn into_root(self) -> Option<ExpressionNode> {
        self.root
    }

    /// Renders the tree as indented JSON.
    ///
    /// # Example
    /// ```
    /// use bodmas::ast::ExpressionTree;
    ///
    /// assert_eq!(ExpressionTree::empty().to_json_pretty(), "{}");
    /// ```
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        // Trees hold only strings and maps; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// An empty tree serializes to `{}`, any other tree to its root.
impl Serialize for ExpressionTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match &self.root {
            Some(root) => root.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl std::fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{root}"),
            None => Ok(()),
        }
    }
}
