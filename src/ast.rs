/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and identifiers to
/// function literals, calls, operators, conditionals, arrays and hashes. Each
/// variant models a distinct syntactic construct and carries the source line
/// of its originating token for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (e.g. `-x` or `!ok`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional (`if`/`else`) expression.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated if the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Function literal expression (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// The parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// Call expression (e.g. `add(1, 2)`).
    ///
    /// The callee is an arbitrary expression: a name, a function literal, or
    /// anything evaluating to a callable value.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Hash literal expression (e.g. `{"one": 1}`).
    ///
    /// Pairs are kept in source order; duplicate keys are resolved at
    /// evaluation time, the later pair overwriting the earlier.
    HashLiteral {
        /// The key/value expression pairs.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Index expression (e.g. `arr[2]` or `hash["key"]`).
    Index {
        /// The collection to index into.
        object: Box<Self>,
        /// The position or key to access.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::HashLiteral { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as `if` consequences/alternatives and as function bodies.
/// They do not open a new scope: a `let` inside a block writes the enclosing
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// Represents a single statement.
///
/// Statements are the units a program and a block are made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduction using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement, unwinding to the enclosing function boundary.
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A parsed program: the ordered list of its top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

// The canonical text rendering below is deliberately fully parenthesized for
// operator and index expressions, so that operator precedence and
// associativity are visible in the output and stable under reparsing.

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}){body}", parameters.join(", "))
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            },
            Self::Index { object, index, .. } => write!(f, "({object}[{index}])"),
        }
    }
}

/// Writes `items` separated by `", "`.
fn write_joined(f: &mut std::fmt::Formatter<'_>, items: &[Expr]) -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
