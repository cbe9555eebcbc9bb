use std::fmt;

/// A complete parsed program: an ordered sequence of top-level statements.
///
/// Produced by the parser and never mutated afterwards. Evaluating a
/// program yields the value of its last statement, unwrapping any `return`
/// encountered at the top level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of `if` expressions, as function bodies
/// and as `for` loop bodies. Unlike a program, a block forwards `return`
/// carriers outward without unwrapping them.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements inside the braces, in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements are the units a program is made of. Each variant models a
/// distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The initial value of the binding.
        value: Expr,
    },
    /// A `return` statement.
    Return {
        /// The expression whose value is returned.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// Rebinding of an existing variable.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value being assigned.
        value: Expr,
    },
    /// In-place assignment through an index, `target[index] = value`.
    IndexAssign {
        /// The container expression being indexed.
        target: Expr,
        /// The index expression.
        index:  Expr,
        /// The value being stored.
        value:  Expr,
    },
    /// Iteration over an array, string or hash.
    For {
        /// Name bound to the index (or hash key) on each step.
        index:    String,
        /// Name bound to the element (or hash value) on each step.
        value:    String,
        /// The expression producing the iterable.
        iterable: Expr,
        /// The loop body.
        body:     Block,
    },
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression forms, from literals and identifiers to
/// operator applications, conditionals, function literals, calls and
/// collection literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A string literal.
    StringLiteral {
        /// The literal contents, without quotes.
        value: String,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A prefix operation, such as `!x` or `-x`.
    Prefix {
        /// The prefix operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix operation, such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal, `fn(a, b) { … }`.
    FunctionLiteral {
        /// Parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call expression, `callee(args…)`.
    Call {
        /// The expression producing the callable.
        callee:    Box<Self>,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// An array literal, `[a, b, c]`.
    ArrayLiteral {
        /// Element expressions, in order.
        elements: Vec<Self>,
    },
    /// An index expression, `left[index]`.
    Index {
        /// The container being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// A hash literal, `{key: value, …}`.
    HashLiteral {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix operator.
///
/// Infix operators cover arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
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

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
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

/// Writes `items` separated by `", "`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    /// Renders the statement as re-parseable source text.
    ///
    /// Every statement form is printed self-terminated, so a whole program
    /// can be reconstructed by joining its statements with whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
            Self::Assign { name, value } => write!(f, "{name} = {value};"),
            Self::IndexAssign { target, index, value } => {
                write!(f, "{target}[{index}] = {value};")
            },
            Self::For { index,
                        value,
                        iterable,
                        body, } => {
                write!(f, "for {index}, {value} in {iterable} {{ {body} }}")
            },
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the expression as re-parseable source text.
    ///
    /// Operator applications are printed fully parenthesized, which makes
    /// the chosen precedence and associativity visible in the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                write_joined(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
