use std::{fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A reference to a declared type, such as `int`, `String` or `String[][]`.
///
/// The array dimension is recorded but carries no runtime meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    /// The base type name.
    pub name:       String,
    /// Number of `[]` pairs following the base name.
    pub dimensions: usize,
}

/// Visibility of a method. Omitting the modifier means package-private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessModifier {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// No modifier.
    #[default]
    PackagePrivate,
}

/// One `(type, name)` entry of a method's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The declared parameter type.
    pub ty:   TypeDefinition,
    /// The parameter name, unique within its method.
    pub name: String,
}

/// A parsed method: signature plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    /// Declared visibility.
    pub access:      AccessModifier,
    /// Whether the method is `static`.
    pub is_static:   bool,
    /// The declared return type.
    pub return_type: TypeDefinition,
    /// The method name.
    pub name:        String,
    /// Parameters in declaration order.
    pub params:      Vec<Parameter>,
    /// Statements executed on invocation.
    pub body:        Vec<Statement>,
    /// Line number in the source code.
    pub line:        usize,
}

/// A parsed `class` with its methods in declaration order.
///
/// Methods are reference counted so that runtime method values can share
/// them with the syntax tree instead of copying bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    /// The class name.
    pub name:    String,
    /// Declared methods.
    pub methods: Vec<Rc<MethodDeclaration>>,
    /// Line number in the source code.
    pub line:    usize,
}

/// One segment of a dotted import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSegment {
    /// A named package or member.
    Name(String),
    /// `*`, which always ends the path.
    Wildcard,
}

/// Arithmetic operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`, also string concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal string, number or `null`.
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `target = value`; evaluates to the assigned value.
    Assignment {
        /// The assigned-to expression. Only variables accept assignment.
        target: Box<Self>,
        /// The assigned expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An arithmetic operation or string concatenation.
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
    /// Dotted member access, `parent.member`.
    Access {
        /// The expression whose member is read.
        parent: Box<Self>,
        /// The member name.
        member: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// Invocation, `callee(arguments)`. Object construction parses to this
    /// as well.
    Call {
        /// The invoked expression.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kava::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Assignment { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Access { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// An executable syntax node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `import a.b.c;` or `import a.b.*;`
    Import {
        /// The dotted path, in order.
        path: Vec<ImportSegment>,
        /// Line number in the source code.
        line: usize,
    },
    /// A class declaration.
    Class(ClassDeclaration),
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `Type name;` or `Type name = value;`
    VariableDeclaration {
        /// The declared type.
        ty:    TypeDefinition,
        /// The variable name.
        name:  String,
        /// Optional initializer; absent means `null`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Appended after parsing; runs the program's `main` method.
    ExecuteEntryPoint,
}

/// A whole parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, ending with [`Statement::ExecuteEntryPoint`].
    pub statements: Vec<Statement>,
}

impl fmt::Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for _ in 0..self.dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public "),
            Self::Private => f.write_str("private "),
            Self::Protected => f.write_str("protected "),
            Self::PackagePrivate => Ok(()),
        }
    }
}

/// Binary expressions print fully parenthesised and assignments print
/// parenthesised whenever they are nested, so the output always re-parses to
/// the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => match value {
                Value::String(s) => write!(f, "\"{}\"", escape(s)),
                other => write!(f, "{other}"),
            },
            Self::Variable { name, .. } => f.write_str(name),
            Self::Assignment { target, value, .. } => write!(f, "{} = {value}", Nested(target)),
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "({} {op} {})", Nested(left), Nested(right))
            },
            Self::Access { parent, member, .. } => write!(f, "{}.{member}", Nested(parent)),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{}(", Nested(callee))?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", Nested(argument))?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Prints an operand, wrapping assignments in parentheses.
struct Nested<'a>(&'a Expr);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Assignment { .. } => write!(f, "({})", self.0),
            other => write!(f, "{other}"),
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for MethodDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.access)?;
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", param.ty, param.name)?;
        }
        writeln!(f, ") {{")?;
        for statement in &self.body {
            writeln!(f, "{statement}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for ImportSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import { path, .. } => {
                write!(f, "import ")?;
                for (index, segment) in path.iter().enumerate() {
                    if index > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{segment}")?;
                }
                write!(f, ";")
            },
            Self::Class(class) => {
                writeln!(f, "class {} {{", class.name)?;
                for method in &class.methods {
                    writeln!(f, "{method}")?;
                }
                write!(f, "}}")
            },
            Self::Expression { expr, .. } => write!(f, "{expr};"),
            Self::VariableDeclaration { ty, name, value, .. } => match value {
                Some(value) => write!(f, "{ty} {name} = {value};"),
                None => write!(f, "{ty} {name};"),
            },
            Self::ExecuteEntryPoint => Ok(()),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            if !matches!(statement, Statement::ExecuteEntryPoint) {
                writeln!(f, "{statement}")?;
            }
        }
        Ok(())
    }
}
