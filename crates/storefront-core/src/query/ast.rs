/// Abstract Syntax Tree (AST) node types for GraphQL executable documents
///
/// Covers the subset the storefront emits: one operation per document with
/// variable definitions, fields, arguments, aliases and inline fragments.
use std::fmt;

/// A GraphQL document holding a single operation
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub operation: OperationType,
    pub name: Option<String>,
    pub variables: Vec<VariableDefinition>,
    pub selection: SelectionSet,
}

/// Kind of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
}

/// `$name: Type` in the operation header
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub ty: TypeRef,
}

/// Input type reference
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// `String`, `ID`, `SelectedOptionInput`
    Named(String),
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`
    NonNull(Box<TypeRef>),
}

/// Braced list of selections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    pub items: Vec<Selection>,
}

/// One entry of a selection set
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Field),
    /// `... on Type { ... }`
    InlineFragment {
        type_condition: String,
        selection: SelectionSet,
    },
}

/// A field, optionally aliased, with arguments and sub-selections
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection: SelectionSet,
}

/// `name: value`
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// Input values
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `$name`
    Variable(String),
    Int(i64),
    Float(f64),
    /// Rendered quoted and escaped
    String(String),
    Boolean(bool),
    Null,
    /// Bare enum value such as `PRICE`
    Enum(String),
    List(Vec<Value>),
    /// `{key: value, ...}`, in insertion order
    Object(Vec<(String, Value)>),
}

impl Document {
    /// An anonymous query
    pub fn query(selection: SelectionSet) -> Self {
        Self {
            operation: OperationType::Query,
            name: None,
            variables: Vec::new(),
            selection,
        }
    }

    /// Set the operation name
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a variable
    pub fn variable<S: Into<String>>(mut self, name: S, ty: TypeRef) -> Self {
        self.variables.push(VariableDefinition {
            name: name.into(),
            ty,
        });
        self
    }
}

impl TypeRef {
    /// `Name`
    pub fn named<S: Into<String>>(name: S) -> Self {
        TypeRef::Named(name.into())
    }

    /// `Name!`
    pub fn non_null<S: Into<String>>(name: S) -> Self {
        TypeRef::NonNull(Box::new(TypeRef::Named(name.into())))
    }

    /// `[Name!]!`
    pub fn non_null_list_of<S: Into<String>>(name: S) -> Self {
        TypeRef::NonNull(Box::new(TypeRef::List(Box::new(Self::non_null(name)))))
    }
}

impl SelectionSet {
    /// An empty selection set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn field(mut self, field: Field) -> Self {
        self.items.push(Selection::Field(field));
        self
    }

    /// Append scalar fields by name
    pub fn leaves<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.items.push(Selection::Field(Field::new(name)));
        }
        self
    }

    /// Append an inline fragment on `type_condition`
    pub fn on<S: Into<String>>(mut self, type_condition: S, selection: SelectionSet) -> Self {
        self.items.push(Selection::InlineFragment {
            type_condition: type_condition.into(),
            selection,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Field {
    /// A leaf field with no arguments
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            selection: SelectionSet::default(),
        }
    }

    /// Set the response key
    pub fn alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Add a sub-field
    pub fn field(mut self, field: Field) -> Self {
        self.selection.items.push(Selection::Field(field));
        self
    }

    /// Add scalar sub-fields by name
    pub fn leaves<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = self.selection.leaves(names);
        self
    }

    /// Append every selection of `selection`
    pub fn select(mut self, selection: SelectionSet) -> Self {
        self.selection.items.extend(selection.items);
        self
    }

    /// Add an inline fragment
    pub fn on<S: Into<String>>(mut self, type_condition: S, selection: SelectionSet) -> Self {
        self.selection = self.selection.on(type_condition, selection);
        self
    }
}

impl Value {
    /// A string literal
    pub fn string<S: Into<String>>(s: S) -> Self {
        Value::String(s.into())
    }

    /// A reference to a declared variable
    pub fn variable<S: Into<String>>(name: S) -> Self {
        Value::Variable(name.into())
    }
}

/// Escape `s` for use between double quotes in a GraphQL string literal.
///
/// Ordinary slug and ID characters pass through unchanged.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

const INDENT: &str = "  ";

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

/// Writes `{`, one selection per line at `depth + 1`, then `}` at `depth`.
fn write_selection_set(
    f: &mut fmt::Formatter<'_>,
    set: &SelectionSet,
    depth: usize,
) -> fmt::Result {
    writeln!(f, "{{")?;
    for item in &set.items {
        write_indent(f, depth + 1)?;
        match item {
            Selection::Field(field) => write_field(f, field, depth + 1)?,
            Selection::InlineFragment {
                type_condition,
                selection,
            } => {
                write!(f, "... on {} ", type_condition)?;
                write_selection_set(f, selection, depth + 1)?;
            }
        }
        writeln!(f)?;
    }
    write_indent(f, depth)?;
    write!(f, "}}")
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &Field, depth: usize) -> fmt::Result {
    if let Some(ref alias) = field.alias {
        write!(f, "{}: ", alias)?;
    }
    write!(f, "{}", field.name)?;
    if !field.arguments.is_empty() {
        write!(f, "(")?;
        for (i, arg) in field.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")?;
    }
    if !field.selection.is_empty() {
        write!(f, " ")?;
        write_selection_set(f, &field.selection, depth)?;
    }
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(ref name) = self.name {
            write!(f, " {}", name)?;
        }
        if !self.variables.is_empty() {
            write!(f, "(")?;
            for (i, var) in self.variables.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", var)?;
            }
            write!(f, ")")?;
        }
        write!(f, " ")?;
        write_selection_set(f, &self.selection, 0)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Query => write!(f, "query"),
            OperationType::Mutation => write!(f, "mutation"),
        }
    }
}

impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}: {}", self.name, self.ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self, 0)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Variable(name) => write!(f, "${}", name),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Enum(name) => write!(f, "{}", name),
            Value::List(values) => {
                write!(f, "[")?;
                for (i, val) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            Value::Object(fields) => {
                write!(f, "{{")?;
                for (i, (key, val)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}
