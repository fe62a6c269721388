//! # Schema AST
//!
//! Intermediate representation of a parsed Prisma schema.

/// A parsed schema file: its top-level declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Top-level declarations.
    pub list: Vec<Declaration>,
}

impl Schema {
    /// Iterates over the model declarations only.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.list.iter().filter_map(|decl| match decl {
            Declaration::Model(model) => Some(model),
            _ => None,
        })
    }

    /// First model declaration named exactly `name`.
    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models().find(|model| model.name == name)
    }
}

/// A top-level schema block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `model Name { ... }`
    Model(Model),
    /// `view Name { ... }` (same body shape as a model).
    View(Model),
    /// `type Name { ... }` composite type (same body shape as a model).
    CompositeType(Model),
    /// `enum Name { ... }`
    Enum(EnumDecl),
    /// `datasource` / `generator` blocks, kept as key/value assignments.
    Config(ConfigBlock),
    /// A top-level comment line.
    Comment(String),
}

/// A model-shaped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The block name.
    pub name: String,
    /// Body items in source order.
    pub properties: Vec<Property>,
}

impl Model {
    /// Iterates over the field properties only.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.properties.iter().filter_map(|prop| match prop {
            Property::Field(field) => Some(field),
            _ => None,
        })
    }

    /// The first field carrying an `@id` attribute.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields().find(|field| field.has_attribute("id"))
    }
}

/// One item inside a model body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// `name Type? @attr(...)`
    Field(Field),
    /// `@@attr(...)`
    BlockAttribute(Attribute),
    /// `// ...` or `/// ...`
    Comment(String),
}

/// A model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared type name without modifiers, e.g. `String`.
    pub field_type: String,
    /// `Type?`
    pub optional: bool,
    /// `Type[]`
    pub list: bool,
    /// Field attributes in source order.
    pub attributes: Vec<Attribute>,
}

impl Field {
    /// Returns the first attribute named `name`.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Whether an attribute named `name` is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// `@name(args)` or `@@name(args)`. Namespaced attributes such as
/// `@db.VarChar(255)` keep the dotted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name without the `@` prefix.
    pub name: String,
    /// Arguments, empty when written without parentheses.
    pub args: Vec<AttributeArg>,
}

/// A positional or `key: value` attribute argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArg {
    /// Set for named arguments (`fields: [authorId]`).
    pub key: Option<String>,
    /// The argument value.
    pub value: Value,
}

/// An attribute argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `"text"`
    Str(String),
    /// Numbers and booleans, kept verbatim.
    Literal(String),
    /// A bare identifier such as `Cascade` or `uuid`.
    Ident(String),
    /// `[a, b]`
    Array(Vec<Value>),
    /// `uuid()`, `now()`, `dbgenerated("...")`
    Function {
        /// Function name.
        name: String,
        /// Call arguments.
        params: Vec<Value>,
    },
}

impl Value {
    /// Whether this value names `ident`, either as a bare identifier or as a call.
    pub fn names(&self, ident: &str) -> bool {
        match self {
            Value::Ident(name) => name == ident,
            Value::Function { name, .. } => name == ident,
            _ => false,
        }
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Variant names in source order.
    pub values: Vec<String>,
}

/// A `datasource` or `generator` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock {
    /// `datasource` or `generator`.
    pub kind: String,
    /// Block name.
    pub name: String,
    /// `key = value` assignments with the raw right-hand side.
    pub assignments: Vec<(String, String)>,
}
