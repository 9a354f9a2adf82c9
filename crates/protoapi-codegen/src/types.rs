//! Per-backend scalar type tables.
//!
//! Each backend maps the schema's scalar type names onto its target
//! language. Lookup is exact and case-sensitive. A name missing from the
//! table is a message or enum reference and passes through unchanged.
//!
//! | Schema | TypeScript | Go | Java | PHP |
//! |--------|------------|----|------|-----|
//! | `int32`, `sint32`, `sfixed32` | `number` | `int32` | `Integer` | `int` |
//! | `uint32`, `fixed32` | `number` | `uint32` | `Integer` | `int` |
//! | `int64`, `sint64`, `sfixed64` | `number` | `int64` | `Long` | `int` |
//! | `uint64`, `fixed64` | `number` | `uint64` | `Long` | `int` |
//! | `double` | `number` | `float64` | `Double` | `float` |
//! | `float` | `number` | `float32` | `Float` | `float` |
//! | `bool` | `boolean` | `bool` | `Boolean` | `bool` |
//! | `string` | `string` | `string` | `String` | `string` |
//! | `bytes` | `string` | `[]byte` | `byte[]` | `string` |

/// A scalar type table for one target language.
///
/// Several schema scalars may map to the same target type; entries are
/// looked up by schema name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTable {
    language: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl TypeTable {
    pub const TYPESCRIPT: TypeTable = TypeTable {
        language: "typescript",
        entries: &[
            ("int", "number"),
            ("double", "number"),
            ("float", "number"),
            ("int32", "number"),
            ("int64", "number"),
            ("uint32", "number"),
            ("uint64", "number"),
            ("sint32", "number"),
            ("sint64", "number"),
            ("fixed32", "number"),
            ("fixed64", "number"),
            ("sfixed32", "number"),
            ("sfixed64", "number"),
            ("bool", "boolean"),
            ("string", "string"),
            ("bytes", "string"),
        ],
    };

    pub const GO: TypeTable = TypeTable {
        language: "go",
        entries: &[
            ("int", "int"),
            ("double", "float64"),
            ("float", "float32"),
            ("int32", "int32"),
            ("int64", "int64"),
            ("uint32", "uint32"),
            ("uint64", "uint64"),
            ("sint32", "int32"),
            ("sint64", "int64"),
            ("fixed32", "uint32"),
            ("fixed64", "uint64"),
            ("sfixed32", "int32"),
            ("sfixed64", "int64"),
            ("bool", "bool"),
            ("string", "string"),
            ("bytes", "[]byte"),
        ],
    };

    /// Boxed forms throughout, so the same name works inside `List<...>`.
    pub const JAVA: TypeTable = TypeTable {
        language: "java",
        entries: &[
            ("int", "Integer"),
            ("double", "Double"),
            ("float", "Float"),
            ("int32", "Integer"),
            ("int64", "Long"),
            ("uint32", "Integer"),
            ("uint64", "Long"),
            ("sint32", "Integer"),
            ("sint64", "Long"),
            ("fixed32", "Integer"),
            ("fixed64", "Long"),
            ("sfixed32", "Integer"),
            ("sfixed64", "Long"),
            ("bool", "Boolean"),
            ("string", "String"),
            ("bytes", "byte[]"),
        ],
    };

    pub const PHP: TypeTable = TypeTable {
        language: "php",
        entries: &[
            ("int", "int"),
            ("double", "float"),
            ("float", "float"),
            ("int32", "int"),
            ("int64", "int"),
            ("uint32", "int"),
            ("uint64", "int"),
            ("sint32", "int"),
            ("sint64", "int"),
            ("fixed32", "int"),
            ("fixed64", "int"),
            ("sfixed32", "int"),
            ("sfixed64", "int"),
            ("bool", "bool"),
            ("string", "string"),
            ("bytes", "string"),
        ],
    };

    /// Target language this table serves.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Target type for a schema scalar, `None` for anything else.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(schema, _)| *schema == name)
            .map(|(_, target)| *target)
    }

    /// Translate a declared type name; non-scalars are returned as given.
    pub fn translate<'a>(&self, name: &'a str) -> &'a str {
        self.lookup(name).unwrap_or(name)
    }

    /// Whether `name` is one of this table's schema scalars.
    pub fn is_scalar(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Schema scalar names covered by this table, in table order.
    pub fn scalars(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(schema, _)| *schema)
    }
}
