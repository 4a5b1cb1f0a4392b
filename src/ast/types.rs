//! Type names as written in the source.
//!
//! This module defines the type annotations the parser attaches to variable
//! declarations, parameters and function signatures:
//!
//! - Primitive types (booleans, strings, sized integers)
//! - Composite types (tuples, function types)
//! - The unit type, which is also the implicit return type
//!
//! Type names are immutable once parsed. The type checker turns them into
//! type resolutions before comparing them.

use std::fmt::Display;

/// Bit width of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerWidth {
    Bits8,
    Bits16,
    Bits32,
}

impl IntegerWidth {
    pub fn bits(&self) -> u8 {
        match self {
            IntegerWidth::Bits8 => 8,
            IntegerWidth::Bits16 => 16,
            IntegerWidth::Bits32 => 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Boolean,
    String,
    Integer {
        signed: bool,
        width: IntegerWidth,
    },
    Tuple(Vec<TypeName>),
    Function {
        params: Vec<TypeName>,
        return_type: Box<TypeName>,
    },
    Unit,
}

impl TypeName {
    pub fn integer(signed: bool, width: IntegerWidth) -> Self {
        TypeName::Integer { signed, width }
    }

    pub fn function(params: Vec<TypeName>, return_type: TypeName) -> Self {
        TypeName::Function {
            params,
            return_type: Box::new(return_type),
        }
    }
}

/// Spells the type the way it is written in source, e.g. `fn(i32, string) -> boolean`.
impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Boolean => write!(f, "boolean"),
            TypeName::String => write!(f, "string"),
            TypeName::Integer { signed, width } => {
                write!(f, "{}{}", if *signed { "i" } else { "u" }, width.bits())
            }
            TypeName::Tuple(items) => {
                let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "({})", items.join(", "))
            }
            TypeName::Function {
                params,
                return_type,
            } => {
                let params: Vec<String> = params.iter().map(|param| param.to_string()).collect();
                write!(f, "fn({}) -> {}", params.join(", "), return_type)
            }
            TypeName::Unit => write!(f, "()"),
        }
    }
}
