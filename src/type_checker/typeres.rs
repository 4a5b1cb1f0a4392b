//! Type resolutions: the types the checker assigns to expressions and
//! symbols.
//!
//! Unlike [`TypeName`], a resolution can be provisional. Integer literals
//! start out as `i32` with `default_until_inferred` set, and take on the
//! sign and width of whatever they are combined with. Once nothing more can
//! be learned the flag is cleared and the default sticks.

use std::fmt::Display;

use crate::ast::{
    ast::TypeNameWalker,
    types::{IntegerWidth, TypeName},
};

#[derive(Debug, Clone, PartialEq)]
pub enum TypeResKind {
    Integer {
        signed: bool,
        width: IntegerWidth,
        default_until_inferred: bool,
    },
    String,
    Boolean,
    /// The empty tuple is the unit type.
    Tuple(Vec<TypeRes>),
    Function {
        params: Vec<TypeRes>,
        return_type: Box<TypeRes>,
    },
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeRes {
    pub kind: TypeResKind,
    /// Set when a type error was found at or below the node this resolves.
    pub is_err: bool,
}

impl TypeRes {
    pub fn new(kind: TypeResKind) -> Self {
        TypeRes {
            kind,
            is_err: false,
        }
    }

    pub fn boolean() -> Self {
        TypeRes::new(TypeResKind::Boolean)
    }

    pub fn string() -> Self {
        TypeRes::new(TypeResKind::String)
    }

    pub fn unit() -> Self {
        TypeRes::new(TypeResKind::Tuple(vec![]))
    }

    pub fn unknown() -> Self {
        TypeRes::new(TypeResKind::Unknown)
    }

    pub fn integer(signed: bool, width: IntegerWidth) -> Self {
        TypeRes::new(TypeResKind::Integer {
            signed,
            width,
            default_until_inferred: false,
        })
    }

    /// The type of an integer literal before its context is known: a
    /// provisional `i32`.
    pub fn integer_literal() -> Self {
        TypeRes::new(TypeResKind::Integer {
            signed: true,
            width: IntegerWidth::Bits32,
            default_until_inferred: true,
        })
    }

    pub fn function(params: Vec<TypeRes>, return_type: TypeRes) -> Self {
        TypeRes::new(TypeResKind::Function {
            params,
            return_type: Box::new(return_type),
        })
    }

    pub fn from_type_name(type_name: &TypeName) -> Self {
        type_name.walk(&mut TypeResBuilder)
    }

    pub fn with_err(mut self, is_err: bool) -> Self {
        self.is_err |= is_err;
        self
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, TypeResKind::Integer { .. })
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.kind, TypeResKind::Boolean)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, TypeResKind::String)
    }

    pub fn is_provisional(&self) -> bool {
        matches!(
            self.kind,
            TypeResKind::Integer {
                default_until_inferred: true,
                ..
            }
        )
    }

    fn same_tag(&self, other: &TypeRes) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(&other.kind)
    }

    /// If `self` is a provisional integer and `from` is an integer, take on
    /// its sign, width and provisional flag. Does nothing otherwise.
    pub fn try_infer(&mut self, from: &TypeRes) {
        if let (
            TypeResKind::Integer {
                signed,
                width,
                default_until_inferred,
            },
            TypeResKind::Integer {
                signed: from_signed,
                width: from_width,
                default_until_inferred: from_default,
            },
        ) = (&mut self.kind, &from.kind)
        {
            if *default_until_inferred {
                *signed = *from_signed;
                *width = *from_width;
                *default_until_inferred = *from_default;
            }
        }
    }

    /// Like [`TypeRes::try_infer`], but afterwards the integer is concrete:
    /// if `from` was provisional too, the default `i32` becomes final.
    pub fn infer(&mut self, from: &TypeRes) {
        self.try_infer(from);

        if let TypeResKind::Integer {
            default_until_inferred,
            ..
        } = &mut self.kind
        {
            *default_until_inferred = false;
        }
    }

    /// Structural type equality.
    ///
    /// Integers match when sign and width agree, or when either side is
    /// still provisional. Tuples and functions match element by element.
    pub fn compatible_with(&self, other: &TypeRes) -> bool {
        match (&self.kind, &other.kind) {
            (
                TypeResKind::Integer {
                    signed,
                    width,
                    default_until_inferred,
                },
                TypeResKind::Integer {
                    signed: other_signed,
                    width: other_width,
                    default_until_inferred: other_default,
                },
            ) => {
                (signed == other_signed && width == other_width)
                    || *default_until_inferred
                    || *other_default
            }
            (TypeResKind::Tuple(items), TypeResKind::Tuple(other_items)) => {
                all_compatible(items, other_items)
            }
            (
                TypeResKind::Function {
                    params,
                    return_type,
                },
                TypeResKind::Function {
                    params: other_params,
                    return_type: other_return,
                },
            ) => return_type.compatible_with(other_return) && all_compatible(params, other_params),
            _ => self.same_tag(other),
        }
    }
}

fn all_compatible(left: &[TypeRes], right: &[TypeRes]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| left.compatible_with(right))
}

fn join(items: &[TypeRes]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl Display for TypeRes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TypeResKind::Integer {
                default_until_inferred: true,
                ..
            } => write!(f, "{{integer}}"),
            TypeResKind::Integer { signed, width, .. } => {
                write!(f, "{}{}", if *signed { "i" } else { "u" }, width.bits())
            }
            TypeResKind::String => write!(f, "string"),
            TypeResKind::Boolean => write!(f, "boolean"),
            TypeResKind::Tuple(items) => write!(f, "({})", join(items)),
            TypeResKind::Function {
                params,
                return_type,
            } => write!(f, "fn({}) -> {}", join(params), return_type),
            TypeResKind::Unknown => write!(f, "{{unknown}}"),
        }
    }
}

struct TypeResBuilder;

impl TypeNameWalker for TypeResBuilder {
    type Output = TypeRes;

    fn walk_boolean(&mut self) -> TypeRes {
        TypeRes::boolean()
    }

    fn walk_string(&mut self) -> TypeRes {
        TypeRes::string()
    }

    fn walk_integer(&mut self, signed: bool, width: IntegerWidth) -> TypeRes {
        TypeRes::integer(signed, width)
    }

    fn walk_tuple(&mut self, items: &[TypeName]) -> TypeRes {
        TypeRes::new(TypeResKind::Tuple(
            items.iter().map(|item| item.walk(self)).collect(),
        ))
    }

    fn walk_function(&mut self, params: &[TypeName], return_type: &TypeName) -> TypeRes {
        TypeRes::function(
            params.iter().map(|param| param.walk(self)).collect(),
            return_type.walk(self),
        )
    }

    fn walk_unit(&mut self) -> TypeRes {
        TypeRes::unit()
    }
}
