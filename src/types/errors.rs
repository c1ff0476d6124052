//! Errors raised when parsing descriptors.

use crate::macros::see_jvm_spec;

use super::{field_type::ArrayType, qualified_name::InvalidQualifiedName};

/// An error indicating that a field or return descriptor is malformed.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum InvalidDescriptor {
    /// The descriptor ended where a type was expected.
    #[error("Unexpected end of descriptor")]
    UnexpectedEnd,
    /// A character that cannot start a type was found.
    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// The byte offset of the character in the descriptor.
        offset: usize,
    },
    /// An object type is not terminated by `;`.
    #[error("Object type starting at offset {offset} is missing the terminating ';'")]
    UnterminatedObjectType {
        /// The byte offset of the leading `L`.
        offset: usize,
    },
    /// An array type has more dimensions than the JVM allows.
    #[doc = see_jvm_spec!(4, 3, 2)]
    #[error("Array type starting at offset {offset} has more than {max} dimensions", max = ArrayType::MAX_DIMENSIONS)]
    TooManyDimensions {
        /// The byte offset of the first `[`.
        offset: usize,
    },
    /// The class name of an object type is malformed.
    #[error(transparent)]
    InvalidClassName(#[from] InvalidQualifiedName),
    /// There are characters left after a complete descriptor.
    #[error("Unexpected trailing characters {0:?}")]
    TrailingCharacters(String),
}

/// An error indicating that a method descriptor is malformed.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum InvalidMethodDescriptor {
    /// The descriptor does not start with `(`.
    #[error("Method descriptor must start with '('")]
    MissingOpeningParenthesis,
    /// The parameter list is not closed by `)`.
    #[error("Parameter list is not closed by ')'")]
    MissingClosingParenthesis,
    /// One of the parameters is malformed.
    #[error("Invalid parameter #{index}: {source}")]
    InvalidParameter {
        /// The zero-based index of the parameter.
        index: usize,
        /// The reason why the parameter is malformed.
        source: InvalidDescriptor,
    },
    /// The return type is malformed.
    #[error("Invalid return type: {0}")]
    InvalidReturnType(#[source] InvalidDescriptor),
    /// There are characters left after the return type.
    #[error("Unexpected trailing characters {0:?}")]
    TrailingCharacters(String),
}
