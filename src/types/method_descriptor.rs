//! Non-generic JVM method descriptors.

use itertools::Itertools;
use std::{fmt::Display, str::FromStr};

use crate::macros::{descriptor_identity, see_jvm_spec};

use super::{
    Descriptor,
    errors::{InvalidDescriptor, InvalidMethodDescriptor},
    field_type::FieldType,
    parsing,
    tree::DescriptorRef,
};

/// The descriptor of a method.
/// Consists of the parameters types and the return type.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    parameters_types: Vec<FieldType>,
    return_type: ReturnType,
    descriptor: Box<str>,
}

/// Denotes the return type of a method.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ReturnType {
    /// The method returns a specific type.
    Some(FieldType),
    /// The return type of the method is `void`.
    #[display("void")]
    Void,
}

impl ReturnType {
    /// The `void` return type.
    pub const VOID: Self = Self::Void;

    /// Returns the descriptor for return type.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        match self {
            ReturnType::Some(it) => it.descriptor(),
            ReturnType::Void => "V",
        }
    }

    /// Checks if the return type is `void`.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns the returned field type, or [`None`] for `void`.
    #[must_use]
    pub fn field_type(&self) -> Option<&FieldType> {
        match self {
            Self::Some(it) => Some(it),
            Self::Void => None,
        }
    }
}

impl From<FieldType> for ReturnType {
    fn from(field_type: FieldType) -> Self {
        Self::Some(field_type)
    }
}

impl FromStr for ReturnType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        parsing::parse_return_type(descriptor)
    }
}

impl MethodDescriptor {
    /// Creates a method descriptor from its parameter types and its return type.
    #[must_use]
    pub fn new<P, R>(parameters_types: P, return_type: R) -> Self
    where
        P: IntoIterator<Item = FieldType>,
        R: Into<ReturnType>,
    {
        let parameters_types: Vec<_> = parameters_types.into_iter().collect();
        let return_type = return_type.into();
        let descriptor = format!(
            "({}){}",
            parameters_types.iter().map(FieldType::descriptor).join(""),
            return_type.descriptor()
        )
        .into_boxed_str();
        Self {
            parameters_types,
            return_type,
            descriptor,
        }
    }

    /// Returns the types of the parameters.
    #[must_use]
    pub fn parameters_types(&self) -> &[FieldType] {
        &self.parameters_types
    }

    /// Returns the return type.
    #[must_use]
    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    /// Returns the number of local variable slots taken by the parameters.
    /// `long` and `double` parameters take two slots. The receiver of instance methods is not counted.
    #[must_use]
    pub fn parameter_slots(&self) -> usize {
        self.parameters_types
            .iter()
            .map(|it| match it {
                FieldType::Base(primitive) if primitive.is_wide() => 2,
                _ => 1,
            })
            .sum()
    }

    /// Returns the descriptor, e.g. `(ILjava/lang/String;)V`.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

descriptor_identity!(ReturnType, MethodDescriptor);

impl Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}): {}",
            self.parameters_types.iter().format(", "),
            self.return_type
        )
    }
}

impl FromStr for MethodDescriptor {
    type Err = InvalidMethodDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        parsing::parse_method_descriptor(descriptor)
    }
}

impl Descriptor for ReturnType {
    fn descriptor(&self) -> &str {
        ReturnType::descriptor(self)
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        match self {
            Self::Some(it) => it.as_node(),
            Self::Void => DescriptorRef::Void,
        }
    }
}

impl Descriptor for MethodDescriptor {
    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        DescriptorRef::Method(self)
    }
}
