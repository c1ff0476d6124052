//! Module containing the APIs for the JVM type system.
pub mod errors;
pub mod field_type;
pub mod method_descriptor;
mod parsing;
pub mod qualified_name;
pub mod tree;

pub use errors::{InvalidDescriptor, InvalidMethodDescriptor};

use tree::DescriptorRef;

/// Any type that can be typed by a field, a parameter, or an array component.
pub type JvmType = field_type::FieldType;

/// A field descriptor. Same as [`JvmType`].
pub type FieldDescriptor = field_type::FieldType;

/// The descriptor of a method parameter.
pub type ParameterDescriptor = field_type::FieldType;

/// The descriptor of a method return type, which is either a field type or `void`.
pub type ReturnDescriptor = method_descriptor::ReturnType;

/// Trait for types that have a descriptor.
pub trait Descriptor {
    /// Returns the descriptor in its class-file encoding, e.g. `[Ljava/lang/String;`.
    fn descriptor(&self) -> &str;

    /// Returns a borrowed view of the descriptor for tree traversal.
    fn as_node(&self) -> DescriptorRef<'_>;
}
