//! Field types: primitive types, object types, and array types.
use std::{fmt::Display, str::FromStr};

use crate::macros::{descriptor_identity, see_jvm_spec};

use super::{
    Descriptor,
    errors::InvalidDescriptor,
    parsing,
    qualified_name::{InvalidQualifiedName, QualifiedName},
    tree::DescriptorRef,
};

/// A primitive type in Java.
/// Primitive types are ordered by their descriptor, like every other descriptor.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// All the primitive types.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
    ];

    /// Returns the single-character descriptor of the type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }

    /// Returns the descriptor of the type as a string.
    #[must_use]
    pub const fn descriptor_str(self) -> &'static str {
        match self {
            Self::Boolean => "Z",
            Self::Char => "C",
            Self::Float => "F",
            Self::Double => "D",
            Self::Byte => "B",
            Self::Short => "S",
            Self::Int => "I",
            Self::Long => "J",
        }
    }

    /// Checks if values of this type occupy two local variable slots (i.e., `long` and `double`).
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Long | Self::Double)
    }

    /// Looks up a primitive type by its Java keyword, e.g. `"int"`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.to_string() == keyword)
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            found => Err(InvalidDescriptor::UnexpectedChar { found, offset: 0 }),
        }
    }
}

impl PartialOrd for PrimitiveType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrimitiveType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.descriptor_char().cmp(&other.descriptor_char())
    }
}

impl Descriptor for PrimitiveType {
    fn descriptor(&self) -> &str {
        self.descriptor_str()
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        DescriptorRef::Primitive(*self)
    }
}

/// An object type, i.e., a reference to an instance of a class.
#[derive(Debug, Clone)]
pub struct ObjectType {
    class_name: QualifiedName,
    descriptor: Box<str>,
}

impl ObjectType {
    /// Creates an object type for the given class.
    #[must_use]
    pub fn new(class_name: QualifiedName) -> Self {
        let descriptor = format!("L{};", class_name.to_slash_qualified_string()).into_boxed_str();
        Self {
            class_name,
            descriptor,
        }
    }

    /// Creates an object type from a raw class name qualified with `.` or `/`.
    /// # Errors
    /// - [`InvalidQualifiedName`] if `name` is not a valid class name.
    pub fn from_name(name: &str, dot_qualified: bool) -> Result<Self, InvalidQualifiedName> {
        QualifiedName::new(name, dot_qualified).map(Self::new)
    }

    /// Returns the name of the class.
    #[must_use]
    pub fn class_name(&self) -> &QualifiedName {
        &self.class_name
    }

    /// Returns the descriptor, e.g. `Ljava/lang/String;`.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl From<QualifiedName> for ObjectType {
    fn from(class_name: QualifiedName) -> Self {
        Self::new(class_name)
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.class_name.short_name().fmt(f)
    }
}

/// An array type.
/// The component type may itself be an array type.
#[derive(Debug, Clone)]
pub struct ArrayType {
    component: Box<FieldType>,
    descriptor: Box<str>,
}

impl ArrayType {
    /// The maximum number of dimensions of an array type accepted by the JVM.
    #[doc = see_jvm_spec!(4, 3, 2)]
    pub const MAX_DIMENSIONS: usize = 255;

    /// Creates an array type whose elements are of type `component`.
    ///
    /// The parser rejects arrays with more than [`ArrayType::MAX_DIMENSIONS`] dimensions,
    /// but this constructor does not. Each level caches its whole descriptor, so building
    /// deeper arrays by hand costs memory quadratic in the depth.
    #[must_use]
    pub fn new(component: FieldType) -> Self {
        let descriptor = format!("[{}", component.descriptor()).into_boxed_str();
        Self {
            component: Box::new(component),
            descriptor,
        }
    }

    /// Returns the type of the array components.
    #[must_use]
    pub fn component(&self) -> &FieldType {
        &self.component
    }

    /// Consumes the array type and returns its component type.
    #[must_use]
    pub fn into_component(mut self) -> FieldType {
        std::mem::replace(&mut *self.component, FieldType::BOOLEAN)
    }

    /// Returns the number of dimensions, which is at least one.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        1 + self.component.dimensions()
    }

    /// Returns the innermost non-array type.
    #[must_use]
    pub fn element_type(&self) -> &FieldType {
        self.component.element_type()
    }

    /// Returns the descriptor, e.g. `[[I`.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

// Unlinks nested components one level at a time so that dropping a deep array
// does not recurse once per dimension.
impl Drop for ArrayType {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut *self.component, FieldType::BOOLEAN);
        while let FieldType::Array(mut array) = next {
            next = std::mem::replace(&mut *array.component, FieldType::BOOLEAN);
        }
    }
}

impl Display for ArrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.element_type())?;
        for _ in 0..self.dimensions() {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// A field type.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// An object type.
    Object(ObjectType),
    /// An array type.
    Array(ArrayType),
}

impl FieldType {
    /// The `boolean` type.
    pub const BOOLEAN: Self = Self::Base(PrimitiveType::Boolean);
    /// The `char` type.
    pub const CHAR: Self = Self::Base(PrimitiveType::Char);
    /// The `float` type.
    pub const FLOAT: Self = Self::Base(PrimitiveType::Float);
    /// The `double` type.
    pub const DOUBLE: Self = Self::Base(PrimitiveType::Double);
    /// The `byte` type.
    pub const BYTE: Self = Self::Base(PrimitiveType::Byte);
    /// The `short` type.
    pub const SHORT: Self = Self::Base(PrimitiveType::Short);
    /// The `int` type.
    pub const INT: Self = Self::Base(PrimitiveType::Int);
    /// The `long` type.
    pub const LONG: Self = Self::Base(PrimitiveType::Long);

    /// Creates an object type for the given class.
    #[must_use]
    pub fn object(class_name: QualifiedName) -> Self {
        Self::Object(ObjectType::new(class_name))
    }

    /// Creates an array type with the given number of dimensions.
    /// Returns `element` itself if `dimensions` is zero.
    ///
    /// A `u8` keeps `dimensions` within [`ArrayType::MAX_DIMENSIONS`], unless `element`
    /// is itself an array type.
    #[must_use]
    pub fn array_of(element: Self, dimensions: u8) -> Self {
        (0..dimensions).fold(element, |it, _| it.into_array_type())
    }

    /// Creates an array type whose elements are of this type.
    #[must_use]
    pub fn make_array_type(&self) -> Self {
        self.clone().into_array_type()
    }

    /// Converts this type into an array type whose elements are of this type.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(ArrayType::new(self))
    }

    /// Returns the number of array dimensions, which is zero for non-array types.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        let mut dimensions = 0;
        let mut current = self;
        while let Self::Array(array) = current {
            dimensions += 1;
            current = array.component();
        }
        dimensions
    }

    /// Returns the innermost non-array type. Non-array types return themselves.
    #[must_use]
    pub fn element_type(&self) -> &Self {
        let mut current = self;
        while let Self::Array(array) = current {
            current = array.component();
        }
        current
    }

    /// Checks if this is a primitive type.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Base(_))
    }

    /// Checks if this is a reference type, i.e., an object type or an array type.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !self.is_primitive()
    }

    /// Checks if this is an array type.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the descriptor, e.g. `I` or `[Ljava/lang/String;`.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        match self {
            Self::Base(it) => it.descriptor_str(),
            Self::Object(it) => it.descriptor(),
            Self::Array(it) => it.descriptor(),
        }
    }
}

descriptor_identity!(ObjectType, ArrayType, FieldType);

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        parsing::parse_field_type(descriptor)
    }
}

impl Descriptor for ObjectType {
    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        DescriptorRef::Object(self)
    }
}

impl Descriptor for ArrayType {
    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        DescriptorRef::Array(self)
    }
}

impl Descriptor for FieldType {
    fn descriptor(&self) -> &str {
        FieldType::descriptor(self)
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        match self {
            Self::Base(it) => DescriptorRef::Primitive(*it),
            Self::Object(it) => DescriptorRef::Object(it),
            Self::Array(it) => DescriptorRef::Array(it),
        }
    }
}
