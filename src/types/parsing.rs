//! Parser for the descriptor grammar.
//!
//! ```text
//! FieldType        = BaseType | ObjectType | ArrayType
//! BaseType         = 'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z'
//! ObjectType       = 'L' ClassName ';'
//! ArrayType        = '[' FieldType
//! ReturnType       = FieldType | 'V'
//! MethodDescriptor = '(' FieldType* ')' ReturnType
//! ```

use super::{
    errors::{InvalidDescriptor, InvalidMethodDescriptor},
    field_type::{ArrayType, FieldType, ObjectType, PrimitiveType},
    method_descriptor::{MethodDescriptor, ReturnType},
    qualified_name::QualifiedName,
};

/// A cursor over a descriptor string.
/// Offsets in errors are byte offsets from the start of the whole input.
#[derive(Debug)]
struct DescriptorParser<'s> {
    input: &'s str,
    offset: usize,
}

impl<'s> DescriptorParser<'s> {
    fn new(input: &'s str) -> Self {
        Self { input, offset: 0 }
    }

    fn remaining(&self) -> &'s str {
        &self.input[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.offset += next.len_utf8();
        Some(next)
    }

    /// Parses a field type.
    /// Array dimensions are counted up front so that nesting depth does not grow the call stack.
    fn field_type(&mut self) -> Result<FieldType, InvalidDescriptor> {
        let start = self.offset;
        let mut dimensions = 0usize;
        while self.peek() == Some('[') {
            if dimensions == ArrayType::MAX_DIMENSIONS {
                return Err(InvalidDescriptor::TooManyDimensions { offset: start });
            }
            self.offset += 1;
            dimensions += 1;
        }
        let element = self.non_array_type()?;
        Ok((0..dimensions).fold(element, |it, _| it.into_array_type()))
    }

    fn non_array_type(&mut self) -> Result<FieldType, InvalidDescriptor> {
        let start = self.offset;
        match self.bump() {
            Some('L') => self.object_type(start).map(FieldType::Object),
            Some(found) => PrimitiveType::try_from(found)
                .map(FieldType::Base)
                .map_err(|_| InvalidDescriptor::UnexpectedChar {
                    found,
                    offset: start,
                }),
            None => Err(InvalidDescriptor::UnexpectedEnd),
        }
    }

    /// Parses the part of an object type after the leading `L`, which is at `start`.
    fn object_type(&mut self, start: usize) -> Result<ObjectType, InvalidDescriptor> {
        let remaining = self.remaining();
        let end = remaining
            .find(';')
            .ok_or(InvalidDescriptor::UnterminatedObjectType { offset: start })?;
        let class_name = QualifiedName::from_slash_qualified(&remaining[..end])?;
        self.offset += end + 1;
        Ok(ObjectType::new(class_name))
    }

    fn return_type(&mut self) -> Result<ReturnType, InvalidDescriptor> {
        if self.peek() == Some('V') {
            self.offset += 1;
            Ok(ReturnType::Void)
        } else {
            self.field_type().map(ReturnType::Some)
        }
    }

    fn method_descriptor(&mut self) -> Result<MethodDescriptor, InvalidMethodDescriptor> {
        if self.bump() != Some('(') {
            return Err(InvalidMethodDescriptor::MissingOpeningParenthesis);
        }
        let mut parameters_types = Vec::new();
        loop {
            match self.peek() {
                Some(')') => {
                    self.offset += 1;
                    break;
                }
                Some(_) => {
                    let index = parameters_types.len();
                    let parameter = self
                        .field_type()
                        .map_err(|source| InvalidMethodDescriptor::InvalidParameter { index, source })?;
                    parameters_types.push(parameter);
                }
                None => return Err(InvalidMethodDescriptor::MissingClosingParenthesis),
            }
        }
        let return_type = self
            .return_type()
            .map_err(InvalidMethodDescriptor::InvalidReturnType)?;
        match self.remaining() {
            "" => Ok(MethodDescriptor::new(parameters_types, return_type)),
            trailing => Err(InvalidMethodDescriptor::TrailingCharacters(
                trailing.to_owned(),
            )),
        }
    }

    fn finish<T>(&self, parsed: T) -> Result<T, InvalidDescriptor> {
        match self.remaining() {
            "" => Ok(parsed),
            trailing => Err(InvalidDescriptor::TrailingCharacters(trailing.to_owned())),
        }
    }
}

pub(super) fn parse_field_type(descriptor: &str) -> Result<FieldType, InvalidDescriptor> {
    log::trace!("Parsing field descriptor {descriptor:?}");
    let mut parser = DescriptorParser::new(descriptor);
    parser
        .field_type()
        .and_then(|it| parser.finish(it))
        .inspect_err(|err| log::debug!("Invalid field descriptor {descriptor:?}: {err}"))
}

pub(super) fn parse_return_type(descriptor: &str) -> Result<ReturnType, InvalidDescriptor> {
    log::trace!("Parsing return descriptor {descriptor:?}");
    let mut parser = DescriptorParser::new(descriptor);
    parser
        .return_type()
        .and_then(|it| parser.finish(it))
        .inspect_err(|err| log::debug!("Invalid return descriptor {descriptor:?}: {err}"))
}

pub(super) fn parse_method_descriptor(
    descriptor: &str,
) -> Result<MethodDescriptor, InvalidMethodDescriptor> {
    log::trace!("Parsing method descriptor {descriptor:?}");
    DescriptorParser::new(descriptor)
        .method_descriptor()
        .inspect_err(|err| log::debug!("Invalid method descriptor {descriptor:?}: {err}"))
}
