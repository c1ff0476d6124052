//! Generic traversal over descriptor trees.
//!
//! Every descriptor can be viewed as a [`DescriptorRef`], whose [`children`](DescriptorRef::children)
//! are its immediate sub-descriptors. The walkers in this module are built on that single method,
//! so algorithms over nested descriptors do not need to match on every variant themselves.
//!
//! ```
//! use jvm_descriptors::types::{field_type::FieldType, tree};
//!
//! let int_matrix: FieldType = "[[I".parse().unwrap();
//! let visited: Vec<String> = tree::pre_order(&int_matrix)
//!     .map(|it| it.descriptor().to_owned())
//!     .collect();
//! assert_eq!(visited, ["[[I", "[I", "I"]);
//! ```
use std::collections::VecDeque;

use crate::macros::descriptor_identity;

use super::{
    Descriptor,
    field_type::{ArrayType, FieldType, ObjectType, PrimitiveType},
    method_descriptor::{MethodDescriptor, ReturnType},
    qualified_name::QualifiedName,
};

/// A borrowed view of any descriptor.
#[derive(Debug, Clone, Copy, derive_more::Display)]
pub enum DescriptorRef<'a> {
    /// The `void` return type.
    #[display("void")]
    Void,
    /// A primitive type.
    Primitive(PrimitiveType),
    /// An object type.
    Object(&'a ObjectType),
    /// An array type.
    Array(&'a ArrayType),
    /// A method descriptor.
    Method(&'a MethodDescriptor),
}

impl<'a> DescriptorRef<'a> {
    /// Returns the descriptor in its class-file encoding.
    #[must_use]
    pub fn descriptor(&self) -> &'a str {
        match *self {
            Self::Void => "V",
            Self::Primitive(it) => it.descriptor_str(),
            Self::Object(it) => it.descriptor(),
            Self::Array(it) => it.descriptor(),
            Self::Method(it) => it.descriptor(),
        }
    }

    /// Returns the immediate children in order.
    /// - `void` and primitive types have none.
    /// - Object types have none; the class name is available from [`ObjectType::class_name`].
    /// - Array types have their component type.
    /// - Method descriptors have their parameter types followed by their return type.
    #[must_use]
    pub fn children(&self) -> Vec<DescriptorRef<'a>> {
        match *self {
            Self::Void | Self::Primitive(_) | Self::Object(_) => Vec::new(),
            Self::Array(array) => vec![array.component().as_node()],
            Self::Method(method) => method
                .parameters_types()
                .iter()
                .map(FieldType::as_node)
                .chain(std::iter::once(method.return_type().as_node()))
                .collect(),
        }
    }

    /// Checks if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Void | Self::Primitive(_) | Self::Object(_))
    }
}

descriptor_identity!(DescriptorRef<'_>);

impl Descriptor for DescriptorRef<'_> {
    fn descriptor(&self) -> &str {
        DescriptorRef::descriptor(self)
    }

    fn as_node(&self) -> DescriptorRef<'_> {
        *self
    }
}

impl<'a> From<&'a FieldType> for DescriptorRef<'a> {
    fn from(value: &'a FieldType) -> Self {
        value.as_node()
    }
}

impl<'a> From<&'a ReturnType> for DescriptorRef<'a> {
    fn from(value: &'a ReturnType) -> Self {
        value.as_node()
    }
}

impl<'a> From<&'a MethodDescriptor> for DescriptorRef<'a> {
    fn from(value: &'a MethodDescriptor) -> Self {
        Self::Method(value)
    }
}

impl<'a> From<&'a ObjectType> for DescriptorRef<'a> {
    fn from(value: &'a ObjectType) -> Self {
        Self::Object(value)
    }
}

impl<'a> From<&'a ArrayType> for DescriptorRef<'a> {
    fn from(value: &'a ArrayType) -> Self {
        Self::Array(value)
    }
}

impl From<PrimitiveType> for DescriptorRef<'_> {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

/// A depth-first, pre-order walk over a descriptor tree.
/// Created by [`pre_order`].
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<DescriptorRef<'a>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = DescriptorRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

/// A breadth-first walk over a descriptor tree.
/// Created by [`breadth_first`].
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a> {
    queue: VecDeque<DescriptorRef<'a>>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = DescriptorRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Walks `root` and all the descriptors nested in it, parents before children.
pub fn pre_order<D>(root: &D) -> PreOrder<'_>
where
    D: Descriptor + ?Sized,
{
    PreOrder {
        stack: vec![root.as_node()],
    }
}

/// Walks `root` and all the descriptors nested in it, level by level.
pub fn breadth_first<D>(root: &D) -> BreadthFirst<'_>
where
    D: Descriptor + ?Sized,
{
    BreadthFirst {
        queue: VecDeque::from([root.as_node()]),
    }
}

/// Walks all the descriptors nested in `root` in pre-order, excluding `root` itself.
pub fn descendants<D>(root: &D) -> impl Iterator<Item = DescriptorRef<'_>>
where
    D: Descriptor + ?Sized,
{
    pre_order(root).skip(1)
}

/// Returns the classes referenced at any depth in `root`, in pre-order.
/// A class referenced several times is yielded each time.
pub fn referenced_classes<D>(root: &D) -> impl Iterator<Item = &QualifiedName>
where
    D: Descriptor + ?Sized,
{
    pre_order(root).filter_map(|node| match node {
        DescriptorRef::Object(object) => Some(object.class_name()),
        _ => None,
    })
}

/// Exports the descriptor tree as a graph with an edge from each node to each of its children.
/// Nodes are inserted in pre-order, so the root has index `0`.
#[cfg(feature = "petgraph")]
pub fn to_graph<D>(root: &D) -> petgraph::Graph<DescriptorRef<'_>, ()>
where
    D: Descriptor + ?Sized,
{
    let mut graph = petgraph::Graph::new();
    let mut stack = vec![(root.as_node(), None)];
    while let Some((node, parent)) = stack.pop() {
        let index = graph.add_node(node);
        if let Some(parent) = parent {
            graph.add_edge(parent, index, ());
        }
        stack.extend(
            node.children()
                .into_iter()
                .rev()
                .map(|child| (child, Some(index))),
        );
    }
    graph
}
