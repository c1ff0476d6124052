//! Fully qualified class names.
//!
//! A [`QualifiedName`] is made of a [`PackageName`] and a [`ShortClassName`].
//! In the binary form stored in class files, packages are separated by `/` and nested
//! classes by `$`, e.g. `java/util/Map$Entry`.
use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::macros::see_jvm_spec;

const NESTED_CLASS_SEPARATOR: char = '$';

/// Characters that may never appear in a class name.
const FORBIDDEN_CHARS: [char; 2] = [';', '['];

/// An error indicating that a class name is malformed.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Invalid qualified name: {0:?}")]
pub struct InvalidQualifiedName(pub String);

/// The name of a package, e.g. `java.lang`.
/// The default package has no segments.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
pub struct PackageName {
    segments: Vec<String>,
}

impl PackageName {
    /// Returns the segments of the package name, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Checks if this is the default (unnamed) package.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the package name separated by `/`, e.g. `java/lang`.
    #[must_use]
    pub fn to_slash_qualified_string(&self) -> String {
        self.segments.join("/")
    }

    /// Returns the package name separated by `.`, e.g. `java.lang`.
    #[must_use]
    pub fn to_dot_qualified_string(&self) -> String {
        self.segments.join(".")
    }
}

impl Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.iter().format("."))
    }
}

/// The name of a class without its package.
/// For nested classes, it holds the path from the outermost class to the innermost one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ShortClassName {
    components: Vec<String>,
}

impl ShortClassName {
    /// Returns the components of the class name, outermost class first.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns the name of the outermost class.
    #[must_use]
    pub fn outer_class_name(&self) -> &str {
        self.components.first().map_or("", String::as_str)
    }

    /// Returns the simple name of the innermost class.
    #[must_use]
    pub fn inner_class_name(&self) -> &str {
        self.components.last().map_or("", String::as_str)
    }

    /// Checks if the class is nested in another class.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.components.len() > 1
    }

    /// Returns the name as it appears in a binary name, e.g. `Map$Entry`.
    #[must_use]
    pub fn to_dollar_qualified_string(&self) -> String {
        self.components.join("$")
    }

    /// Returns the name as it appears in Java source code, e.g. `Map.Entry`.
    /// Empty components of synthetic names keep their `$`, e.g. `$Proxy12`.
    #[must_use]
    pub fn to_dot_qualified_string(&self) -> String {
        self.to_string()
    }
}

impl Display for ShortClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut previous: Option<&str> = None;
        for component in &self.components {
            match previous {
                Some(previous) if previous.is_empty() || component.is_empty() => {
                    write!(f, "{NESTED_CLASS_SEPARATOR}")?;
                }
                Some(_) => write!(f, ".")?,
                None => {}
            }
            write!(f, "{component}")?;
            previous = Some(component.as_str());
        }
        Ok(())
    }
}

/// The fully qualified name of a class.
#[doc = see_jvm_spec!(4, 2, 1)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct QualifiedName {
    package: PackageName,
    short_name: ShortClassName,
}

impl QualifiedName {
    /// Parses a class name qualified either with `.` or with `/`.
    /// In both forms, nested classes are separated by `$`.
    /// # Errors
    /// See [`QualifiedName::from_slash_qualified`] and [`QualifiedName::from_dot_qualified`].
    pub fn new(name: &str, dot_qualified: bool) -> Result<Self, InvalidQualifiedName> {
        if dot_qualified {
            Self::from_dot_qualified(name)
        } else {
            Self::from_slash_qualified(name)
        }
    }

    /// Parses a binary name such as `java/util/Map$Entry`.
    /// # Errors
    /// - [`InvalidQualifiedName`] if the name is empty, contains an empty package segment,
    ///   or contains `.`, `;` or `[`.
    pub fn from_slash_qualified(name: &str) -> Result<Self, InvalidQualifiedName> {
        Self::parse(name, '/', '.')
    }

    /// Parses a dot-qualified name such as `java.util.Map$Entry`.
    /// # Errors
    /// - [`InvalidQualifiedName`] if the name is empty, contains an empty package segment,
    ///   or contains `/`, `;` or `[`.
    pub fn from_dot_qualified(name: &str) -> Result<Self, InvalidQualifiedName> {
        Self::parse(name, '.', '/')
    }

    fn parse(
        name: &str,
        separator: char,
        foreign_separator: char,
    ) -> Result<Self, InvalidQualifiedName> {
        let invalid = || InvalidQualifiedName(name.to_owned());
        if name.contains(foreign_separator) || name.contains(FORBIDDEN_CHARS) {
            return Err(invalid());
        }
        let mut segments: Vec<&str> = name.split(separator).collect();
        let class_name = segments.pop().ok_or_else(invalid)?;
        if class_name.is_empty() || segments.iter().any(|it| it.is_empty()) {
            return Err(invalid());
        }
        Ok(Self {
            package: PackageName {
                segments: segments.into_iter().map(str::to_owned).collect(),
            },
            short_name: ShortClassName {
                components: class_name
                    .split(NESTED_CLASS_SEPARATOR)
                    .map(str::to_owned)
                    .collect(),
            },
        })
    }

    /// Returns the package of the class.
    #[must_use]
    pub fn package(&self) -> &PackageName {
        &self.package
    }

    /// Returns the name of the class without the package.
    #[must_use]
    pub fn short_name(&self) -> &ShortClassName {
        &self.short_name
    }

    /// Returns the binary name, e.g. `java/util/Map$Entry`.
    #[must_use]
    pub fn to_slash_qualified_string(&self) -> String {
        self.qualified_with("/", &self.short_name.to_dollar_qualified_string())
    }

    /// Returns the name as written in Java source code, e.g. `java.util.Map.Entry`.
    #[must_use]
    pub fn to_dot_qualified_string(&self) -> String {
        self.qualified_with(".", &self.short_name.to_dot_qualified_string())
    }

    fn qualified_with(&self, separator: &str, class_name: &str) -> String {
        if self.package.is_default() {
            class_name.to_owned()
        } else {
            let package = self.package.segments.join(separator);
            format!("{package}{separator}{class_name}")
        }
    }

    /// Returns the class enclosing this one, if this class is nested.
    #[must_use]
    pub fn outer_class(&self) -> Option<Self> {
        let (_, outer) = self.short_name.components.split_last()?;
        if outer.concat().is_empty() {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            short_name: ShortClassName {
                components: outer.to_vec(),
            },
        })
    }

    /// Creates the name of a class nested in this one.
    /// # Errors
    /// - [`InvalidQualifiedName`] if `simple_name` contains a separator or a forbidden character.
    pub fn nested_class(&self, simple_name: &str) -> Result<Self, InvalidQualifiedName> {
        if simple_name.contains(['/', '.', NESTED_CLASS_SEPARATOR])
            || simple_name.contains(FORBIDDEN_CHARS)
        {
            return Err(InvalidQualifiedName(simple_name.to_owned()));
        }
        let mut nested = self.clone();
        nested.short_name.components.push(simple_name.to_owned());
        Ok(nested)
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot_qualified_string())
    }
}

impl FromStr for QualifiedName {
    type Err = InvalidQualifiedName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slash_qualified(s)
    }
}
