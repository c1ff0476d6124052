/// Expands to a doc string linking to a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal $(, $section:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $chapter,
            $(".", $section,)*
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter,
            ".html#jvms-",
            $chapter,
            $(".", $section,)*
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;

/// Implements equality, ordering and hashing in terms of the canonical descriptor string,
/// which each listed type exposes through an inherent `descriptor(&self) -> &str`.
macro_rules! descriptor_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.descriptor() == other.descriptor()
                }
            }

            impl Eq for $ty {}

            impl PartialOrd for $ty {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $ty {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.descriptor().cmp(other.descriptor())
                }
            }

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    self.descriptor().hash(state);
                }
            }
        )+
    };
}

pub(crate) use descriptor_identity;
