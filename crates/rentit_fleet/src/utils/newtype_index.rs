/// Declares a `usize` position newtype for one of the registry's ordered collections,
/// indexable into `Vec<$t>` and `[$t]`.
#[macro_export]
macro_rules! define_index_newtype {
    ($name:ident, $t:ident) => {
        #[derive(
            serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
        )]
        pub struct $name(usize);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl $name {
            pub const fn new(position: usize) -> Self {
                Self(position)
            }

            pub const fn get(&self) -> usize {
                self.0
            }

            /// The position this index moves to once the entry at `removed` is taken out.
            pub(crate) fn shifted_after_removal(self, removed: $name) -> Option<Self> {
                match self.0.cmp(&removed.0) {
                    std::cmp::Ordering::Less => Some(self),
                    std::cmp::Ordering::Equal => None,
                    std::cmp::Ordering::Greater => Some(Self(self.0 - 1)),
                }
            }
        }

        impl From<usize> for $name {
            fn from(position: usize) -> Self {
                Self(position)
            }
        }

        impl std::ops::Index<$name> for Vec<$t> {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }

        impl std::ops::IndexMut<$name> for Vec<$t> {
            fn index_mut(&mut self, index: $name) -> &mut Self::Output {
                &mut self[index.0]
            }
        }

        impl std::ops::Index<$name> for [$t] {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }
    };
}
