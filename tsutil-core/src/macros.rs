#![macro_use]

macro_rules! impl_table_id {
    ($idtype: ident) => {
        impl $idtype {
            /// NULL value for the type
            pub const NULL: $idtype = Self(-1);

            /// Create a new id.
            ///
            /// # Errors
            ///
            /// [`crate::Error::InvalidId`] if `value` is less than `-1`.
            pub fn new(value: $crate::RawId) -> Result<Self, $crate::Error> {
                if value < -1 {
                    Err($crate::Error::InvalidId(i64::from(value)))
                } else {
                    Ok(Self(value))
                }
            }
        }

        impl $crate::traits::private_traits::TableIdPrivate for $idtype {
            fn new_unchecked(value: $crate::RawId) -> Self {
                Self(value)
            }
        }

        impl $crate::traits::TableId for $idtype {
            const NULL: $idtype = Self(-1);

            fn raw(&self) -> $crate::RawId {
                self.0
            }
        }

        impl From<$crate::RawId> for $idtype {
            fn from(value: $crate::RawId) -> Self {
                if value >= 0 {
                    Self(value)
                } else {
                    Self::NULL
                }
            }
        }

        impl std::fmt::Display for $idtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $idtype {
            type Error = $crate::Error;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                <Self as $crate::traits::TableId>::from_index(value)
            }
        }

        impl From<$idtype> for $crate::RawId {
            fn from(item: $idtype) -> Self {
                item.0
            }
        }

        impl PartialEq<$crate::RawId> for $idtype {
            fn eq(&self, other: &$crate::RawId) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$idtype> for $crate::RawId {
            fn eq(&self, other: &$idtype) -> bool {
                *self == other.0
            }
        }

        impl PartialOrd<$crate::RawId> for $idtype {
            fn partial_cmp(&self, other: &$crate::RawId) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<$idtype> for $crate::RawId {
            fn partial_cmp(&self, other: &$idtype) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }
    };
}
