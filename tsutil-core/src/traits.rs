pub(crate) mod private_traits {
    pub trait TableIdPrivate {
        fn new_unchecked(value: crate::RawId) -> Self;
    }
}

/// An integer-like object referring to a table row.
/// Values can be `NULL`, indicating that
/// there is no row associated with the object.
///
/// This trait cannot be implemented for types not
/// defined in this crate:
///
/// ```compile_fail
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// struct X(i32);
/// impl tsutil_core::TableId for X {
///     const NULL: X = X(-1);
///     fn raw(&self) -> i32 {
///         self.0
///     }
/// }
/// ```
pub trait TableId:
    Copy + std::fmt::Debug + Eq + std::hash::Hash + private_traits::TableIdPrivate
{
    /// The `NULL` value, stored as `-1`.
    const NULL: Self;

    /// Return the underlying value
    fn raw(&self) -> crate::RawId;

    /// Return true if `self` is equal to the
    /// type's `NULL` value.
    fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Convert the sentinel representation into an [`Option`].
    ///
    /// ```
    /// use tsutil_core::{MutationId, TableId};
    ///
    /// assert_eq!(MutationId::NULL.to_option(), None);
    /// assert_eq!(MutationId::from(3).to_option(), Some(MutationId::from(3)));
    /// ```
    fn to_option(self) -> Option<Self> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    /// Convert an [`Option`] back into the sentinel representation.
    fn from_option(value: Option<Self>) -> Self {
        value.unwrap_or(Self::NULL)
    }

    /// The row index, or `None` for `NULL`.
    fn to_index(self) -> Option<usize> {
        usize::try_from(self.raw()).ok()
    }

    /// Create an id from a row index.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ConversionError`] if `index`
    /// does not fit in a [`crate::RawId`].
    fn from_index(index: usize) -> Result<Self, crate::Error> {
        let raw = crate::RawId::try_from(index).map_err(|_| {
            crate::Error::ConversionError(format!("could not convert {} to a row id", index))
        })?;
        Ok(Self::new_unchecked(raw))
    }
}
