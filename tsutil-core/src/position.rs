/// A position/coordinate within a genome
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Position(f64);

impl Position {
    /// Create a new Position
    ///
    /// # Returns
    ///
    /// * `Some` if `position` is finite and non-negative
    /// * `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// let p = tsutil_core::Position::new(10.).unwrap();
    /// assert_eq!(p, 10.); // can be compared to f64
    /// # assert!(p > 0.);
    /// let p2 = tsutil_core::Position::new(11.).unwrap();
    /// assert!(p < p2);
    /// assert!(tsutil_core::Position::new(-1.).is_none());
    /// assert!(tsutil_core::Position::new(f64::NAN).is_none());
    /// ```
    pub fn new(position: f64) -> Option<Self> {
        if position.is_finite() && position >= 0.0 {
            Some(Self(position))
        } else {
            None
        }
    }

    /// Return the underlying value
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl PartialEq<f64> for Position {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Position {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}
