/// Result of pulling once from a [`Source`](crate::Source).
///
/// A pull either produces an element, reports clean exhaustion, or reports
/// exhaustion together with a trailing payload. The trailing payload is the
/// "return value" of a sequence: it accompanies the end-of-sequence signal
/// and is *not* an element. [`map`](crate::map) transforms it,
/// [`nth_value`](crate::nth_value) can read it, and every other operator
/// treats it as plain exhaustion.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Pull;
///
/// let pulled: Pull<i32> = Pull::Value(42);
/// assert!(pulled.is_value());
/// assert_eq!(pulled.map(|n| n * 2), Pull::Value(84));
///
/// let end: Pull<i32> = Pull::Done;
/// assert!(end.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// One element of the sequence.
    Value(T),
    /// The sequence is exhausted.
    Done,
    /// The sequence is exhausted and carries a trailing payload.
    DoneWith(T),
}

impl<T> Pull<T> {
    /// Returns `true` if the pull produced an element.
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert!(Pull::Value(1).is_value());
    /// assert!(!Pull::<i32>::Done.is_value());
    /// assert!(!Pull::DoneWith(1).is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Pull::Value(_))
    }

    /// Returns `true` if the sequence reported exhaustion, with or without a
    /// trailing payload.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Done | Pull::DoneWith(_))
    }

    /// The carried value, whether element or trailing payload.
    ///
    /// This is the analogue of reading a raw pull result's value field
    /// without consulting the exhaustion flag.
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(1).value(), Some(1));
    /// assert_eq!(Pull::DoneWith(2).value(), Some(2));
    /// assert_eq!(Pull::<i32>::Done.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Pull::Value(v) | Pull::DoneWith(v) => Some(v),
            Pull::Done => None,
        }
    }

    /// The element, if the pull produced one.
    ///
    /// A trailing payload is not an element, so `DoneWith` maps to `None`.
    /// Operators that iterate over a source's elements are built on this.
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(1).element(), Some(1));
    /// assert_eq!(Pull::DoneWith(2).element(), None);
    /// ```
    #[inline]
    pub fn element(self) -> Option<T> {
        match self {
            Pull::Value(v) => Some(v),
            Pull::Done | Pull::DoneWith(_) => None,
        }
    }

    /// Transforms the carried value, preserving the pull state.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Value(v) => Pull::Value(f(v)),
            Pull::Done => Pull::Done,
            Pull::DoneWith(v) => Pull::DoneWith(f(v)),
        }
    }

    /// Returns the element, panicking on exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `Done` or `DoneWith`.
    #[inline]
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Pull::Value(v) => v,
            Pull::Done => panic!("called `Pull::unwrap_value` on `Done`"),
            Pull::DoneWith(_) => panic!("called `Pull::unwrap_value` on `DoneWith`"),
        }
    }
}

/// `Some` becomes an element, `None` becomes clean exhaustion.
impl<T> From<Option<T>> for Pull<T> {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Pull::Value(v),
            None => Pull::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_vs_element() {
        assert_eq!(Pull::Value(7).value(), Some(7));
        assert_eq!(Pull::Value(7).element(), Some(7));
        assert_eq!(Pull::DoneWith(7).value(), Some(7));
        assert_eq!(Pull::DoneWith(7).element(), None);
        assert_eq!(Pull::<i32>::Done.value(), None);
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(Pull::Value(2).map(|n| n + 1), Pull::Value(3));
        assert_eq!(Pull::DoneWith(2).map(|n| n + 1), Pull::DoneWith(3));
        assert_eq!(Pull::<i32>::Done.map(|n| n + 1), Pull::Done);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Pull::from(Some(1)), Pull::Value(1));
        assert_eq!(Pull::<i32>::from(None), Pull::Done);
    }

    #[test]
    #[should_panic(expected = "on `Done`")]
    fn test_unwrap_value_panics_on_done() {
        Pull::<i32>::Done.unwrap_value();
    }
}
