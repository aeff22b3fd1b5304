use std::fmt;
use std::rc::Rc;

/// A value that is either fixed or computed from the frame state `S`.
///
/// Materials, transform parameters, light settings and toggles are all
/// authored as `DynamicValue`s, so a call site never needs to know whether
/// the value is animated. Computed values are re-evaluated on every read
/// (no caching) and receive the state by shared reference only: they can
/// read animated cells but never write them.
///
/// Clones share the underlying closure.
///
/// ```rust
/// use bulkhead::core::DynamicValue;
///
/// struct Params { door_angle: f32 }
///
/// let fixed: DynamicValue<f32, Params> = 45.0.into();
/// let door = DynamicValue::computed(|p: &Params| -p.door_angle);
///
/// let params = Params { door_angle: 90.0 };
/// assert_eq!(fixed.evaluate(&params), 45.0);
/// assert_eq!(door.evaluate(&params), -90.0);
/// ```
pub enum DynamicValue<T, S> {
    Literal(T),
    Computed(Rc<dyn Fn(&S) -> T>),
}

impl<T, S> DynamicValue<T, S> {
    pub fn literal(value: T) -> Self {
        DynamicValue::Literal(value)
    }

    pub fn computed(producer: impl Fn(&S) -> T + 'static) -> Self {
        DynamicValue::Computed(Rc::new(producer))
    }

    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, DynamicValue::Literal(_))
    }
}

impl<T: Clone, S> DynamicValue<T, S> {
    /// Reads the current value.
    #[inline]
    pub fn evaluate(&self, state: &S) -> T {
        match self {
            DynamicValue::Literal(value) => value.clone(),
            DynamicValue::Computed(producer) => producer(state),
        }
    }
}

impl<T, S> From<T> for DynamicValue<T, S> {
    fn from(value: T) -> Self {
        DynamicValue::Literal(value)
    }
}

impl<T: Default, S> Default for DynamicValue<T, S> {
    fn default() -> Self {
        DynamicValue::Literal(T::default())
    }
}

impl<T: Clone, S> Clone for DynamicValue<T, S> {
    fn clone(&self) -> Self {
        match self {
            DynamicValue::Literal(value) => DynamicValue::Literal(value.clone()),
            DynamicValue::Computed(producer) => DynamicValue::Computed(Rc::clone(producer)),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for DynamicValue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DynamicValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
