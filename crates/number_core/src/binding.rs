//! The capability a field reports its value through.

/// External value slot owned by the surrounding form state.
///
/// A [`NumberField`](crate::NumberField) never owns its binding; hosts hand
/// one in for every transition and the field calls
/// [`notify_change`](FieldBinding::notify_change) exactly once per transition.
/// `None` is the empty marker, distinct from zero.
pub trait FieldBinding {
    /// The value the form state currently holds for this field.
    fn current_value(&self) -> Option<f64>;

    /// Record the field's latest value.
    fn notify_change(&mut self, value: Option<f64>);
}

/// A bare slot, handy for hosts without form state and for tests.
impl FieldBinding for Option<f64> {
    fn current_value(&self) -> Option<f64> {
        *self
    }

    fn notify_change(&mut self, value: Option<f64>) {
        *self = value;
    }
}

impl<B: FieldBinding + ?Sized> FieldBinding for &mut B {
    fn current_value(&self) -> Option<f64> {
        (**self).current_value()
    }

    fn notify_change(&mut self, value: Option<f64>) {
        (**self).notify_change(value);
    }
}
