//! Identifier for registered form fields.

/// Opaque handle returned by [`FormController::register`](crate::FormController::register).
///
/// Ids are dense and only meaningful for the controller that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    #[inline]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the underlying raw value, e.g. to salt UI ids.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let id = FieldId::from_index(7).unwrap();
        assert_eq!(id.index(), 7);
        assert_eq!(id.as_raw(), 7);
    }

    #[test]
    fn ids_order_by_registration() {
        assert!(FieldId::from_index(0) < FieldId::from_index(1));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn index_past_u32_is_rejected() {
        assert!(FieldId::from_index(u32::MAX as usize).is_some());
        assert_eq!(FieldId::from_index(u32::MAX as usize + 1), None);
    }
}
