use core::num::NonZeroU32;

/// An optional reference to a node slot.
///
/// Slot `i` is stored as `i + 1`, so the empty link is the zero niche and
/// `Link` is the same size as a `u32`.

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Link(Option<NonZeroU32>);

impl Link {
  pub(crate) const NONE: Self = Self(None);

  /// The link to slot `slot`, or `None` if `slot` does not fit in the index
  /// space.

  #[inline(always)]
  pub(crate) fn to_slot(slot: usize) -> Option<Self> {
    let n = u32::try_from(slot).ok()?.checked_add(1)?;
    Some(Self(NonZeroU32::new(n)))
  }

  #[inline(always)]
  pub(crate) fn is_none(self) -> bool {
    self.0.is_none()
  }

  #[inline(always)]
  pub(crate) fn slot(self) -> Option<usize> {
    // NB: `u32` to `usize` is lossless on every target `alloc` supports.

    self.0.map(|n| (n.get() - 1) as usize)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_link_round_trip() {
    assert!(Link::NONE.is_none());
    assert!(Link::NONE.slot().is_none());
    assert!(Link::to_slot(0).and_then(Link::slot) == Some(0));
    assert!(Link::to_slot(41).and_then(Link::slot) == Some(41));
    assert!(Link::to_slot(u32::MAX as usize - 1).is_some());
    assert!(Link::to_slot(u32::MAX as usize).is_none());
    assert!(size_of::<Link>() == size_of::<u32>());
  }
}
