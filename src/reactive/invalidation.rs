// ============================================================================
// Frame Invalidation
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what kind of update the next frame needs
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Layout needs recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

/// Pending frame work for one widget tree.
///
/// Each tree owns its own flags; clones share them. A fresh handle starts
/// with layout and paint pending, since nothing has been placed or drawn yet.
#[derive(Clone, Debug)]
pub struct Invalidation {
    flags: Rc<Cell<ChangeFlags>>,
}

impl Invalidation {
    pub fn new() -> Self {
        Self {
            flags: Rc::new(Cell::new(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT)),
        }
    }

    fn request(&self, flags: ChangeFlags) {
        self.flags.set(self.flags.get() | flags);
    }

    /// Request that the next frame be repainted
    pub fn request_paint(&self) {
        self.request(ChangeFlags::NEEDS_PAINT);
    }

    /// Drop a pending layout request, e.g. after laying out eagerly
    pub fn clear_layout(&self) {
        self.flags.set(self.flags.get() - ChangeFlags::NEEDS_LAYOUT);
    }

    /// Take the pending flags, leaving none behind
    pub fn take(&self) -> ChangeFlags {
        self.flags.replace(ChangeFlags::empty())
    }
}

impl Default for Invalidation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tree_needs_layout_and_paint() {
        let invalidation = Invalidation::new();
        assert_eq!(
            invalidation.take(),
            ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT
        );
        assert!(invalidation.take().is_empty());
    }

    #[test]
    fn test_take_clears_flags() {
        let invalidation = Invalidation::new();
        invalidation.clear_layout();
        assert_eq!(invalidation.take(), ChangeFlags::NEEDS_PAINT);

        invalidation.request_paint();
        assert_eq!(invalidation.take(), ChangeFlags::NEEDS_PAINT);
        assert!(invalidation.take().is_empty());
    }

    #[test]
    fn test_trees_do_not_share_flags() {
        let a = Invalidation::new();
        let b = Invalidation::new();
        a.take();
        b.take();

        a.request_paint();
        assert!(b.take().is_empty());
        assert_eq!(a.clone().take(), ChangeFlags::NEEDS_PAINT);
        assert!(a.take().is_empty());
    }
}
