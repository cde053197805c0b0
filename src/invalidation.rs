use bitflags::bitflags;

bitflags! {
    /// Flags indicating what a gallery input changed
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Section geometry must be recomputed (height, index or width moved)
        const NEEDS_LAYOUT = 0b01;
        /// Output must be repainted
        const NEEDS_PAINT  = 0b10;
    }
}

impl ChangeFlags {
    /// Flags for a change that moves section geometry
    pub const fn relayout() -> Self {
        ChangeFlags::NEEDS_LAYOUT.union(ChangeFlags::NEEDS_PAINT)
    }
}
