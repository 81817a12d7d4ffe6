/// Edge weight type
pub type Weight = u64;

/// Sum of edge weights along a path. Wide enough that no path over at most
/// `u32::MAX` edges of `Weight::MAX` can overflow.
pub type Distance = u128;
