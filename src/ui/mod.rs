/// User interaction helpers
///
/// - Swipe interpretation, independent of the event source (gesture.rs)
/// - Canvas overlay that feeds touch/drag coordinates into it (swipe.rs)

pub mod gesture;
pub mod swipe;
