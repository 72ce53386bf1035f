pub mod scheduler;
pub mod frame;
pub mod render;

pub use scheduler::{resolve_frame, PlaybackScheduler};
pub use frame::{ExpectationBounds, Frame, Playback, BOUNDS_PADDING};
pub use render::{render_animation, FrameRenderer};
