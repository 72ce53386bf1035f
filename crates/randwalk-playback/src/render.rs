use crate::{Frame, Playback};
use tracing::debug;

/// External collaborator that turns frames into pixels.
///
/// The renderer owns all drawing state; the playback loop only hands it
/// data.
pub trait FrameRenderer {
    type Error;

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Feeds every logical frame of `playback` to `renderer`, then finishes it.
///
/// Returns the number of frames rendered.
pub fn render_animation<R: FrameRenderer>(
    playback: &Playback<'_>,
    renderer: &mut R,
) -> Result<usize, R::Error> {
    let mut rendered = 0;
    for frame in playback.frames() {
        renderer.render(&frame)?;
        rendered += 1;
    }
    renderer.finish()?;

    debug!(
        rendered,
        pause_threshold = playback.scheduler().pause_threshold(),
        "animation rendered"
    );
    Ok(rendered)
}
