use std::ops::{Deref, DerefMut};

use lumen_render::{GraphicsContext, RectRenderer};

use crate::Overlay;

/// An open overlay frame.
///
/// Created by [`Overlay::begin`]. Dropping it restores the projection and
/// model-view transforms that were current before the frame began, closing
/// any text blocks left open first.
pub struct OverlayFrame<'a, G: GraphicsContext, R: RectRenderer> {
    overlay: &'a mut Overlay<G, R>,
}

impl<'a, G: GraphicsContext, R: RectRenderer> OverlayFrame<'a, G, R> {
    pub(crate) fn new(overlay: &'a mut Overlay<G, R>) -> Self {
        Self { overlay }
    }

    /// End the frame now. Same as dropping the guard.
    pub fn end(self) {}
}

impl<G: GraphicsContext, R: RectRenderer> Deref for OverlayFrame<'_, G, R> {
    type Target = Overlay<G, R>;

    fn deref(&self) -> &Self::Target {
        &*self.overlay
    }
}

impl<G: GraphicsContext, R: RectRenderer> DerefMut for OverlayFrame<'_, G, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.overlay
    }
}

impl<G: GraphicsContext, R: RectRenderer> Drop for OverlayFrame<'_, G, R> {
    fn drop(&mut self) {
        self.overlay.end_frame();
    }
}
