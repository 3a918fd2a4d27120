use std::num::NonZeroU32;

/// Opaque handle to a texture owned by the graphics backend.
///
/// Handle `0` means "no texture" at the API level; here that is spelled
/// `Option::<TextureHandle>::None`, so a live handle is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(NonZeroU32);

impl TextureHandle {
    /// Wrap a raw backend id. Returns `None` for `0`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

/// Raw id for an optional handle, with `0` for none.
pub fn raw_handle(texture: Option<TextureHandle>) -> u32 {
    texture.map_or(0, TextureHandle::raw)
}
