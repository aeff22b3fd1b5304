/// Opaque handle to a texture owned by the render layer.
///
/// The core never loads or samples textures; it only forwards the handle
/// with each draw so the sink can bind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}
