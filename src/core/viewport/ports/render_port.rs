use crate::core::actions::render::render::RenderRequest;

/// Where the viewport sends each new render request.
///
/// Implementations must not block on the render itself; a newer request is
/// free to supersede an older one.
pub trait RenderPort {
    /// Returns the generation assigned to `request`.
    fn submit(&self, request: RenderRequest) -> u64;
}
