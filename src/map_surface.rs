use crate::model::MarkerOptions;

/// Capability for placing and removing marker overlays on a map owned by the
/// hosting screen. The hint manager depends on these two operations only; it
/// never touches the camera, zoom, or anything else the map can do.
pub trait MapSurface {
    /// Handle to a placed overlay. Removal consumes the handle, so a given
    /// overlay cannot be removed twice.
    type Overlay;

    fn place_overlay(&mut self, options: &MarkerOptions) -> Self::Overlay;

    fn remove_overlay(&mut self, overlay: Self::Overlay);
}
