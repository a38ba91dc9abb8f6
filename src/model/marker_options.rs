use serde::{Deserialize, Serialize};

use crate::model::LatLng;

/// Resource-path reference to an image asset owned by the hosting screen.
/// This crate never loads the asset, it only passes the reference along when
/// placing an overlay.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IconResource(String);

impl IconResource {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Placement request for a marker overlay: where it goes, how it is rotated,
/// which glyph it shows, and whether it lies flat against the map surface.
///
/// `anchor` is `(u, v)` in `[0, 1]²` over the icon image, `(0.0, 0.0)` being
/// the top-left corner. `rotation` is degrees clockwise about the anchor.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub anchor: (f32, f32),
    pub rotation: f32,
    pub icon: Option<IconResource>,
    pub flat: bool,
}

impl MarkerOptions {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            anchor: (0.5, 1.0),
            rotation: 0.0,
            icon: None,
            flat: false,
        }
    }

    pub fn anchor(mut self, u: f32, v: f32) -> Self {
        self.anchor = (u, v);
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn icon(mut self, icon: IconResource) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }
}
