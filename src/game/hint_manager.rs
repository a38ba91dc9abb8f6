use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

use crate::game::bearing::initial_bearing;
use crate::map_surface::MapSurface;
use crate::model::{IconResource, LatLng, MarkerOptions};

/// Arrow glyph asset together with the rotation correction that aligns its
/// drawn orientation with true bearing. The stock arrow image points
/// diagonally up-right, hence the default -45 degree offset; a replacement
/// asset drawn differently needs its own offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowIcon {
    pub resource: IconResource,
    pub rotation_offset: f32,
}

impl ArrowIcon {
    pub const DEFAULT_ROTATION_OFFSET: f32 = -45.0;

    pub fn new(resource: IconResource) -> Self {
        Self {
            resource,
            rotation_offset: Self::DEFAULT_ROTATION_OFFSET,
        }
    }

    pub fn with_rotation_offset(mut self, degrees: f32) -> Self {
        self.rotation_offset = degrees;
        self
    }
}

/// Tracks the hints remaining in a quiz session and draws an arrow overlay on
/// the map pointing from the player's marker toward the target restaurant.
///
/// The map belongs to the hosting screen and is shared with it; this manager
/// only issues place and remove requests for the single arrow overlay it
/// tracks. Everything here is synchronous and single-threaded, driven by the
/// caller on whatever thread owns the map.
pub struct HintManager<M: MapSurface> {
    map: Rc<RefCell<M>>,
    total_hints: u32,
    hints_remaining: u32,
    arrow: Option<M::Overlay>,
    current_hint_location: Option<LatLng>,
    icon: ArrowIcon,
}

impl<M: MapSurface> HintManager<M> {
    pub fn new(map: &Rc<RefCell<M>>, total_hints: u32, icon: ArrowIcon) -> Self {
        Self {
            map: Rc::clone(map),
            total_hints,
            hints_remaining: total_hints,
            arrow: None,
            current_hint_location: None,
            icon,
        }
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    /// Anchor position of the most recently placed arrow, or `None` if no
    /// arrow has been placed this session.
    pub fn current_hint_location(&self) -> Option<LatLng> {
        self.current_hint_location
    }

    /// Use up a hint if any remain. Exhaustion is a normal outcome the caller
    /// branches on (say, to disable a hint button), not an error.
    pub fn use_hint(&mut self) -> bool {
        if self.hints_remaining > 0 {
            self.hints_remaining -= 1;
            trace!(target: "hint_manager", "Hint used, {} remaining", self.hints_remaining);
            return true;
        }
        trace!(target: "hint_manager", "Hint requested but none remain");
        false
    }

    /// Places an arrow overlay at `marker_position` pointing toward
    /// `target_position`: flat against the map, anchored at the icon's
    /// bottom-left corner, rotated to the bearing plus the icon's offset.
    ///
    /// Any previously tracked overlay handle is overwritten without being
    /// removed from the map, so back-to-back calls leave stale arrows visible.
    pub fn add_arrow(&mut self, marker_position: LatLng, target_position: LatLng) {
        let rotation =
            initial_bearing(marker_position, target_position) + self.icon.rotation_offset;
        let options = MarkerOptions::new(marker_position)
            .anchor(0.0, 1.0)
            .rotation(rotation)
            .icon(self.icon.resource.clone())
            .flat(true);

        trace!(target: "hint_manager", "Placing arrow at {} rotated to {}", marker_position, rotation);
        self.arrow = Some(self.map.borrow_mut().place_overlay(&options));
        self.current_hint_location = Some(marker_position);
    }

    /// Removes the tracked arrow overlay from the map, if there is one. Safe
    /// to call repeatedly.
    pub fn remove_arrow(&mut self) {
        if let Some(arrow) = self.arrow.take() {
            trace!(target: "hint_manager", "Removing arrow overlay");
            self.map.borrow_mut().remove_overlay(arrow);
        }
    }

    /// Resets the session: drops the tracked overlay handle (without removing
    /// the visual overlay) and restores the full hint budget.
    pub fn restart(&mut self) {
        self.arrow = None;
        self.hints_remaining = self.total_hints;
    }
}
