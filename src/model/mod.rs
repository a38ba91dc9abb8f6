mod lat_lng;
mod marker_options;

pub use lat_lng::LatLng;
pub use marker_options::{IconResource, MarkerOptions};
