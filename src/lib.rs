pub mod game;
pub mod map_surface;
pub mod model;
