pub mod label;
pub mod layout;
pub mod parsers;
pub mod projection;
pub mod svg;
pub mod thumbnail;

pub use label::break_place_label;
pub use layout::build_day_grid;
pub use projection::{ProjectionFrame, fit_thumbnail, fit_tile_zoom};
pub use thumbnail::{POINT_RADIUS, fit_route, render_route_thumbnail};
