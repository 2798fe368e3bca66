pub mod day;
pub mod draw;
pub mod grid;
pub mod mode;
pub mod palette;
pub mod route;
pub mod types;

pub use day::{CellValue, DayCell, DayRow, TimeAlign, TripDay};
pub use draw::DrawInstruction;
pub use grid::{CellContent, GridCell, GridModel, GridRow};
pub use mode::ActivityMode;
pub use palette::{ModeStyle, Palette};
pub use route::{GeoPoint, Route, RouteGroup};
pub use types::{Color, Point};
