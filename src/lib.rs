// MIT/Apache2 License

mod error;

pub mod canvas;
pub mod color;
pub mod fill;
pub mod geometry;
pub mod intensity;
pub mod measure;
pub mod mode;
pub mod record;
pub mod view;

mod paths;

pub use canvas::*;
pub use color::*;
pub use error::*;
pub use fill::*;
pub use geometry::*;
pub use intensity::*;
pub use measure::*;
pub use mode::*;
pub use paths::*;
pub use record::*;
pub use view::*;
