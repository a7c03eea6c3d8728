//! RSX components composing the wagon wheel picker.

mod ghost_wedge;
mod wagon_wheel_picker;
mod wedge;
mod wheel_center;

pub use ghost_wedge::GhostWedge;
pub use wagon_wheel_picker::{WagonWheelPicker, WagonWheelPickerProps};
pub use wedge::Wedge;
pub use wheel_center::WheelCenter;
