mod dropzone;
mod item_grid;
mod map_picker;

pub(crate) mod icons;

pub use dropzone::Dropzone;
pub use item_grid::ItemGrid;
pub use map_picker::MapPicker;
