mod arrow_left_icon;

pub use arrow_left_icon::ArrowLeftIcon;
