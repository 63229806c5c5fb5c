mod create;

pub use create::CreatePoint;
