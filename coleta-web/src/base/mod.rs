pub(crate) mod location;
pub(crate) mod registration;
