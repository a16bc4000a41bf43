pub(crate) mod attribute;
pub(crate) mod ease;
pub(crate) mod value;
