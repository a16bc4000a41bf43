pub(crate) mod color;
pub(crate) mod key;
pub(crate) mod styling;
pub(crate) mod transform;
