pub(crate) mod parse;
pub(crate) mod path;
pub(crate) mod segment;
