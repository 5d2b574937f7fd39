pub(crate) mod binding;
pub(crate) mod driver;
pub(crate) mod value;
