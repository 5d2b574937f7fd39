pub(crate) mod magnetic;
pub(crate) mod pointer;
pub(crate) mod trail;
