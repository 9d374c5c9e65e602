pub(crate) mod blend;
pub(crate) mod coverage;
pub(crate) mod pixel;
