pub(crate) mod atoms;
pub(crate) mod header;
pub(crate) mod nav_link;
