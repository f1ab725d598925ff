//! Shared UI atoms used by the header.

pub(crate) mod icons;
