//! Flutter bridge surface for the Mindly core.

pub mod api;
