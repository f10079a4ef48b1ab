pub(crate) mod channel;
pub(crate) mod ease;
pub(crate) mod mapper;
pub mod presets;
pub(crate) mod table;
