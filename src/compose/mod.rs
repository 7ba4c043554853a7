pub(crate) mod chrome;
pub(crate) mod content;
pub(crate) mod controls;
