pub(crate) mod insets;
pub(crate) mod window;
