pub(crate) mod keyboard;
pub(crate) mod panel;
pub(crate) mod reveal;
pub(crate) mod window;
