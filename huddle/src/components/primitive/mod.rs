pub(crate) mod content_surface;
pub(crate) mod room_entry;
pub(crate) mod space_cell;
