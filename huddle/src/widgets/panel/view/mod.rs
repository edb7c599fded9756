pub(crate) mod rooms_list;
pub(crate) mod spaces_rail;
