//! Cart Handlers

pub(crate) mod add_item;
pub(crate) mod delete_line;
pub(crate) mod get;
pub(crate) mod remove_one;
pub(crate) mod set_quantity;
