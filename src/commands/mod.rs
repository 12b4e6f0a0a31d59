pub mod index;
pub mod links;
