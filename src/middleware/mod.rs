pub mod extract;
pub mod link;
