pub mod parts;
pub mod urls;
