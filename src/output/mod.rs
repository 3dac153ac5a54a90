pub mod writer;

pub use writer::{category_file_name, category_key, render, write_all, CategoryFile, OutputLayout};
