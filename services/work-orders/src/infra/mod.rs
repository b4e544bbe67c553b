pub mod db;
pub mod photo;
pub mod renderer;
