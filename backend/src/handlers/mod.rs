pub mod health;
pub mod timeline;
