pub mod config;
pub mod constants;
pub mod content;
pub mod gallery;
pub mod lang;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod scanner;

pub use gallery::MediaLibrary;
pub use lang::Lang;
pub use models::{MediaItem, ServiceSlug};
pub use pipeline::MediaMap;
