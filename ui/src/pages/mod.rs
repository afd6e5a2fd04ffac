//! Pages module for the application.
//!
//! One page per `Route` value:
//! - `home_page`: landing copy and the entry point to the generator
//! - `generator_page`: the form, AI panel and preview
//! - `about_page`: static description of the service

mod about_page;
mod generator_page;
mod home_page;

pub use about_page::about_page;
pub use generator_page::generator_page;
pub use home_page::home_page;
