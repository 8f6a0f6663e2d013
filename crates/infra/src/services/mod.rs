pub mod template;
pub mod webhook;
