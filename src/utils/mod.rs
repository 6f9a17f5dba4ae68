pub mod backend;
pub mod email;
pub mod html;
