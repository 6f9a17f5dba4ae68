pub mod ai;
pub mod applications;
pub mod auth;
pub mod blogs;
pub mod contact;
pub mod health;
pub mod jobs;
pub mod pages;
pub mod profiles;
