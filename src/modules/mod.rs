pub mod admin;
pub mod auth;
pub mod complaints;
pub mod courses;
pub mod instructors;
pub mod portfolios;
pub mod students;
pub mod users;
