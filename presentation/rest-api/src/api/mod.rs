pub mod error;
pub mod product;
pub mod tags;
pub mod user;
pub mod web;
