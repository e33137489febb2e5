//! Terminal showdown viewer: deals a five-card hand to each seat and shows who wins.

pub mod app;
pub mod controller;
mod ui;
