mod config;
mod errors;
