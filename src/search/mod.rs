pub mod consts;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod requests;
pub mod responses;
pub mod services;
