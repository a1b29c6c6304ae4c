// Read-only JSON API and the router that mounts every route

pub mod handlers;
pub mod models;
pub mod routes;
