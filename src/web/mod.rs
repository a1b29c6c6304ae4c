// Server-rendered HTML front-end: full pages, htmx fragments and Datastar event streams

pub mod access_log;
pub mod datastar;
pub mod handlers;
