// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod modes;
pub mod routeros;
pub mod routes;
pub mod status;
pub mod transport;
pub mod version;
pub mod vpn;
pub mod worker;
