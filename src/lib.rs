//! spo-auth - CA trust anchor installation and SharePoint Online token acquisition.

pub mod anchor;
pub mod cli;
pub mod credentials;
pub mod error;
pub mod identity;
pub mod platform;
pub mod token;
pub mod trust;
