//! Redirects requests for Open Graph images to time-limited signed S3 URLs

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Object storage access for images
pub mod image_storage;

/// HTTP routes
pub mod routes;

/// Router assembly and server startup
pub mod server;

/// Configuration, errors and responses shared by the handlers
pub mod types;
