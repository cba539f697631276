//! s3drop-s3: network adapters for s3drop
//!
//! This crate provides the implementations of the ObjectStore trait (using
//! aws-sdk-s3) and the RemoteSource trait (using reqwest). It is the only
//! crate that talks to the network.

pub mod client;
pub mod http;

pub use client::S3Client;
pub use http::HttpSource;
