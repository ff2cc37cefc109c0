#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod machine;
pub mod messages;
pub mod notify;
pub mod slice;
pub mod slices;
