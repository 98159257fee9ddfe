//! Resource families of the admin API.
//!
//! Each module adds an `impl ThreeScaleClient` block with one method per
//! remote action. They only differ in path template, verb, payload, and
//! expected status; the request pipeline lives in [`crate::client`].

mod account;
mod active_doc;
mod application;
mod backend;
mod plan;
mod policy_registry;
mod product;
mod proxy;
mod tenant;
mod user;
