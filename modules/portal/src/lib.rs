//! Community portal for the Rampage faction.
//!
//! The portal is a set of CRUD surfaces over a client-side key-value store:
//! a news feed, a marketplace and rental board, a user directory with
//! private notes, and a profile page. There is no server and no network;
//! all authority is the role carried by the authenticated [`contract::model::User`].
//!
//! Layering follows the usual split:
//! - [`contract`] — models and errors safe for embedders;
//! - [`domain`] — the auth controller, authorization policy, and feature
//!   services;
//! - [`infra`] — store key layout and the local image-embedding capability;
//! - [`shell`] — the session state machine an embedding UI drives.

pub mod clock;
pub mod config;
pub mod contract;
pub mod domain;
pub mod infra;
pub mod shell;
