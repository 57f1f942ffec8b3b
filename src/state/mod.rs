//! Shared client-side state containers.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`, `account`) so consumers can
//! depend on small focused models. Each container is a Clone handle around
//! `Arc<RwLock<_>>`; transitions are applied atomically under the write
//! guard, and the guard is never held across an adapter await, so racing
//! dispatches of one operation settle last-applied-wins.

pub mod account;
pub mod auth;
pub mod lifecycle;
pub mod projects;
