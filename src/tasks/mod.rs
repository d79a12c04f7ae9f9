//! Background Tasks Module
//!
//! Contains the per-bucket background task.
//!
//! # Tasks
//! - Expiration sweeper: collects and reclaims expired entries on a fixed
//!   interval

mod sweeper;

pub use sweeper::spawn_sweeper;
