//! Branchline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Branchline layout
//! engine and its front-ends. It includes:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::NodeId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Nodes**: The timeline node model ([`node`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod node;
