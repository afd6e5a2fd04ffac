//! Shared utilities for the QuickQR workspace.

pub mod version_info;
