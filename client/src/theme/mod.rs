//! Theme preference persistence and dark-mode display control.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`controller`] owns the agreement between the persisted preference and
//! the visible theme, behind two narrow traits. [`browser`] supplies the
//! real `localStorage` and `<body>` class backends; [`memory`] supplies
//! in-memory stand-ins for tests.

pub mod browser;
pub mod controller;
pub mod memory;
