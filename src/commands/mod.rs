//! Subcommand handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File       | Invocation              | Description                          |
//! |------------|-------------------------|--------------------------------------|
//! | `swap.rs`  | `kubeswap swap <file>`  | Back up the active config, replace it |
//! | `list.rs`  | `kubeswap list`         | Print existing backup names          |
//!
//! Handlers do no terminal output of their own; they return data and leave
//! rendering to [`crate::ui`].

pub mod list;
pub mod swap;
