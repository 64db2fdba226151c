//! Cross-crate tests for the hospital workspace.

mod hospital;
