//! Conveniences layered over [`Bindable`](crate::Bindable)

pub mod wait;

pub use wait::*;
