// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push sources that feed pipelines from the imperative world.
//!
//! [`Var`] is an observable slot in the style of UI-toolkit properties; the
//! `*Source` types are bare injection points for code that has a value in
//! hand and wants it delivered downstream right now.

pub mod change_source;
pub mod event_source;
pub mod signal_source;
pub mod var;

pub use change_source::ChangeSource;
pub use event_source::EventSource;
pub use signal_source::SignalSource;
pub use var::{Change, Observable, Var};
