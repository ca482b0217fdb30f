// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory workspace store for the NEO facilities console.
//!
//! [`Store`] owns every collection and is the only place they change.
//! [`StoreHandle`] shares one store between threads and tasks,
//! [`ChannelView`] renders a channel the way one viewing session sees it,
//! and [`TypingSimulator`] drives the "someone is typing" indicator.

pub mod derive;
pub mod handle;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod typing;
pub mod view;

pub use handle::StoreHandle;
pub use seed::demo_store;
pub use snapshot::StoreSnapshot;
pub use store::Store;
pub use typing::{TypingIndicator, TypingSimulator};
pub use view::ChannelView;
