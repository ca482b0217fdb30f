// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity model for every collection held by the store.

pub mod asset;
pub mod chat;
pub mod group;
pub mod notification;
pub mod task;
pub mod user;

pub use asset::{
    Asset, AssetDocument, AssetPatch, AssetStatus, Criticality, DocumentKind, FileType,
    MaintenanceKind, MaintenanceRecord,
};
pub use chat::{
    ChannelKind, ChannelPatch, ChatChannel, ChatMessage, MessagePatch, NewSystemMessage,
    Reaction, ReplySnapshot, SystemMessage, SystemMessageKind,
};
pub use group::{Area, AreaPatch, Group, GroupPatch, GroupSnapshot, StatusCounts};
pub use notification::{AppNotification, NewNotification};
pub use task::{
    AssetLink, Comment, NewPlannedTask, NewTask, PlannedTask, PlannedTaskPatch, Priority,
    Recurrence, Task, TaskPatch, TaskStatus,
};
pub use user::{AccountRole, Presence, User, UserPatch};
