// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Team members.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{GroupId, Timestamp, UserId};

/// Permission tier label. Descriptive only; nothing enforces it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountRole {
    AccountAdmin,
    GroupAdmin,
    #[default]
    User,
    Family,
}

/// Presence indicator shown next to a member.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Presence {
    Online,
    Away,
    #[default]
    Offline,
}

/// A team member or pending invitee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Job title (Maintenance Supervisor, Technician, ...).
    pub role: String,
    pub account_role: AccountRole,
    pub status: Presence,
    /// Group memberships. Ids may no longer resolve.
    pub group_ids: BTreeSet<GroupId>,
    /// `false` while the invitation is still pending.
    pub accepted: bool,
    pub invited_at: Option<Timestamp>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            role: String::new(),
            account_role: AccountRole::default(),
            status: Presence::default(),
            group_ids: BTreeSet::new(),
            accepted: true,
            invited_at: None,
        }
    }

    /// Active members are those who accepted their invitation.
    pub fn is_active(&self) -> bool {
        self.accepted
    }

    pub fn in_group(&self, group_id: &GroupId) -> bool {
        self.group_ids.contains(group_id)
    }

    /// First word of the display name, used by the typing indicator.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Partial update for a [`User`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub role: Option<String>,
    pub account_role: Option<AccountRole>,
    pub status: Option<Presence>,
    pub group_ids: Option<BTreeSet<GroupId>>,
    pub accepted: Option<bool>,
    pub invited_at: Option<Option<Timestamp>>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(account_role) = self.account_role {
            user.account_role = account_role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
        if let Some(group_ids) = self.group_ids {
            user.group_ids = group_ids;
        }
        if let Some(accepted) = self.accepted {
            user.accepted = accepted;
        }
        if let Some(invited_at) = self.invited_at {
            user.invited_at = invited_at;
        }
    }
}
