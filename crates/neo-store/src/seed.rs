// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo dataset: a small resort facilities team.
//!
//! Timestamps are placed relative to the store clock's "now" so that the
//! Today / Yesterday labels always have something to show.

use std::sync::Arc;

use chrono::{Duration, NaiveTime};
use neo_core::model::task::{TAG_CATEGORY, TAG_EQUIPMENT, TAG_LOCATION};
use neo_core::model::{
    AccountRole, Area, Asset, AssetDocument, AssetLink, ChannelPatch, ChatChannel, ChatMessage,
    Criticality, DocumentKind, FileType, Group, MaintenanceKind, MaintenanceRecord,
    NewNotification, NewPlannedTask, NewSystemMessage, NewTask, Presence, Priority, Reaction, Recurrence,
    SystemMessageKind, TaskStatus, User,
};
use neo_core::{Clock, Timestamp, UserId};
use tracing::info;

use crate::store::Store;

/// Id of the demo account admin, the usual signed-in user.
pub const DEMO_USER_ID: &str = "u1";

/// Timestamp `days_ago` days before `now`, at `hour:minute` UTC.
fn day_at(now: Timestamp, days_ago: i64, hour: i64, minute: i64) -> Timestamp {
    ((now.date_naive() - Duration::days(days_ago)).and_time(NaiveTime::MIN)
        + Duration::hours(hour)
        + Duration::minutes(minute))
    .and_utc()
}

fn user(
    id: &str,
    name: &str,
    role: &str,
    account_role: AccountRole,
    status: Presence,
    groups: &[&str],
) -> User {
    let email = format!(
        "{}@neo.app",
        name.split_whitespace().next().unwrap_or(id).to_lowercase()
    );
    let mut user = User::new(id, name, email);
    user.role = role.to_string();
    user.account_role = account_role;
    user.status = status;
    user.group_ids = groups.iter().map(|&g| g.into()).collect();
    user
}

fn group(id: &str, name: &str, icon: &str, color: &str, description: &str) -> Group {
    let mut group = Group::new(id, name, color);
    group.icon = icon.to_string();
    group.description = description.to_string();
    group.notifications_on = false;
    group.member_ids = ["u1", "u2", "u3", "u4", "u5", "u6", "u7", "u8"]
        .into_iter()
        .map(Into::into)
        .collect();
    group
}

fn channel(id: &str, name: &str, icon: &str) -> ChatChannel {
    let mut channel = ChatChannel::group(id, name);
    channel.icon = Some(icon.to_string());
    channel
}

fn reaction(emoji: &str, count: u32, reacted_by_me: bool) -> Reaction {
    Reaction {
        emoji: emoji.to_string(),
        count,
        reacted_by_me,
    }
}

/// Build the demo store on `clock`, signed in as `current_user`.
pub fn demo_store(current_user: impl Into<UserId>, clock: Arc<dyn Clock>) -> Store {
    let now = clock.now();
    let d = |days_ago, hour, minute| day_at(now, days_ago, hour, minute);
    let mut store = Store::new(current_user).with_clock(clock);

    // --- Directory ---------------------------------------------------------

    for u in [
        user("u1", "A. Alturki", "Admin", AccountRole::AccountAdmin, Presence::Online, &["g1", "g3", "g5", "g7", "g10"]),
        user("u2", "Mohammed Al-Rashid", "Maintenance Supervisor", AccountRole::GroupAdmin, Presence::Online, &["g1", "g7", "g9"]),
        user("u3", "Ahmed Hassan", "Technician", AccountRole::User, Presence::Away, &["g3", "g7"]),
        user("u4", "Khalid Al-Mansouri", "Technician", AccountRole::User, Presence::Online, &["g1", "g3"]),
        user("u5", "Fatima Al-Zahra", "Housekeeping Manager", AccountRole::GroupAdmin, Presence::Online, &["g16"]),
        user("u6", "Omar Suleiman", "Landscape Specialist", AccountRole::User, Presence::Offline, &["g4"]),
        user("u7", "Sara Al-Khatib", "Security Officer", AccountRole::User, Presence::Online, &["g10", "g17"]),
        user("u8", "Rami Al-Turki", "Operations Manager", AccountRole::GroupAdmin, Presence::Away, &["g5", "g10"]),
    ] {
        store.add_user(u);
    }
    let mut invited = user("u9", "David Lee", "Maintenance Technician", AccountRole::User, Presence::Offline, &["g1"]);
    invited.email = "david.lee@example.com".to_string();
    invited.accepted = false;
    invited.invited_at = Some(d(1, 9, 0));
    store.add_user(invited);

    for g in [
        group("g1", "Daily Maintenance", "🔧", "#3b82f6", "Log daily active work"),
        group("g2", "Carpenter", "🪚", "#8b5cf6", "Carpenter work"),
        group("g3", "Electrical/Plumbing work", "⚡", "#6b7280", "Electrical and plumbing jobs"),
        group("g4", "Landscape", "🌿", "#10b981", "Gardens and irrigation"),
        group("g5", "Site Inspections", "🔍", "#3b82f6", "Track all site inspections in one place"),
        group("g7", "Engine/Electrick/Mecanical", "⚙️", "#f59e0b", "Vehicles and plant"),
        group("g8", "Pest Control", "🪲", "#ef4444", "Pest control scheduling"),
        group("g9", "AC", "❄️", "#6b7280", "Air conditioning"),
        group("g10", "Fire Safety Checks", "🔥", "#ef4444", "Extinguishers, alarms and exits"),
    ] {
        store.add_group(g);
    }

    for (id, name) in [
        ("a1", "Shower Room"),
        ("a13", "Block A"),
        ("a15", "Gardens"),
        ("a24", "Guest House"),
        ("a26", "Pool"),
        ("a30", "Workshop Yard"),
    ] {
        store.add_area(Area::new(id, name));
    }

    // --- Assets ------------------------------------------------------------

    let mut generator = Asset::new("as1", "Main Generator (CAT 500kVA)", "Power");
    generator.location = "Generator Room".to_string();
    generator.serial_number = Some("CAT-2019-001".to_string());
    generator.criticality = Criticality::High;
    generator.model = Some("500 EKWM".to_string());
    generator.manufacturer = Some("Caterpillar".to_string());
    generator.notes = Some("Test monthly under load. Change oil every 500 hours.".to_string());
    store.add_asset(generator);

    let mut pool_pump = Asset::new("as12", "Pool Circulation Pump", "Plumbing");
    pool_pump.location = "Pool Plant Room".to_string();
    pool_pump.manufacturer = Some("Pentair".to_string());
    store.add_asset(pool_pump);

    store.record_maintenance(
        &"as1".into(),
        MaintenanceRecord {
            id: "mr1".to_string(),
            date: d(30, 8, 0),
            kind: MaintenanceKind::Pm,
            description: "500 hour oil and filter change".to_string(),
            cost: 1450.0,
            technician: "Mohammed Al-Rashid".to_string(),
            task_id: None,
            downtime_hours: Some(3.0),
        },
    );
    store.record_maintenance(
        &"as12".into(),
        MaintenanceRecord {
            id: "mr2".to_string(),
            date: d(0, 12, 0),
            kind: MaintenanceKind::Repair,
            description: "Mechanical seal replaced".to_string(),
            cost: 320.0,
            technician: "Ahmed Hassan".to_string(),
            task_id: Some("t10".into()),
            downtime_hours: Some(2.5),
        },
    );
    store.attach_asset_document(
        &"as1".into(),
        AssetDocument {
            id: "d1-1".to_string(),
            name: "Generator O&M Manual".to_string(),
            kind: DocumentKind::Manual,
            uploaded_at: d(600, 8, 0),
            file_type: FileType::Pdf,
        },
    );

    // --- Tasks -------------------------------------------------------------

    let tasks = [
        NewTask::new("t1", "dyna and jcb put diesel", "g1", d(0, 12, 50))
            .with_assignees(["u2".into()]),
        NewTask::new("t2", "guest house indoor repairs", "g2", d(0, 12, 5))
            .with_assignees(["u4".into()])
            .with_tag(TAG_LOCATION, "Guest House"),
        NewTask::new("t7", "shower room curtain fixing", "g2", d(0, 7, 34))
            .with_assignees(["u4".into()])
            .with_priority(Priority::High)
            .with_tag(TAG_LOCATION, "Shower Room"),
        NewTask::new("t9", "JCB hydraulic pressure pipe broken", "g7", d(0, 5, 30))
            .with_assignees(["u2".into(), "u3".into()])
            .with_priority(Priority::High)
            .with_tag(TAG_EQUIPMENT, "JCB"),
        NewTask::new("t10", "Pool pump maintenance check", "g3", d(1, 14, 20))
            .with_assignees(["u3".into()])
            .with_tag(TAG_LOCATION, "Pool")
            .with_tag(TAG_EQUIPMENT, "Pool pump"),
        NewTask::new("t11", "AC unit filter replacement - Guest Suite 3", "g9", d(1, 10, 5))
            .with_assignees(["u8".into()])
            .with_priority(Priority::High)
            .with_tag(TAG_LOCATION, "Guest House"),
        NewTask::new("t13", "Fire extinguisher inspection - Block A", "g10", d(2, 11, 0))
            .with_assignees(["u7".into(), "u2".into()])
            .with_priority(Priority::High)
            .with_tag(TAG_CATEGORY, "Inspection"),
        NewTask::new("t14", "Pest control - kitchen area", "g8", d(2, 8, 45))
            .with_tag(TAG_CATEGORY, "Inspection"),
    ];
    let statuses = [
        TaskStatus::Done,
        TaskStatus::Done,
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::InProgress,
        TaskStatus::Open,
        TaskStatus::Open,
        TaskStatus::Done,
    ];
    for (mut task, status) in tasks.into_iter().zip(statuses) {
        task.status = status;
        if task.id.as_str() == "t10" {
            task.area_id = Some("a26".into());
            task.asset = Some(AssetLink {
                id: "as12".into(),
                name: "Pool Circulation Pump".to_string(),
            });
        }
        store.add_task(task);
    }
    store.add_task_comment(&"t10".into(), &"u3".into(), "Seal is worn, replacing today.");

    let planned = [
        ("p1", "Daily lobby cleanliness inspection", "g5", d(0, 8, 0), Recurrence::Daily, Priority::Low),
        ("p3", "RO system back wash", "g3", d(-1, 0, 30), Recurrence::Weekly, Priority::Medium),
        ("p6", "Bi-weekly fire extinguisher check", "g10", d(-4, 10, 0), Recurrence::Biweekly, Priority::High),
        ("p9", "Pest control full property", "g8", d(-7, 7, 0), Recurrence::Monthly, Priority::Low),
        ("p11", "Annual main generator service", "g3", d(-14, 6, 0), Recurrence::Yearly, Priority::High),
    ];
    for (id, title, group_id, at, recurrence, priority) in planned {
        let mut new = NewPlannedTask::new(id, title, group_id, at, recurrence);
        new.priority = Some(priority);
        store.add_planned_task(new);
    }
    store.set_planned_enabled(&"p9".into(), false);

    // --- Chat --------------------------------------------------------------

    for c in [
        channel("ch1", "General", "📢"),
        channel("ch2", "Maintenance", "🔧"),
        channel("ch3", "Management", "📊"),
        channel("ch5", "Fire Safety", "🔥"),
        channel("ch8", "Security", "🛡️"),
    ] {
        store.add_chat_channel(c);
    }
    store.add_chat_channel(ChatChannel::dm("dm1", "Mohammed Al-Rashid", "u2"));
    store.add_chat_channel(ChatChannel::dm("dm2", "Ahmed Hassan", "u3"));

    let mut m1 = ChatMessage::new("m1", "ch1", "u2", "Mohammed", "Good morning everyone! Pool pump is making unusual noises.", d(0, 8, 0));
    m1.pinned = true;
    let mut m5 = ChatMessage::new("m5", "ch1", "u2", "Mohammed", "Pump seal replaced. Running normally now 👍", d(0, 12, 0));
    m5.reactions = vec![reaction("👍", 3, true), reaction("✅", 2, false)];
    let m6 = ChatMessage::new("m6", "ch1", "u1", "Admin", "Excellent! Please update the task and attach a photo.", d(0, 12, 5))
        .replying_to(m5.quote());
    let mut m23 = ChatMessage::new("m23", "ch5", "u2", "Mohammed", "All stairwell signage confirmed ✅", d(0, 8, 10));
    m23.pinned = true;
    m23.reactions = vec![reaction("✅", 3, true)];

    let messages = [
        m1,
        ChatMessage::new("m2", "ch1", "u3", "Ahmed", "I can check it first thing. Probably needs a new seal.", d(0, 8, 5)),
        ChatMessage::new("m3", "ch1", "u4", "Khalid", "Same issue happened last month. Replacement part is in the storeroom.", d(0, 8, 10)),
        ChatMessage::new("m4", "ch1", "u1", "Admin", "Great, I will check it now", d(0, 10, 30)),
        m5,
        m6,
        ChatMessage::new("m7", "ch2", "u2", "Mohammed", "Pool pump needs new seal - urgent", d(0, 9, 0)),
        ChatMessage::new("m8", "ch2", "u4", "Khalid", "On my way to the pool plant room.", d(0, 9, 10)),
        ChatMessage::new("m11", "ch2", "u3", "Ahmed", "Done. Job complete, area cleaned up.", d(0, 11, 45)),
        ChatMessage::new("m12", "ch3", "u1", "Admin", "Q1 maintenance report is ready for review.", d(1, 14, 0)),
        ChatMessage::new("m14", "ch3", "u1", "Admin", "Monthly report approved", d(1, 16, 0)),
        ChatMessage::new("m20", "ch5", "u2", "Mohammed", "Monthly fire extinguisher check completed on all floors.", d(0, 7, 30)),
        ChatMessage::new("m21", "ch5", "u4", "Khalid", "Extinguisher on B1 needs recharge. I have tagged it.", d(0, 7, 45)),
        ChatMessage::new("m22", "ch5", "u1", "Admin", "Task created for replacement. Fire exit B2 is clear.", d(0, 8, 0)),
        m23,
        ChatMessage::new("m30", "ch8", "u7", "Sara", "Camera 3 on east perimeter is offline. Investigating.", d(0, 7, 0)),
        ChatMessage::new("m32", "ch8", "u7", "Sara", "CCTV feed restored", d(0, 7, 30)),
        ChatMessage::new("m33", "dm1", "u2", "Mohammed", "Can you review task #42?", d(0, 11, 0)),
        ChatMessage::new("m34", "dm1", "u1", "Admin", "Sure, looking at it now.", d(0, 11, 5)),
        ChatMessage::new("m35", "dm1", "u2", "Mohammed", "Need sign-off before we order the parts.", d(0, 11, 8)),
        ChatMessage::new("m37", "dm2", "u1", "Admin", "On my way", d(0, 9, 30)),
    ];
    for message in messages {
        store.add_chat_message(message);
    }

    // Unread counters as the team left them.
    for (id, unread) in [("ch1", 3), ("ch2", 1), ("ch3", 0), ("ch5", 2), ("ch8", 1), ("dm1", 1), ("dm2", 0)] {
        store.update_chat_channel(
            &id.into(),
            ChannelPatch {
                unread: Some(unread),
                ..ChannelPatch::default()
            },
        );
    }

    let fire = store.group(&"g10".into()).map(Group::snapshot);
    let mut reminder = NewSystemMessage::new(
        "Fire Safety Checks",
        "📋 Planned task due: Bi-weekly fire extinguisher check",
        SystemMessageKind::PlannedTask,
    );
    reminder.group_icon = Some("🔥".to_string());
    reminder.group = fire;
    store.add_system_message(reminder);

    if let Some(snapshot) = store.group(&"g7".into()).map(Group::snapshot) {
        store.add_notification(NewNotification {
            title: "JCB hydraulic pressure pipe broken".to_string(),
            body: "Assigned to you and Ahmed Hassan".to_string(),
            group: snapshot,
            group_icon: "⚙️".to_string(),
        });
    }
    if let Some(snapshot) = store.group(&"g10".into()).map(Group::snapshot) {
        store.add_notification(NewNotification {
            title: "Fire extinguisher inspection - Block A".to_string(),
            body: "Due today".to_string(),
            group: snapshot,
            group_icon: "🔥".to_string(),
        });
    }

    info!(
        users = store.users().len(),
        tasks = store.tasks().len(),
        channels = store.channels().len(),
        messages = store.messages().len(),
        "demo dataset loaded"
    );
    store
}
