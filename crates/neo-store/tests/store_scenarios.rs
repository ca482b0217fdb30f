// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end store behavior through the shared handle.

use neo_config::{MultiMatchPolicy, NeoConfig};
use neo_core::MessageId;
use neo_core::model::{
    ChannelPatch, ChatChannel, ChatMessage, GroupPatch, NewSystemMessage, NewTask, Reaction, SystemMessageKind,
};
use neo_router::ChannelMatcher;
use neo_store::{ChannelView, Store};
use neo_test_utils::TestHarness;
use neo_test_utils::fixtures::{at, channel, group, message, user};
use proptest::prelude::*;

#[test]
fn renamed_group_leaves_task_snapshots_alone() {
    let mut store = Store::new("u1");
    store.add_group(group("g3", "Electrical", "#f59e0b"));
    let before = store.add_task(NewTask::new("t1", "Replace breaker", "g3", at(0)));

    assert!(store.update_group(&"g3".into(), GroupPatch::rename("Electric")));
    let after = store.add_task(NewTask::new("t2", "Check sockets", "g3", at(5)));

    assert_eq!(store.task(&before).unwrap().group.name, "Electrical");
    assert_eq!(store.task(&after).unwrap().group.name, "Electric");
    assert_eq!(store.group(&"g3".into()).unwrap().name, "Electric");
}

#[test]
fn orphaned_assignee_is_tolerated() {
    let mut store = Store::new("u1");
    store.add_user(user("u3", "Ahmed Hassan"));
    store.add_group(group("g1", "Daily Maintenance", "#3b82f6"));
    store.add_task(NewTask::new("t1", "Diesel top-up", "g1", at(0)).with_assignees(["u3".into()]));

    assert!(store.delete_user(&"u3".into()));
    let task = store.task(&"t1".into()).unwrap();
    assert!(task.is_assigned_to(&"u3".into()));
    assert!(task.assignees.iter().all(|id| store.user(id).is_none()));
}

#[test]
fn dm_outlives_its_counterpart() {
    let mut store = Store::new("u1");
    store.add_user(user("u2", "Sara Ahmed"));
    store.add_chat_channel(ChatChannel::dm("dm1", "Sara Ahmed", "u2"));
    store.add_chat_message(ChatMessage::new("m1", "dm1", "u2", "Sara Ahmed", "Keys are at reception", at(0)));

    assert!(store.delete_user(&"u2".into()));
    assert!(store.user(&"u2".into()).is_none());
    assert_eq!(store.find_dm_channel(&"u2".into()).unwrap().id.as_str(), "dm1");

    let view = ChannelView::open(&store, &"dm1".into(), &ChannelMatcher::default(), at(1)).unwrap();
    assert_eq!(view.name(), "Sara Ahmed");
    assert_eq!(view.entries().len(), 1);
    assert_eq!(view.entries()[0].user_name, "Sara Ahmed");
}

#[test]
fn task_for_unknown_group_gets_empty_snapshot() {
    let mut store = Store::new("u1");
    let id = store.add_task(NewTask::new("t1", "Orphan", "g404", at(0)));
    assert!(store.task(&id).unwrap().group.is_missing());
}

#[test]
fn preview_follows_latest_message() {
    let harness = TestHarness::builder()
        .with_user(user("u2", "Mohammed Al-Rashid"))
        .with_channel(channel("c1", "Maintenance"))
        .build()
        .unwrap();
    harness.receive("c1", "u2", "Pool pump needs new seal");
    harness.send("c1", "On my way");

    harness.store.read(|s| {
        let c1 = s.channel(&"c1".into()).unwrap();
        assert_eq!(c1.last_message.as_deref(), Some("On my way"));
        assert_eq!(c1.last_time, Some(harness.now()));
        assert_eq!(c1.unread, 1);
        assert_eq!(s.channel_preview(&"c1".into()).as_deref(), Some("On my way"));
    });
}

#[test]
fn five_messages_with_two_unread_put_divider_at_three() {
    let harness = TestHarness::builder()
        .with_channel(channel("c1", "General"))
        .build()
        .unwrap();
    for i in 0..5 {
        harness.receive("c1", "u2", &format!("update {i}"));
    }
    harness.store.write(|s| {
        s.update_chat_channel(
            &"c1".into(),
            ChannelPatch {
                unread: Some(2),
                ..ChannelPatch::default()
            },
        )
    });

    let mut view = harness.open("c1").unwrap();
    assert_eq!(view.divider(), Some(3));

    harness.store.write(|s| s.mark_channel_read(&"c1".into()));
    harness.receive("c1", "u2", "one more");
    harness.store.read(|s| view.refresh(s));
    assert_eq!(view.entries().len(), 6);
    assert_eq!(view.divider(), Some(3));

    assert_eq!(harness.open("c1").unwrap().divider(), Some(5));
}

#[test]
fn fire_hint_reaches_fire_safety_but_pool_pump_misses_maintenance() {
    let harness = TestHarness::builder()
        .with_channel(channel("c1", "Fire Safety"))
        .with_channel(channel("c2", "Maintenance"))
        .build()
        .unwrap();
    harness.store.write(|s| {
        s.add_system_message(NewSystemMessage::new(
            "Fire",
            "Reminder: extinguisher check",
            SystemMessageKind::Reminder,
        ));
        s.add_system_message(NewSystemMessage::new(
            "Pool Pump",
            "New task: pump seal",
            SystemMessageKind::NewTask,
        ));
    });

    let fire = harness.open("c1").unwrap();
    let system: Vec<&ChatMessage> = fire.entries().iter().filter(|m| m.is_system()).collect();
    assert_eq!(system.len(), 1);
    assert_eq!(system[0].text, "Reminder: extinguisher check");
    assert_eq!(system[0].user_name, harness.config.routing.system_user_name);

    let maintenance = harness.open("c2").unwrap();
    assert!(maintenance.entries().iter().all(|m| !m.is_system()));
}

#[test]
fn primary_policy_keeps_one_channel_per_hint() {
    let mut config = NeoConfig::default();
    config.routing.multi_match = MultiMatchPolicy::Primary;
    let harness = TestHarness::builder()
        .with_config(config)
        .with_channel(channel("c1", "Fire"))
        .with_channel(channel("c2", "Fire Safety"))
        .build()
        .unwrap();
    harness.store.write(|s| {
        s.add_system_message(NewSystemMessage::new(
            "Fire Safety",
            "Planned task due: alarm test",
            SystemMessageKind::PlannedTask,
        ))
    });

    assert!(harness.open("c1").unwrap().entries().is_empty());
    assert_eq!(harness.open("c2").unwrap().entries().len(), 1);
}

#[test]
fn pinned_list_skips_system_entries() {
    let harness = TestHarness::builder()
        .with_channel(channel("c1", "Fire Safety"))
        .build()
        .unwrap();
    let id = harness.send("c1", "Exit B2 clear");
    harness.store.write(|s| {
        s.pin_message(&id);
        s.add_system_message(NewSystemMessage::new(
            "Fire Safety",
            "Reminder",
            SystemMessageKind::Reminder,
        ));
    });
    let view = harness.open("c1").unwrap();
    assert_eq!(view.entries().len(), 2);
    assert_eq!(view.pinned().len(), 1);
    assert_eq!(view.pinned()[0].id, id);
}

#[test]
fn muted_channels_drop_out_of_total_unread() {
    let harness = TestHarness::builder().with_demo_data().build().unwrap();
    let mut prefs = harness.preferences().unwrap();
    let all = harness.store.read(|s| s.total_unread(prefs.muted()));

    prefs.toggle_mute(&"ch1".into()).unwrap();
    let without_general = harness.store.read(|s| s.total_unread(prefs.muted()));
    assert_eq!(all - without_general, 3);
}

#[test]
fn snapshot_survives_json() {
    let harness = TestHarness::builder().with_demo_data().build().unwrap();
    let snapshot = harness.store.snapshot();
    let json = snapshot.to_json().unwrap();
    let back = neo_store::StoreSnapshot::from_json(&json).unwrap();
    assert_eq!(back, snapshot);
    let rebuilt = Store::from_snapshot(back, "u1");
    assert_eq!(rebuilt.tasks().len(), snapshot.tasks.len());
}

fn reactions() -> impl Strategy<Value = Vec<Reaction>> {
    prop::collection::btree_map("[a-e]", (1u32..5, any::<bool>()), 0..5).prop_map(|m| {
        m.into_iter()
            .map(|(emoji, (count, reacted_by_me))| Reaction {
                emoji,
                count,
                reacted_by_me,
            })
            .collect()
    })
}

fn sorted(reactions: &[Reaction]) -> Vec<(String, u32, bool)> {
    let mut v: Vec<_> = reactions
        .iter()
        .map(|r| (r.emoji.clone(), r.count, r.reacted_by_me))
        .collect();
    v.sort();
    v
}

proptest! {
    #[test]
    fn toggling_twice_restores_reactions(initial in reactions(), emoji in "[a-f]") {
        let mut store = Store::new("u1");
        let mut m = message("m1", "c1", "u2", "hello", at(0));
        m.reactions = initial.clone();
        store.add_chat_message(m);

        let id = MessageId::from("m1");
        store.toggle_reaction(&id, &emoji);
        store.toggle_reaction(&id, &emoji);

        let after = &store.message(&id).unwrap().reactions;
        prop_assert_eq!(sorted(after), sorted(&initial));
    }
}
