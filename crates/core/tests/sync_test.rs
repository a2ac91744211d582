use pretty_assertions::assert_eq;
use termtable_core::models::slot::ScheduleSlot;
use termtable_core::models::time::TimeOfDay;
use termtable_core::sync::{SyncOperation, plan_sync};

fn slot(id: Option<i64>, day: u8, room: Option<&str>) -> ScheduleSlot {
    ScheduleSlot {
        id,
        day_of_week: day,
        start_time: TimeOfDay::new(9, 0),
        end_time: TimeOfDay::new(10, 30),
        room: room.map(str::to_string),
        quarter: None,
    }
}

#[test]
fn unchanged_schedule_produces_only_updates() {
    let previous = vec![slot(Some(1), 0, None), slot(Some(2), 2, None)];

    let ops = plan_sync(&previous, &previous);

    assert_eq!(
        ops,
        vec![
            SyncOperation::Update {
                id: 1,
                slot: previous[0].clone()
            },
            SyncOperation::Update {
                id: 2,
                slot: previous[1].clone()
            },
        ]
    );
}

#[test]
fn emptied_schedule_deletes_every_previous_slot() {
    let previous = vec![slot(Some(1), 0, None)];

    assert_eq!(
        plan_sync(&previous, &[]),
        vec![SyncOperation::Delete { id: 1 }]
    );
}

#[test]
fn kept_id_with_new_fields_stays_an_update() {
    let previous = vec![slot(Some(1), 0, None)];
    let mut edited = slot(Some(1), 4, Some("301"));
    edited.start_time = TimeOfDay::new(13, 0);
    edited.end_time = TimeOfDay::new(14, 30);
    let added = slot(None, 2, None);

    let ops = plan_sync(&previous, &[edited.clone(), added.clone()]);

    assert_eq!(
        ops,
        vec![
            SyncOperation::Update { id: 1, slot: edited },
            SyncOperation::Create(added),
        ]
    );
}

#[test]
fn deletes_come_before_creates_and_updates() {
    let previous = vec![
        slot(Some(1), 0, Some("A")),
        slot(Some(2), 1, Some("B")),
        slot(Some(3), 2, Some("C")),
    ];
    // drop slot 1, keep 2 and 3, add one new
    let current = vec![
        slot(Some(2), 1, Some("A")),
        slot(None, 4, Some("B")),
        slot(Some(3), 2, Some("C")),
    ];

    let ops = plan_sync(&previous, &current);

    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0], SyncOperation::Delete { id: 1 });
    assert_eq!(
        ops[1],
        SyncOperation::Update {
            id: 2,
            slot: current[0].clone()
        }
    );
    assert_eq!(ops[2], SyncOperation::Create(current[1].clone()));
    assert_eq!(
        ops[3],
        SyncOperation::Update {
            id: 3,
            slot: current[2].clone()
        }
    );
}

#[test]
fn unsaved_slots_never_trigger_deletes() {
    let current = vec![slot(None, 0, None), slot(None, 3, None)];

    let ops = plan_sync(&[], &current);

    assert_eq!(
        ops,
        vec![
            SyncOperation::Create(current[0].clone()),
            SyncOperation::Create(current[1].clone()),
        ]
    );
}

#[test]
fn describe_identifies_the_operation() {
    assert_eq!(
        SyncOperation::Delete { id: 7 }.describe(),
        "delete slot 7"
    );
    assert_eq!(
        SyncOperation::Update {
            id: 3,
            slot: slot(Some(3), 1, None)
        }
        .describe(),
        "update slot 3"
    );
    assert_eq!(
        SyncOperation::Create(slot(None, 0, None)).describe(),
        "create Monday 09:00-10:30"
    );
}
