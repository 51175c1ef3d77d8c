//! Registration-failure tests for the table strategy.
//!
//! The match-based strategies cannot miss a handler; the table can. These
//! tests pin down both failure modes: a lookup miss at dispatch time and a
//! duplicate entry at build time.

use std::io::Write;
use visita::prelude::*;

#[test]
fn unregistered_variant_raises_a_lookup_error() {
    let mut builder = TableDispatcherBuilder::new();
    builder.insert_label(Command::Start).unwrap();
    builder.insert_label(Command::Stop).unwrap();
    let mut dispatcher = builder.build(Vec::new());

    dispatcher.dispatch(Command::Start).unwrap();
    dispatcher.dispatch(Command::Stop).unwrap();

    let err = dispatcher.dispatch(Command::GetStatus).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::UnroutedCommand {
            label: "GetStatusCommand"
        }
    ));
}

#[test]
fn lookup_error_stops_the_sequence_at_the_missing_entry() {
    let mut builder = TableDispatcherBuilder::new();
    builder.insert_label(Command::GetStatus).unwrap();
    let mut dispatcher = builder.build(Vec::new());

    // First command dispatches, second misses the table.
    let err = dispatcher
        .dispatch_all(&[Command::GetStatus, Command::GetTargets])
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnroutedCommand { .. }));

    let written = String::from_utf8(dispatcher.into_inner()).unwrap();
    assert_eq!(written, "GetStatusCommand\n");
}

#[test]
fn custom_handlers_can_be_bound_per_variant() {
    let mut builder = TableDispatcherBuilder::new();
    for command in Command::ALL {
        let label = command.label();
        builder
            .insert(
                command,
                Box::new(move |w: &mut Vec<u8>| writeln!(w, "table:{label}")),
            )
            .unwrap();
    }
    let mut dispatcher = builder.build(Vec::new());
    dispatcher.dispatch(Command::GetTargets).unwrap();

    let written = String::from_utf8(dispatcher.into_inner()).unwrap();
    assert_eq!(written, "table:GetTargetsCommand\n");
}

#[test]
fn double_registration_is_rejected() {
    let mut builder: TableDispatcherBuilder<Vec<u8>> = TableDispatcherBuilder::new();
    builder.insert_label(Command::GetTargets).unwrap();
    assert_eq!(
        builder.insert_label(Command::GetTargets),
        Err(TableBuildError::DuplicateEntry {
            label: "GetTargetsCommand"
        })
    );
}
