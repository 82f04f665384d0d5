use futures::executor::block_on;

use super::*;

#[test]
fn wait_for_receives_matching_event() {
    let (signals, mut inbox) = PhaseSignals::channel();
    signals.mounted(Phase::Boot);
    assert!(block_on(inbox.wait_for(PhaseEvent::Mounted(Phase::Boot))));
}

#[test]
fn early_events_are_buffered_not_lost() {
    let (signals, mut inbox) = PhaseSignals::channel();
    signals.completed(Phase::Boot);
    signals.mounted(Phase::Boot);

    assert!(block_on(inbox.wait_for(PhaseEvent::Mounted(Phase::Boot))));
    assert!(block_on(inbox.wait_for(PhaseEvent::Completed(Phase::Boot))));
}

#[test]
fn wait_for_fails_once_senders_are_dropped() {
    let (signals, mut inbox) = PhaseSignals::channel();
    signals.mounted(Phase::Login);
    drop(signals);

    assert!(!block_on(inbox.wait_for(PhaseEvent::Completed(Phase::Login))));
    assert!(block_on(inbox.wait_for(PhaseEvent::Mounted(Phase::Login))));
}

#[test]
fn signals_after_inbox_drop_do_not_panic() {
    let (signals, inbox) = PhaseSignals::channel();
    drop(inbox);
    signals.completed(Phase::Home);
}
