use firc_actions::{
    ActionError, ActionHandler, ActionInfo, CollectedAction, check_conflicts, conflicts,
    shared_events,
};
use firc_expr::{EventInfo, EventState};
use proptest::prelude::*;

fn collected(handler: ActionHandler, value: &str) -> CollectedAction {
    let key = format!("x-fir-{}", handler.name());
    CollectedAction::new(handler, ActionInfo::parse(&key, value).unwrap()).unwrap()
}

#[test]
fn refresh_and_remove_on_the_same_event_conflict() {
    let a = collected(ActionHandler::Refresh, "click");
    let b = collected(ActionHandler::Remove, "click:ok");
    assert!(conflicts(&a, &b));
    assert!(conflicts(&b, &a));
    assert_eq!(
        shared_events(&a, &b),
        vec![EventInfo::new("click", EventState::Ok)]
    );
}

#[test]
fn coexisting_handlers_never_conflict() {
    let refresh = collected(ActionHandler::Refresh, "click");
    for handler in [
        ActionHandler::Reset,
        ActionHandler::ToggleDisabled,
        ActionHandler::ToggleClass,
        ActionHandler::Runjs,
        ActionHandler::JsPrefix,
    ] {
        let other = collected(handler, "click");
        assert!(!conflicts(&refresh, &other), "{}", handler.name());
        assert!(!conflicts(&other, &refresh), "{}", handler.name());
    }
}

#[test]
fn disjoint_events_never_conflict() {
    let refresh = collected(ActionHandler::Refresh, "click");
    let append = collected(ActionHandler::Append, "create");
    assert!(!conflicts(&refresh, &append));

    let remove = collected(ActionHandler::Remove, "click:error");
    assert!(!conflicts(&refresh, &remove));
}

#[test]
fn modifiers_and_templates_do_not_separate_events() {
    let append = collected(ActionHandler::Append, "create.debounce->row");
    let prepend = collected(ActionHandler::Prepend, "[update,create]->row");
    assert!(conflicts(&append, &prepend));
}

#[test]
fn conflict_table() {
    use ActionHandler::*;
    let pairs = [
        (Refresh, Remove, true),
        (Refresh, RemoveParent, true),
        (Refresh, Append, false),
        (Refresh, Prepend, false),
        (Refresh, Refresh, false),
        (Remove, RemoveParent, true),
        (Remove, Append, true),
        (Remove, Prepend, true),
        (RemoveParent, Append, true),
        (RemoveParent, Prepend, true),
        (Append, Prepend, true),
        (Append, Append, false),
        (Dispatch, Remove, false),
        (Redirect, Refresh, false),
    ];
    for (a, b, expected) in pairs {
        let a = collected(a, "save");
        let b = collected(b, "save");
        assert_eq!(
            conflicts(&a, &b),
            expected,
            "{} vs {}",
            a.handler().name(),
            b.handler().name()
        );
    }
}

#[test]
fn accessors_expose_the_parsed_attribute() {
    let c = collected(ActionHandler::Append, "create:error,update->row");
    assert_eq!(c.handler(), ActionHandler::Append);
    assert_eq!(c.info().attr_name, "x-fir-append");
    assert_eq!(c.info().value, "create:error,update->row");
    assert_eq!(
        c.events().iter().cloned().collect::<Vec<_>>(),
        vec![
            EventInfo::new("create", EventState::Error),
            EventInfo::new("update", EventState::Ok),
        ]
    );
}

#[test]
fn check_conflicts_reports_the_first_pair() {
    let actions = vec![
        collected(ActionHandler::Refresh, "create"),
        collected(ActionHandler::Reset, "create"),
        collected(ActionHandler::Remove, "create,delete"),
        collected(ActionHandler::Append, "delete"),
    ];
    let err = check_conflicts(&actions).unwrap_err();
    assert_eq!(
        err,
        ActionError::Conflict {
            first: "x-fir-refresh".into(),
            second: "x-fir-remove".into(),
            events: vec![EventInfo::new("create", EventState::Ok)],
        }
    );
    assert_eq!(
        err.to_string(),
        "'x-fir-refresh' conflicts with 'x-fir-remove' on create:ok"
    );

    assert!(check_conflicts(&actions[..2]).is_ok());
    assert!(check_conflicts(&[]).is_ok());
}

fn event_list() -> impl Strategy<Value = String> {
    let events = prop::sample::subsequence(
        vec!["click", "create", "update", "delete", "save:error", "save:pending"],
        1..=4,
    );
    events.prop_map(|events| events.join(","))
}

proptest! {
    #[test]
    fn conflicts_is_symmetric(
        a in prop::sample::select(ActionHandler::ALL.to_vec()),
        b in prop::sample::select(ActionHandler::ALL.to_vec()),
        a_events in event_list(),
        b_events in event_list(),
    ) {
        let a = collected(a, &a_events);
        let b = collected(b, &b_events);
        prop_assert_eq!(conflicts(&a, &b), conflicts(&b, &a));
    }

    #[test]
    fn no_shared_events_means_no_conflict(
        a in prop::sample::select(ActionHandler::ALL.to_vec()),
        b in prop::sample::select(ActionHandler::ALL.to_vec()),
        a_events in event_list(),
        b_events in event_list(),
    ) {
        let a = collected(a, &a_events);
        let b = collected(b, &b_events);
        if shared_events(&a, &b).is_empty() {
            prop_assert!(!conflicts(&a, &b));
        }
    }
}
