use firc_expr::{ActionRef, EventState, GrammarError, parse};

#[test]
fn parse_single_event() {
    let exprs = parse("create").unwrap();
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].bindings.len(), 1);
    let binding = &exprs[0].bindings[0];
    assert_eq!(binding.events.len(), 1);
    assert_eq!(binding.events[0].name, "create");
    assert_eq!(binding.events[0].state, None);
    assert!(binding.target.template.is_none());
    assert!(binding.target.action.is_none());
}

#[test]
fn parse_full_target() {
    let exprs = parse("create:error.debounce -> todo => $fir.appendEl()").unwrap();
    let binding = &exprs[0].bindings[0];
    assert_eq!(binding.events[0].state, Some(EventState::Error));
    assert_eq!(binding.events[0].modifiers, vec!["debounce".to_string()]);
    assert_eq!(binding.target.template.as_deref(), Some("todo"));
    assert_eq!(
        binding.target.action,
        Some(ActionRef::FirCall("$fir.appendEl()".into()))
    );
}

#[test]
fn parse_adjacent_arrows_without_spaces() {
    let exprs = parse("update->todo-item=>save").unwrap();
    let binding = &exprs[0].bindings[0];
    assert_eq!(binding.target.template.as_deref(), Some("todo-item"));
    assert_eq!(binding.target.action, Some(ActionRef::Ident("save".into())));
}

#[test]
fn comma_events_share_a_binding_until_a_target() {
    let exprs = parse("a,b->t,c=>x").unwrap();
    let bindings = &exprs[0].bindings;
    assert_eq!(bindings.len(), 2);
    let names: Vec<_> = bindings[0].events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(bindings[0].target.template.as_deref(), Some("t"));
    assert_eq!(bindings[1].events[0].name, "c");
}

#[test]
fn bracket_lists_splice_into_the_binding() {
    let exprs = parse("[create:ok,update:pending],delete->todo").unwrap();
    let binding = &exprs[0].bindings[0];
    let names: Vec<_> = binding.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["create", "update", "delete"]);
    assert_eq!(binding.events[1].state, Some(EventState::Pending));
}

#[test]
fn semicolons_split_expressions() {
    let exprs = parse("save=>saveData; load=>loadData").unwrap();
    assert_eq!(exprs.len(), 2);
    assert_eq!(exprs[1].bindings[0].events[0].name, "load");
}

#[test]
fn one_trailing_semicolon_is_dropped() {
    let with = parse("event1->tmpl1;event2=>act2;").unwrap();
    let without = parse("event1->tmpl1;event2=>act2").unwrap();
    assert_eq!(with, without);
}

#[test]
fn empty_expressions_are_rejected() {
    for src in ["a=>b;;c=>d", "a;;", ";", "a ; ;"] {
        assert!(parse(src).is_err(), "{src:?} should not parse");
    }
    assert!(matches!(
        parse("a;;b"),
        Err(GrammarError::EmptyExpression { .. })
    ));
}

#[test]
fn grammar_errors() {
    assert_eq!(parse(""), Err(GrammarError::Empty));
    assert_eq!(parse("   \n "), Err(GrammarError::Empty));
    assert!(matches!(
        parse("create:invalid"),
        Err(GrammarError::InvalidState { .. })
    ));
    assert!(matches!(
        parse(":ok"),
        Err(GrammarError::Expected { expected: "event identifier", .. })
    ));
    assert!(matches!(
        parse("->todo"),
        Err(GrammarError::Expected { expected: "event identifier", .. })
    ));
    assert!(matches!(
        parse("=>replace"),
        Err(GrammarError::Expected { expected: "event identifier", .. })
    ));
    assert!(matches!(
        parse("create."),
        Err(GrammarError::DanglingModifier { .. })
    ));
}

#[test]
fn target_errors() {
    assert!(matches!(
        parse("create->"),
        Err(GrammarError::Expected { expected: "template name after '->'", .. })
    ));
    assert!(matches!(
        parse("create=>"),
        Err(GrammarError::Expected { expected: "action after '=>'", .. })
    ));
    // template must come before the action
    assert!(parse("create=>save->todo").is_err());
    assert!(parse("create a").is_err());
    assert!(parse("a,").is_err());
    assert!(parse("a->t,").is_err());
}

#[test]
fn unclosed_bracket() {
    assert_eq!(
        parse("[a,b"),
        Err(GrammarError::UnclosedBracket { offset: 0 })
    );
    assert!(parse("[]").is_err());
}

#[test]
fn error_messages_mention_offsets() {
    let err = parse("create,:ok").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected event identifier at offset 7, found state ':ok'"
    );
}
