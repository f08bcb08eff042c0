use firc_actions::{ActionHandler, Registry};

#[test]
fn builtin_has_every_handler() {
    let registry = Registry::builtin();
    assert_eq!(registry.len(), ActionHandler::ALL.len());
    for handler in ActionHandler::ALL {
        assert_eq!(registry.get(handler.name()), Some(handler));
    }
}

#[test]
fn precedences() {
    let expected = [
        ("refresh", 20),
        ("remove", 30),
        ("runjs", 32),
        ("toggleClass", 33),
        ("dispatch", 33),
        ("toggle-disabled", 34),
        ("reset", 35),
        ("remove-parent", 40),
        ("append", 50),
        ("prepend", 60),
        ("redirect", 90),
        ("js", 100),
    ];
    let registry = Registry::builtin();
    for (name, precedence) in expected {
        let handler = registry.get(name).expect(name);
        assert_eq!(handler.precedence(), precedence, "{name}");
    }
}

#[test]
fn handlers_are_listed_by_precedence() {
    let names: Vec<_> = Registry::builtin()
        .handlers()
        .into_iter()
        .map(ActionHandler::name)
        .collect();
    assert_eq!(names.first(), Some(&"refresh"));
    assert_eq!(names.last(), Some(&"js"));
    let precedences: Vec<_> = Registry::builtin()
        .handlers()
        .into_iter()
        .map(ActionHandler::precedence)
        .collect();
    assert!(precedences.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn resolve_falls_back_to_js_prefix() {
    let registry = Registry::builtin();
    assert_eq!(registry.resolve("append"), Some(ActionHandler::Append));
    assert_eq!(registry.resolve("action-doSave"), Some(ActionHandler::JsPrefix));
    assert_eq!(registry.resolve("action-"), None);
    assert_eq!(registry.resolve("explode"), None);
}

#[test]
fn isolated_tables_leave_the_global_one_alone() {
    let only_refresh = Registry::from_handlers([ActionHandler::Refresh]);
    assert_eq!(only_refresh.len(), 1);
    assert_eq!(only_refresh.resolve("remove"), None);
    assert_eq!(only_refresh.resolve("action-doSave"), None);

    assert_eq!(Registry::global().len(), ActionHandler::ALL.len());
    assert_eq!(Registry::global().resolve("remove"), Some(ActionHandler::Remove));
}

#[test]
fn global_is_shared() {
    assert!(std::ptr::eq(Registry::global(), Registry::global()));
}
