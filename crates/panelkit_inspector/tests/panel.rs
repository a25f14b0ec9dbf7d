//! End-to-end panel scenarios: creation, sections, the change pipeline, and
//! the cache/live-value split.

use std::sync::{Arc, Mutex};

use panelkit_inspector::{
    ChangePhase, Error, Event, Inspector, InspectorConfig, SectionOptions, Value, WidgetOptions,
};

#[test]
fn test_seeded_value_readable_after_creation() {
    let mut inspector = Inspector::new();
    inspector.add_number("Width", 1000.0, WidgetOptions::default());
    assert_eq!(inspector.get_value("Width"), Some(&Value::Number(1000.0)));
}

#[test]
fn test_null_value_seeds_kind_default() {
    let mut inspector = Inspector::new();
    inspector.add("number", "N", Value::Null, WidgetOptions::default());
    inspector.add("string", "S", Value::Null, WidgetOptions::default());
    inspector.add("checkbox", "B", Value::Null, WidgetOptions::default());
    assert_eq!(inspector.get_value("N"), Some(&Value::Number(0.0)));
    assert_eq!(inspector.get_value("S"), Some(&Value::Text(String::new())));
    assert_eq!(inspector.get_value("B"), Some(&Value::Bool(false)));
}

#[test]
fn test_unknown_widget_type_yields_nothing() {
    let mut inspector = Inspector::new();
    assert!(inspector
        .add("hologram", "H", Value::Null, WidgetOptions::default())
        .is_none());
    assert_eq!(inspector.widget_count(), 0);
    assert_eq!(inspector.get_value("H"), None);
}

#[test]
fn test_untyped_spec_is_a_hard_failure() {
    use panelkit_inspector::WidgetSpec;
    let mut inspector = Inspector::new();
    let result = inspector.add_spec(WidgetSpec::untyped("X", 1.0));
    assert!(matches!(result, Err(Error::MissingType)));
}

#[test]
fn test_name_collision_keeps_older_widget_by_ordinal() {
    let mut inspector = Inspector::new();
    let first = inspector.add_number("X", 1.0, WidgetOptions::default()).unwrap();
    let second = inspector.add_string("X", "two", WidgetOptions::default()).unwrap();

    // Cache and name index silently follow the newest registration.
    assert_eq!(inspector.get_value("X"), Some(&Value::from("two")));
    assert_eq!(inspector.get_widget("X"), Some(second));
    // The superseded widget stays reachable by ordinal.
    assert_eq!(inspector.get_widget_at(0), Some(first));
    assert_eq!(inspector.get_widget_at(1), Some(second));
}

#[test]
fn test_opening_second_section_closes_first() {
    let mut inspector = Inspector::new();
    let a = inspector.add_section("A", SectionOptions::default());
    inspector.add_number("InA", 1.0, WidgetOptions::default());
    let b = inspector.add_section("B", SectionOptions::default());
    let in_b = inspector.add_number("InB", 2.0, WidgetOptions::default()).unwrap();

    assert_eq!(inspector.get_current_section(), Some(b));
    assert!(!inspector.section_widgets(a).contains(&in_b));
    assert!(inspector.section_widgets(b).contains(&in_b));
}

#[test]
fn test_set_current_section_round_trip() {
    let mut inspector = Inspector::new();
    let x = inspector.add_section("X", SectionOptions::default());
    let _y = inspector.add_section("Y", SectionOptions::default());
    inspector.set_current_section(x);
    assert_eq!(inspector.get_current_section(), Some(x));

    // Retroactive appends land in the reactivated section.
    let late = inspector.add_number("Late", 3.0, WidgetOptions::default()).unwrap();
    assert!(inspector.section_widgets(x).contains(&late));
}

#[test]
fn test_group_nesting_and_defensive_end() {
    let mut inspector = Inspector::new();
    inspector.begin_group("Outer", SectionOptions::default());
    inspector.begin_group("Inner", SectionOptions::default());
    inspector.add_number("Deep", 1.0, WidgetOptions::default());
    // An unbalanced start_container inside the group is unwound by end_group.
    inspector.start_container(None);
    inspector.end_group();
    inspector.end_group();
    assert_eq!(inspector.stack().current(), inspector.root());
}

#[test]
fn test_change_pipeline_ordering() {
    let log = Arc::new(Mutex::new(Vec::<String>::new()));

    let config = {
        let log = log.clone();
        InspectorConfig::new().on_change(move |name, value, _| {
            assert_eq!(name, "N");
            assert_eq!(value, &Value::Number(5.0));
            log.lock().unwrap().push("panel".into());
        })
    };
    let mut inspector = Inspector::with_config(config);

    let options = {
        let log = log.clone();
        WidgetOptions::from_callback(move |value, _| {
            assert_eq!(value, &Value::Number(5.0));
            log.lock().unwrap().push("callback".into());
            None
        })
    };
    inspector.add_number("N", 0.0, options);

    {
        let log = log.clone();
        assert!(inspector.observe_widget(
            "N",
            Arc::new(move |ev| {
                let phase = match ev.phase {
                    ChangePhase::Before => "before",
                    ChangePhase::After => "after",
                };
                log.lock().unwrap().push(phase.into());
            }),
        ));
    }

    inspector.dispatch_input("N", &Event::text("5"));
    assert_eq!(
        log.lock().unwrap().as_slice(),
        ["before", "callback", "after", "panel"]
    );
    // The cache was updated as part of the pipeline.
    assert_eq!(inspector.get_value("N"), Some(&Value::Number(5.0)));
}

#[test]
fn test_checkbox_toggle_end_to_end() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let config = {
        let calls = calls.clone();
        InspectorConfig::new().on_change(move |name, value, widget| {
            calls.lock().unwrap().push((name.to_string(), value.clone(), widget));
        })
    };
    let mut inspector = Inspector::with_config(config);
    let id = inspector.add_checkbox("flag", true, WidgetOptions::default()).unwrap();

    inspector.dispatch_input("flag", &Event::pointer_up(0.0, 0.0));

    assert_eq!(inspector.get_value("flag"), Some(&Value::Bool(false)));
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("flag".to_string(), Value::Bool(false), id));
}

#[test]
fn test_get_values_reads_live_widgets_not_the_cache() {
    let mut inspector = Inspector::new();
    inspector.add_checkbox("flag", false, WidgetOptions::default());

    // Bypass the pipeline: the live widget changes, the cache does not.
    assert!(inspector.set_widget_value("flag", Value::Bool(true), true));

    assert_eq!(inspector.get_value("flag"), Some(&Value::Bool(false)));
    assert_eq!(inspector.get_values().get("flag"), Some(&Value::Bool(true)));
}

#[test]
fn test_set_values_ignores_unknown_keys() {
    let mut inspector = Inspector::new();
    inspector.add_number("Known", 1.0, WidgetOptions::default());

    let mut incoming = inspector.get_values();
    incoming.insert("Known".into(), Value::Number(7.0));
    incoming.insert("Ghost".into(), Value::Number(9.0));
    inspector.set_values(&incoming);

    assert_eq!(inspector.get_value("Known"), Some(&Value::Number(7.0)));
    assert_eq!(inspector.get_value("Ghost"), None);
    assert_eq!(inspector.widget_count(), 1);
}

#[test]
fn test_callback_coercion_replaces_committed_value() {
    let mut inspector = Inspector::new();
    let options = WidgetOptions::from_callback(|value, _| {
        // Clamp to one decimal place.
        value.as_number().map(|n| Value::Number((n * 10.0).round() / 10.0))
    });
    inspector.add_number("P", 0.0, options);

    let committed = inspector.dispatch_input("P", &Event::text("1.2345"));
    assert_eq!(committed, Some(Value::Number(1.2)));
    assert_eq!(inspector.get_value("P"), Some(&Value::Number(1.2)));
    assert_eq!(inspector.get_values().get("P"), Some(&Value::Number(1.2)));
}

#[test]
fn test_final_callback_fires_on_drag_end_only() {
    let ticks = Arc::new(Mutex::new(0u32));
    let finals = Arc::new(Mutex::new(0u32));

    let options = {
        let ticks = ticks.clone();
        let finals = finals.clone();
        WidgetOptions::new()
            .on_change(move |_, _| {
                *ticks.lock().unwrap() += 1;
                None
            })
            .on_final_change(move |_, _| {
                *finals.lock().unwrap() += 1;
                None
            })
    };
    let mut inspector = Inspector::new();
    inspector.add_number("D", 0.0, options);

    inspector.dispatch_input("D", &Event::drag(1.0, 0.0));
    inspector.dispatch_input("D", &Event::drag(1.0, 0.0));
    inspector.dispatch_input("D", &Event::drag_end());

    assert_eq!(*ticks.lock().unwrap(), 2);
    assert_eq!(*finals.lock().unwrap(), 1);
}

#[test]
fn test_update_widgets_never_reenters_the_pipeline() {
    let fired = Arc::new(Mutex::new(0u32));
    let config = {
        let fired = fired.clone();
        InspectorConfig::new().on_change(move |_, _, _| {
            *fired.lock().unwrap() += 1;
        })
    };
    let mut inspector = Inspector::with_config(config);
    inspector.add_number("R", 1.0, WidgetOptions::new().on_update(|| Value::Number(42.0)));

    inspector.update_widgets();

    assert_eq!(*fired.lock().unwrap(), 0);
    // The live widget refreshed; the cache deliberately did not.
    assert_eq!(inspector.get_values().get("R"), Some(&Value::Number(42.0)));
    assert_eq!(inspector.get_value("R"), Some(&Value::Number(1.0)));
}

#[test]
fn test_skip_change_events_still_reaches_panel_handler() {
    let log = Arc::new(Mutex::new(Vec::<String>::new()));
    let config = {
        let log = log.clone();
        InspectorConfig::new().on_change(move |_, _, _| log.lock().unwrap().push("panel".into()))
    };
    let mut inspector = Inspector::with_config(config);
    inspector.add_number("Q", 0.0, WidgetOptions::new().skip_change_events());
    {
        let log = log.clone();
        inspector.observe_widget("Q", Arc::new(move |_| log.lock().unwrap().push("event".into())));
    }

    inspector.dispatch_input("Q", &Event::text("3"));

    // Before/after notifications are suppressed; the panel handler is not.
    assert_eq!(log.lock().unwrap().as_slice(), ["panel"]);
}

#[test]
fn test_add_array_rejects_non_list_before_mutating() {
    let mut inspector = Inspector::new();
    let result = inspector.add_array("number", "Pts", 3.0, WidgetOptions::default());
    assert!(matches!(result, Err(Error::ArrayTypeMismatch { .. })));
    assert_eq!(inspector.widget_count(), 0);
    assert_eq!(inspector.stack().current(), inspector.root());
}

#[test]
fn test_add_array_creates_indexed_widgets() {
    let mut inspector = Inspector::new();
    let ids = inspector
        .add_array(
            "number",
            "Pts",
            vec![Value::Number(1.0), Value::Number(2.0)],
            WidgetOptions::default(),
        )
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(inspector.get_value("Pts[0]"), Some(&Value::Number(1.0)));
    assert_eq!(inspector.get_value("Pts[1]"), Some(&Value::Number(2.0)));
}

#[test]
fn test_name_override_changes_storage_key() {
    let mut inspector = Inspector::new();
    inspector.add_number("Shown Label", 4.0, WidgetOptions::new().stored_as("storage_key"));
    assert_eq!(inspector.get_value("storage_key"), Some(&Value::Number(4.0)));
    assert_eq!(inspector.get_value("Shown Label"), None);
}

#[test]
fn test_widget_parent_override_places_outside_stack_top() {
    let mut inspector = Inspector::new();
    let side = inspector.add_container(Some("side"));
    inspector.begin_group("Main", SectionOptions::default());
    let id = inspector
        .add_number("Detached", 1.0, WidgetOptions::new().parent(side))
        .unwrap();
    inspector.end_group();

    assert!(inspector.container_widgets(side).contains(&id));
}

#[test]
fn test_clear_resets_to_initial_state() {
    let mut inspector = Inspector::new();
    inspector.add_section("S", SectionOptions::default());
    inspector.add_number("N", 1.0, WidgetOptions::default());
    inspector.clear();

    assert_eq!(inspector.widget_count(), 0);
    assert_eq!(inspector.get_value("N"), None);
    assert_eq!(inspector.get_current_section(), None);
    assert_eq!(inspector.stack().current(), inspector.root());

    // The inspector is fully usable again after a clear.
    inspector.add_number("N", 2.0, WidgetOptions::default());
    assert_eq!(inspector.get_value("N"), Some(&Value::Number(2.0)));
}

#[test]
fn test_section_level_observers_fire_for_owned_widgets() {
    let seen = Arc::new(Mutex::new(Vec::<(String, String)>::new()));
    let mut inspector = Inspector::new();
    let section = inspector.add_section("Geometry", SectionOptions::default());
    inspector.add_number("X", 0.0, WidgetOptions::default());
    {
        let seen = seen.clone();
        inspector.observe_section(
            section,
            Arc::new(move |ev| {
                let phase = match ev.phase {
                    ChangePhase::Before => "before",
                    ChangePhase::After => "after",
                };
                seen.lock().unwrap().push((phase.into(), ev.name.clone()));
            }),
        );
    }

    inspector.dispatch_input("X", &Event::text("9"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ("before".to_string(), "X".to_string()));
    assert_eq!(seen[1], ("after".to_string(), "X".to_string()));
}

#[test]
fn test_runtime_registered_kind_dispatches() {
    use panelkit_inspector::widgets::StaticTextWidget;

    let mut inspector = Inspector::new();
    inspector.register_widget_kind(
        "Badge",
        Arc::new(|insp, spec| {
            let text = spec.value.as_text().unwrap_or_default().to_string();
            Some(insp.install(spec, Box::new(StaticTextWidget::new("info", text))))
        }),
    );
    // Keyword lookup is case-insensitive.
    assert!(inspector.add("badge", "B", "shiny", WidgetOptions::default()).is_some());
    assert_eq!(inspector.get_value("B"), Some(&Value::from("shiny")));
}
