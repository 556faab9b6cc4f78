use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

use genui::form::{FieldError, FormSurface, RawField, SurfaceEvent};
use genui::parameter::{
    Arity, FlagRegistry, ModeSet, ParamValue, ParameterSpec, Validator, WidgetHint,
};
use genui::ui::{GenericUi, UiOptions};

/// Plays back a fixed sequence of surface events and records every error
/// marking, standing in for a real widget toolkit.
struct ScriptedSurface {
    script: std::vec::IntoIter<SurfaceEvent>,
    markings: Arc<Mutex<Vec<Vec<FieldError>>>>,
}

impl ScriptedSurface {
    fn new(events: Vec<SurfaceEvent>) -> (Self, Arc<Mutex<Vec<Vec<FieldError>>>>) {
        let markings = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                script: events.into_iter(),
                markings: Arc::clone(&markings),
            },
            markings,
        )
    }
}

impl FormSurface for ScriptedSurface {
    fn next_submission(&mut self, _modes: &ModeSet) -> SurfaceEvent {
        self.script.next().unwrap_or(SurfaceEvent::Quit)
    }

    fn mark_errors(&mut self, errors: &[FieldError]) {
        self.markings.lock().unwrap().push(errors.to_vec());
    }
}

type Captured = Rc<RefCell<Vec<IndexMap<String, ParamValue>>>>;

fn capturing_ui(modes: ModeSet) -> (GenericUi, Captured) {
    let captured: Captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let ui = GenericUi::with_modes(UiOptions::new("tool"), modes, move |values| {
        sink.borrow_mut().push(values.clone());
    })
    .unwrap();
    (ui, captured)
}

fn submit(mode: &str, fields: Vec<RawField>) -> SurfaceEvent {
    SurfaceEvent::Submit {
        mode: mode.to_string(),
        fields,
    }
}

fn text(value: &str) -> RawField {
    RawField::Text(value.to_string())
}

fn single_text_mode(validator: Validator) -> ModeSet {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("name")
        .validator(validator)
        .build(&mut registry)
        .unwrap();
    ModeSet::single("1.0", vec![spec])
}

#[test]
fn submission_runs_callback_and_termination_ends_the_loop() {
    let modes = single_text_mode(Validator::function(|raw| Ok(raw.to_uppercase())));
    let (surface, _) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("x")]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["name"], ParamValue::Str("X".to_string()));
}

#[test]
fn identical_resubmission_invokes_callback_twice_with_identical_values() {
    let modes = single_text_mode(Validator::function(|raw| Ok(raw.to_uppercase())));
    let (surface, _) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("same")]),
        submit("1.0", vec![text("same")]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0]["name"], ParamValue::Str("SAME".to_string()));
}

#[test]
fn invalid_field_blocks_submission_until_corrected() {
    let modes = single_text_mode(Validator::function(|raw| {
        if raw.is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(raw.to_string())
        }
    }));
    let (surface, markings) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("")]),
        submit("1.0", vec![text("fixed")]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls.len(), 1, "blocked submission must not reach the callback");
    assert_eq!(calls[0]["name"], ParamValue::Str("fixed".to_string()));

    let markings = markings.lock().unwrap();
    assert_eq!(markings[0].len(), 1);
    assert_eq!(markings[0][0].name, "name");
    assert_eq!(markings[0][0].message, "must not be empty");
    // The successful attempt cleared the markers.
    assert_eq!(markings.last().map(Vec::len), Some(0));
}

#[test]
fn placeholder_text_submits_the_default() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("label")
        .default("fallback")
        .build(&mut registry)
        .unwrap();
    let modes = ModeSet::single("1.0", vec![spec]);

    let (surface, _) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("Enter...")]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    assert_eq!(
        captured.borrow()[0]["label"],
        ParamValue::Str("fallback".to_string())
    );
}

#[test]
fn checkbox_and_multi_value_fields_cross_the_rendezvous() {
    let mut registry = FlagRegistry::new();
    let items = ParameterSpec::builder("items")
        .arity(Arity::ZeroOrMore)
        .build(&mut registry)
        .unwrap();
    let confirm = ParameterSpec::builder("confirm")
        .long("confirm")
        .arity(Arity::Flag)
        .default(false)
        .build(&mut registry)
        .unwrap();
    let modes = ModeSet::single("1.0", vec![items, confirm]);

    let (surface, _) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("a, b ,c"), RawField::Toggle(true)]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    let calls = captured.borrow();
    assert_eq!(
        calls[0]["items"],
        ParamValue::List(vec![
            ParamValue::Str("a".to_string()),
            ParamValue::Str("b".to_string()),
            ParamValue::Str("c".to_string()),
        ])
    );
    assert_eq!(calls[0]["confirm"], ParamValue::Bool(true));
}

#[test]
fn surface_picks_between_modes() {
    let mut registry = FlagRegistry::new();
    let first = ParameterSpec::builder("working_dir")
        .widget(WidgetHint::Directory)
        .build(&mut registry)
        .unwrap();
    let second = ParameterSpec::builder("username")
        .build(&mut registry)
        .unwrap();
    let mut modes = ModeSet::new();
    modes.insert("mode 1", vec![first]);
    modes.insert("mode 2", vec![second]);

    let (surface, _) = ScriptedSurface::new(vec![
        submit("mode 2", vec![text("alice")]),
        SurfaceEvent::Quit,
    ]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0]["username"], ParamValue::Str("alice".to_string()));
}

#[test]
fn immediate_quit_never_invokes_the_callback() {
    let modes = single_text_mode(Validator::accept_any());
    let (surface, _) = ScriptedSurface::new(vec![SurfaceEvent::Quit]);

    let (ui, captured) = capturing_ui(modes);
    ui.run_form(Box::new(surface)).unwrap();

    assert!(captured.borrow().is_empty());
}

#[test]
fn callback_output_is_redirected_into_the_log() {
    let modes = single_text_mode(Validator::accept_any());
    let (surface, _) = ScriptedSurface::new(vec![
        submit("1.0", vec![text("value")]),
        SurfaceEvent::Quit,
    ]);

    let captured: Captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let ui = GenericUi::with_modes(UiOptions::new("tool"), modes, move |values| {
        tracing::info!("processing {}", values["name"]);
        sink.borrow_mut().push(values.clone());
    })
    .unwrap();
    let log = ui.log();

    ui.run_form(Box::new(surface)).unwrap();

    assert_eq!(captured.borrow().len(), 1);
    let entries = log.entries();
    assert!(
        entries.iter().any(|entry| entry.contains("processing value")),
        "log entries were: {entries:?}"
    );
}
