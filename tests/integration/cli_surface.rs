use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use genui::error::UiError;
use genui::parameter::{Arity, FlagRegistry, ParamValue, ParameterSpec, Validator, WidgetHint};
use genui::ui::{GenericUi, UiOptions};
use tempfile::NamedTempFile;

type Captured = Rc<RefCell<Vec<IndexMap<String, ParamValue>>>>;

fn capturing_ui(parameters: Vec<ParameterSpec>) -> (GenericUi, Captured) {
    let captured: Captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let ui = GenericUi::new(UiOptions::new("tool"), parameters, move |values| {
        sink.borrow_mut().push(values.clone());
    })
    .unwrap();
    (ui, captured)
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn boolean_flag_absent_yields_false() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("n")
        .short('n')
        .arity(Arity::Flag)
        .default(false)
        .build(&mut registry)
        .unwrap();

    let (ui, captured) = capturing_ui(vec![spec]);
    ui.run_cli(args(&["tool"])).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["n"], ParamValue::Bool(false));
}

#[test]
fn boolean_flag_present_yields_true() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("n")
        .short('n')
        .arity(Arity::Flag)
        .default(false)
        .build(&mut registry)
        .unwrap();

    let (ui, captured) = capturing_ui(vec![spec]);
    ui.run_cli(args(&["tool", "-n"])).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls[0]["n"], ParamValue::Bool(true));
}

#[test]
fn uppercasing_validator_round_trips_through_the_cli() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("name")
        .validator(Validator::function(|raw| Ok(raw.to_uppercase())))
        .build(&mut registry)
        .unwrap();

    let (ui, captured) = capturing_ui(vec![spec]);
    ui.run_cli(args(&["tool", "x"])).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls[0]["name"], ParamValue::Str("X".to_string()));
}

#[test]
fn validation_failure_aborts_without_invoking_the_callback() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("count")
        .long("count")
        .validator(Validator::function(|raw| {
            raw.parse::<u32>()
                .map(|n| n.to_string())
                .map_err(|_| format!("{} is not a count", raw))
        }))
        .build(&mut registry)
        .unwrap();

    let (ui, captured) = capturing_ui(vec![spec]);
    let err = ui.run_cli(args(&["tool", "--count", "nope"])).unwrap_err();

    match err {
        UiError::Parse(parse) => {
            assert_ne!(parse.exit_code(), 0);
            assert!(parse.to_string().contains("nope is not a count"));
        }
        other => panic!("expected a parse error, got {other}"),
    }
    assert!(captured.borrow().is_empty(), "callback must not run");
}

#[test]
fn file_validator_accepts_existing_file_and_rejects_missing() {
    let temp = NamedTempFile::new().unwrap();
    let existing = temp.path().to_string_lossy().into_owned();

    let is_file = |raw: &str| {
        if std::path::Path::new(raw).is_file() {
            Ok(raw.to_string())
        } else {
            Err(format!("{:?} is no file", raw))
        }
    };

    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("file_path")
        .meta("input file")
        .validator(Validator::function(is_file))
        .widget(WidgetHint::File)
        .build(&mut registry)
        .unwrap();
    let (ui, captured) = capturing_ui(vec![spec]);
    ui.run_cli(args(&["tool", &existing])).unwrap();
    assert_eq!(
        captured.borrow()[0]["file_path"],
        ParamValue::Str(existing)
    );

    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("file_path")
        .validator(Validator::function(is_file))
        .build(&mut registry)
        .unwrap();
    let (ui, captured) = capturing_ui(vec![spec]);
    let err = ui
        .run_cli(args(&["tool", "/definitely/not/here"]))
        .unwrap_err();
    assert!(matches!(err, UiError::Parse(_)));
    assert!(captured.borrow().is_empty());
}

#[test]
fn flags_defaults_and_positionals_combine() {
    let mut registry = FlagRegistry::new();
    let parameters = vec![
        ParameterSpec::builder("target").build(&mut registry).unwrap(),
        ParameterSpec::builder("level")
            .short('l')
            .long("level")
            .default("info")
            .build(&mut registry)
            .unwrap(),
        ParameterSpec::builder("force")
            .short('f')
            .arity(Arity::Flag)
            .default(false)
            .build(&mut registry)
            .unwrap(),
    ];

    let (ui, captured) = capturing_ui(parameters);
    ui.run_cli(args(&["tool", "-f", "output.txt"])).unwrap();

    let calls = captured.borrow();
    assert_eq!(calls[0]["target"], ParamValue::Str("output.txt".to_string()));
    assert_eq!(calls[0]["level"], ParamValue::Str("info".to_string()));
    assert_eq!(calls[0]["force"], ParamValue::Bool(true));
}

#[test]
fn one_or_more_positional_collects_every_token() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("inputs")
        .arity(Arity::OneOrMore)
        .build(&mut registry)
        .unwrap();

    let (ui, captured) = capturing_ui(vec![spec]);
    ui.run_cli(args(&["tool", "a", "b", "c"])).unwrap();

    let calls = captured.borrow();
    assert_eq!(
        calls[0]["inputs"],
        ParamValue::List(vec![
            ParamValue::Str("a".to_string()),
            ParamValue::Str("b".to_string()),
            ParamValue::Str("c".to_string()),
        ])
    );
}

#[test]
fn help_output_lists_meta_and_help_text() {
    let mut registry = FlagRegistry::new();
    let spec = ParameterSpec::builder("file_path")
        .meta("input file")
        .help("path to the input file")
        .build(&mut registry)
        .unwrap();

    let mut command = genui::cli::build_command("tool", "1.0", None, &[spec]);
    let rendered = command.render_help().to_string();
    assert!(rendered.contains("input file"), "help was: {rendered}");
    assert!(
        rendered.contains("path to the input file"),
        "help was: {rendered}"
    );
}
