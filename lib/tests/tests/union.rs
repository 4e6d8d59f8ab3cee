use pretty_assertions::{assert_eq, assert_ne};
use tagcase_tests::{assert_err, maybe};
use tagcase_union::{FieldTy, PrimKind, UnionError, Value, build, build_named, declare};

#[test]
fn constructors_return_the_tag_and_fields() {
    let maybe = maybe();
    let v = maybe.make("just", vec!["x".into()]).unwrap();
    let (tag, fields) = v.parts();
    assert_eq!(tag, "just");
    assert_eq!(fields, [Value::from("x")]);

    let (tag, fields) = maybe.make("nothing", vec![]).unwrap().into_parts();
    assert_eq!(tag, "nothing");
    assert_eq!(fields, Vec::<Value>::new());
}

#[test]
fn unions_and_instances_render_their_shape() {
    let maybe = maybe();
    assert_eq!(maybe.to_string(), "Maybe<just|nothing>");
    assert_eq!(maybe.make("just", vec!["x".into()]).unwrap().to_string(), "Maybe<just>(x)");
    assert_eq!(maybe.make("nothing", vec![]).unwrap().to_string(), "Maybe<nothing>()");
}

#[test]
fn every_wrong_arity_fails() {
    let pairs = build(declare! { pair: [PrimKind::Text, PrimKind::Number] }).unwrap();
    for wrong in [0usize, 1, 3, 4] {
        let args = (0..wrong).map(|_| Value::from("x")).collect::<Vec<_>>();
        let err = pairs.make("pair", args).unwrap_err();
        assert!(matches!(err, UnionError::Arity { .. }), "arity {} was accepted", wrong);
    }
    assert_err!(
        pairs.make("pair", vec![]),
        "pair requires Text, Number, but it was given an empty parameter list"
    );
    assert_err!(
        pairs.make("pair", vec!["x".into()]),
        "pair requires Text, Number, but it was given text"
    );
    assert_err!(
        pairs.make("pair", vec!["x".into(), 1.into(), true.into()]),
        "pair requires Text, Number, but it was given text, number, boolean"
    );
}

#[test]
fn zero_field_constructors_report_their_empty_shape() {
    let maybe = maybe();
    assert_err!(
        maybe.make("nothing", vec!["stray".into()]),
        "nothing requires an empty parameter list, but it was given text"
    );
}

#[test]
fn arguments_must_satisfy_their_declared_types() {
    let explicit = build_named(
        declare! {
            string: [PrimKind::Text],
            number: [PrimKind::Number],
            bool: [PrimKind::Boolean],
        },
        "ExplicitTypes",
    )
    .unwrap();
    assert_err!(
        explicit.make("string", vec![false.into()]),
        "ExplicitTypes<string> expects argument#0 to be a Text, but it was a boolean"
    );
    assert_err!(
        explicit.make("number", vec!["foo".into()]),
        "ExplicitTypes<number> expects argument#0 to be a Number, but it was a text"
    );
    assert_err!(
        explicit.make("bool", vec![100.into()]),
        "ExplicitTypes<bool> expects argument#0 to be a Boolean, but it was a number"
    );
}

#[test]
fn the_mismatch_names_the_offending_position() {
    let pairs = build_named(declare! { pair: [PrimKind::Text, PrimKind::Number] }, "Pairs")
        .unwrap();
    assert_err!(
        pairs.make("pair", vec!["x".into(), "y".into()]),
        "Pairs<pair> expects argument#1 to be a Number, but it was a text"
    );
}

#[test]
fn wildcards_accept_every_runtime_shape() {
    struct Stamp;
    let maybe = maybe();
    let shapes: Vec<Value> = vec![
        "text".into(),
        42.into(),
        true.into(),
        Value::Seq(vec!["a".into(), "b".into()]),
        Value::foreign(Stamp),
        maybe.make("nothing", vec![]).unwrap().into(),
    ];
    for shape in shapes {
        assert!(maybe.make("just", vec![shape]).is_ok());
    }
}

#[test]
fn unions_nest_as_field_types() {
    let maybe = maybe();
    let with_maybe =
        build_named(declare! { foo: [&maybe, PrimKind::Text] }, "WithMaybe").unwrap();

    let inner = maybe.make("just", vec!["test".into()]).unwrap();
    assert!(with_maybe.make("foo", vec![inner.into(), "foo".into()]).is_ok());

    assert_err!(
        with_maybe.make("foo", vec![123.into(), "foo".into()]),
        "WithMaybe<foo> expects argument#0 to be a Maybe, but it was a number"
    );
}

#[test]
fn structurally_identical_unions_do_not_mix() {
    let a = maybe();
    let b = maybe();
    let holder_of_a = build_named(declare! { hold: [&a] }, "Holder").unwrap();
    let from_b = b.make("nothing", vec![]).unwrap();
    assert_err!(
        holder_of_a.make("hold", vec![from_b.into()]),
        "Holder<hold> expects argument#0 to be a Maybe, but it was a Maybe"
    );
}

#[test]
fn instances_compare_by_tag_and_fields_within_one_union() {
    let builder = maybe();
    let x1 = builder.make("just", vec!["x".into()]).unwrap();
    let x2 = builder.make("just", vec!["x".into()]).unwrap();
    let y = builder.make("just", vec!["y".into()]).unwrap();
    assert_eq!(x1, x2);
    assert_ne!(x1, y);
    // same shape from a second builder is a different value
    assert_ne!(x1, maybe().make("just", vec!["x".into()]).unwrap());
}

#[test]
fn the_declaration_is_readable_back() {
    let explicit = build_named(
        declare! { pair: [PrimKind::Text, PrimKind::Boolean], unit: [] },
        "Explicit",
    )
    .unwrap();
    let shapes = explicit
        .variants()
        .map(|(tag, tys)| (tag.to_string(), tys.len()))
        .collect::<Vec<_>>();
    assert_eq!(shapes, vec![("pair".to_string(), 2), ("unit".to_string(), 0)]);
    assert!(matches!(explicit.fields("pair"), Some([FieldTy::Prim(PrimKind::Text), _])));
    assert_eq!(explicit.fields("gone").is_none(), true);
}
