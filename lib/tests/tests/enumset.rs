use indexmap::IndexMap;
use pretty_assertions::{assert_eq, assert_ne};
use tagcase_enumset::{ClosedSet, Member, Record, guard};
use tagcase_tests::assert_err;

#[test]
fn a_closed_set_freezes_its_member_names() {
    let e = ClosedSet::new(["bar", "foo"]).unwrap();
    assert_eq!(e.names().collect::<Vec<_>>(), vec!["bar", "foo"]);
    assert_eq!(e.members().count(), 2);
    assert_eq!(e.to_string(), "ClosedSet { bar, foo }");
}

#[test]
fn members_are_opaque_and_set_bound() {
    let data = ClosedSet::new(["bar", "baz", "foo"]).unwrap();
    let bar = data.get("bar").unwrap();
    assert!(data.contains(&bar));

    // structurally identical set, disjoint members
    let other = ClosedSet::new(["bar", "baz", "foo"]).unwrap();
    assert!(!data.contains(&other.get("bar").unwrap()));
    assert_ne!(bar, other.get("bar").unwrap());
}

#[test]
fn reading_an_undeclared_member_is_an_error() {
    let e = ClosedSet::new(["bar", "foo"]).unwrap();
    assert_err!(e.get("quux"), "`quux` is not enum. Valid options are bar, foo.");
}

#[test]
fn a_guarded_record_keeps_flag_fields_inside_their_set() {
    let states = ClosedSet::new(["idle", "busy", "done"]).unwrap();
    let severities = ClosedSet::new(["low", "high"]).unwrap();

    let mut job = guard(
        guard(IndexMap::new(), &states, "state", Some(states.get("idle").unwrap())).unwrap(),
        &severities,
        "severity",
        None,
    )
    .unwrap();
    assert_eq!(job.get("state").map(Member::name), Some("idle"));

    job.put("state", states.get("busy").unwrap()).unwrap();
    job.put("severity", severities.get("high").unwrap()).unwrap();
    assert_eq!(job.get("state").map(Member::name), Some("busy"));

    assert_err!(
        job.put("state", severities.get("low").unwrap()),
        "Cannot set 'state' to non-enum value (ClosedSet { idle, busy, done })"
    );
    assert_err!(
        job.put("severity", states.get("done").unwrap()),
        "Cannot set 'severity' to non-enum value (ClosedSet { low, high })"
    );
}
