use relnorm::construct::{MAX_ATTRS, Schema};
use relnorm::error::RelnormError;
use relnorm::notation::{parse_attributes, parse_fds, stringify_attrs, stringify_fds};

#[test]
fn attributes_get_bit_positions_in_input_order() {
    let universe = parse_attributes("A, B, C", ',').expect("attributes parse");
    assert_eq!(universe.get("A").unwrap().bits(), 0b001);
    assert_eq!(universe.get("B").unwrap().bits(), 0b010);
    assert_eq!(universe.get("C").unwrap().bits(), 0b100);
    assert_eq!(universe.all().bits(), 0b111);
    assert_eq!(universe.get("Z"), None);
}

#[test]
fn duplicate_attribute_is_rejected() {
    let err = parse_attributes("A, B, A", ',').unwrap_err();
    assert_eq!(err, RelnormError::DuplicateAttribute("A".into()));
    assert!(format!("{err}").contains("duplicate attribute 'A'"));
}

#[test]
fn attribute_bound_is_enforced() {
    let names: Vec<String> = (0..=MAX_ATTRS).map(|i| format!("A{i}")).collect();
    let err = parse_attributes(&names.join(","), ',').unwrap_err();
    assert_eq!(
        err,
        RelnormError::TooManyAttributes {
            count: MAX_ATTRS + 1,
            limit: MAX_ATTRS,
        }
    );
}

#[test]
fn thirty_attributes_are_accepted() {
    let names: Vec<String> = (0..MAX_ATTRS).map(|i| format!("A{i}")).collect();
    let universe = parse_attributes(&names.join(","), ',').expect("at the bound parses");
    assert_eq!(universe.len(), MAX_ATTRS);
    assert_eq!(universe.all().len(), MAX_ATTRS);
}

#[test]
fn unknown_attribute_is_rejected() {
    let universe = parse_attributes("A, B, C", ',').expect("attributes parse");
    let err = parse_fds("A -> Z", &universe).unwrap_err();
    assert_eq!(
        err,
        RelnormError::UnknownAttribute {
            name: "Z".into(),
            line: "A -> Z".into(),
        }
    );
    assert!(format!("{err}").contains("unknown attribute 'Z'"));
}

#[test]
fn missing_or_one_sided_arrow_is_rejected() {
    let universe = parse_attributes("A, B", ',').expect("attributes parse");
    for line in ["A B", "-> B", "A ->"] {
        let err = parse_fds(line, &universe).unwrap_err();
        assert_eq!(
            err,
            RelnormError::MalformedDependency(line.trim().into()),
            "'{line}' must not parse"
        );
    }
}

#[test]
fn whitespace_and_blank_lines_are_tolerated() {
    let universe = parse_attributes(" A ,  B ,C ", ',').expect("attributes parse");
    let fds = parse_fds("  A , B ->  C \n\n B -> C \n", &universe)
        .unwrap_or_else(|e| panic!("unexpected error: {e}"));
    assert_eq!(fds.len(), 2);
    let a = universe.get("A").unwrap();
    let b = universe.get("B").unwrap();
    let c = universe.get("C").unwrap();
    assert_eq!(fds[0].lhs(), a | b);
    assert_eq!(fds[0].rhs(), c);
    assert_eq!(fds[1].lhs(), b);
}

#[test]
fn repeated_attribute_within_a_side_unions() {
    let universe = parse_attributes("A, B", ',').expect("attributes parse");
    let fds = parse_fds("A, A -> B", &universe).expect("dependency parses");
    assert_eq!(fds[0].lhs(), universe.get("A").unwrap());
}

#[test]
fn separator_is_configurable() {
    let universe = parse_attributes("A;B;C", ';').expect("attributes parse");
    assert_eq!(universe.len(), 3);
    assert_eq!(universe.names(), ["A", "B", "C"]);
}

#[test]
fn stringify_renders_in_bit_order() {
    let universe = parse_attributes("A, B, C", ',').expect("attributes parse");
    assert_eq!(stringify_attrs(universe.all(), &universe), "{A, B, C}");
    assert_eq!(
        stringify_attrs(universe.get("C").unwrap() | universe.get("A").unwrap(), &universe),
        "{A, C}"
    );
    assert_eq!(
        stringify_attrs(relnorm::construct::AttributeSet::EMPTY, &universe),
        "{}"
    );
}

#[test]
fn stringify_fds_joins_with_the_splitter() {
    let universe = parse_attributes("A, B, C", ',').expect("attributes parse");
    let fds = parse_fds("A -> B\nB -> C", &universe).expect("dependencies parse");
    assert_eq!(
        stringify_fds(&fds, &universe, "; "),
        "{A} -> {B}; {B} -> {C}"
    );
}

#[test]
fn schema_parse_propagates_boundary_errors() {
    let err = Schema::parse("A, A", "A -> A").unwrap_err();
    assert_eq!(err, RelnormError::DuplicateAttribute("A".into()));
    let err = Schema::parse("A, B", "A => B").unwrap_err();
    assert!(matches!(err, RelnormError::MalformedDependency(_)));
}
