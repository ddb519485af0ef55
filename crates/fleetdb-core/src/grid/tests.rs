use crate::{
    config::GridConfig,
    grid::{
        FilterInput, FilterModel, FilterModelError, GridError, GridExecutor, GridRequest,
        GridSource, GridTranslator, JoinRegistry, PathError, Predicate, ScalarInput, SortInput,
        SortModel, resolve_column,
        predicate::CompareOp,
        sort::OrderDirection,
    },
    obs::sink::{self, MetricsEvent, MetricsSink},
    test_fixtures::{Rig, RigRow, RigStatus, TestDb},
    traits::{EntityKind, EntityValue},
    types::{Decimal, Id, Timestamp},
    value::Value,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::{cell::RefCell, collections::HashSet, str::FromStr};

// ---- helpers -----------------------------------------------------------

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> Timestamp {
    Timestamp::from_naive(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap(),
    )
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn text_filter(op: &str, operand: &str) -> FilterInput {
    FilterInput {
        filter_type: "text".to_string(),
        op: Some(op.to_string()),
        filter: Some(ScalarInput::Text(operand.to_string())),
        ..Default::default()
    }
}

fn number_filter(op: &str, lo: Option<ScalarInput>, hi: Option<ScalarInput>) -> FilterInput {
    FilterInput {
        filter_type: "number".to_string(),
        op: Some(op.to_string()),
        filter: lo,
        filter_to: hi,
        ..Default::default()
    }
}

fn date_filter(op: &str, from: Option<&str>, to: Option<&str>) -> FilterInput {
    FilterInput {
        filter_type: "date".to_string(),
        op: Some(op.to_string()),
        date_from: from.map(str::to_string),
        date_to: to.map(str::to_string),
        ..Default::default()
    }
}

fn set_filter(values: &[&str]) -> FilterInput {
    FilterInput {
        filter_type: "set".to_string(),
        values: Some(values.iter().map(|v| (*v).to_string()).collect()),
        ..Default::default()
    }
}

fn filters(entries: Vec<(&str, FilterInput)>) -> FilterModel {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn sort(entries: &[(&str, &str)]) -> SortModel {
    entries
        .iter()
        .map(|(col, dir)| SortInput {
            col_id: (*col).to_string(),
            sort: Some((*dir).to_string()),
        })
        .collect()
}

fn request(filter_model: FilterModel, sort_model: SortModel, start: i64, end: i64) -> GridRequest {
    GridRequest {
        filter_model,
        sort_model,
        start_row: start,
        end_row: end,
    }
}

/// Five rigs, two operators; made_at descends from rig "alpha" (newest).
fn seed() -> TestDb {
    let mut db = TestDb::default();
    let alice = db.add_operator("Alice", 30);
    let bob = db.add_operator("Bob", 17);

    db.add_rig(
        "alpha truck",
        120,
        dec("10"),
        RigStatus::Active,
        ts(2025, 10, 12, 8, 0, 0, 0),
        Some(alice),
    );
    db.add_rig(
        "beta crane",
        80,
        dec("15.5"),
        RigStatus::Idle,
        ts(2025, 10, 11, 0, 0, 0, 0),
        Some(bob),
    );
    db.add_rig(
        "gamma TRUCK",
        200,
        dec("20"),
        RigStatus::Active,
        ts(2025, 10, 10, 23, 59, 59, 999),
        Some(alice),
    );
    db.add_rig(
        "delta digger",
        60,
        dec("9.999"),
        RigStatus::Idle,
        ts(2025, 10, 10, 0, 0, 0, 0),
        None,
    );
    db.add_rig(
        "epsilon hauler",
        150,
        dec("25"),
        RigStatus::Active,
        ts(2025, 9, 1, 12, 0, 0, 0),
        Some(bob),
    );

    db
}

fn labels(rows: &[RigRow]) -> Vec<&str> {
    rows.iter().map(|row| row.rig.label.as_str()).collect()
}

fn run(db: &TestDb, req: &GridRequest) -> Vec<RigRow> {
    GridExecutor::<Rig, _>::new(db, GridConfig::default())
        .fetch_page(req)
        .unwrap()
}

fn run_count(db: &TestDb, req: &GridRequest) -> u64 {
    GridExecutor::<Rig, _>::new(db, GridConfig::default())
        .count(req)
        .unwrap()
}

// ---- path resolution ---------------------------------------------------

#[test]
fn blank_column_resolves_primary_key() {
    let mut registry = JoinRegistry::new();
    let column = resolve_column(Rig::MODEL, &mut registry, "  ").unwrap();
    assert_eq!(column.field.name, "id");
    assert!(column.join.is_none());
    assert!(registry.is_empty());
}

#[test]
fn association_crossing_registers_one_outer_join() {
    let mut registry = JoinRegistry::new();
    let column = resolve_column(Rig::MODEL, &mut registry, "operator.name").unwrap();
    assert_eq!(column.join.as_deref(), Some("operator"));
    assert_eq!(column.field.name, "name");
    assert_eq!(registry.len(), 1);

    // A second crossing of the same association reuses the join.
    resolve_column(Rig::MODEL, &mut registry, "operator.age").unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn unknown_segments_are_errors_not_ignored() {
    let mut registry = JoinRegistry::new();

    assert_eq!(
        resolve_column(Rig::MODEL, &mut registry, "pilot.name").unwrap_err(),
        PathError::UnknownAssociation {
            entity: "rig",
            segment: "pilot".to_string(),
        }
    );
    assert_eq!(
        resolve_column(Rig::MODEL, &mut registry, "operator.salary").unwrap_err(),
        PathError::UnknownField {
            entity: "operator",
            segment: "salary".to_string(),
        }
    );
    // A bare association name is not a scalar attribute.
    assert_eq!(
        resolve_column(Rig::MODEL, &mut registry, "operator").unwrap_err(),
        PathError::UnknownField {
            entity: "rig",
            segment: "operator".to_string(),
        }
    );
}

// ---- translation: permissive-skip contract ------------------------------

#[test]
fn empty_filter_model_builds_no_predicates() {
    let mut translator = GridTranslator::<Rig>::new();
    let predicates = translator.translate(&FilterModel::new()).unwrap();
    assert!(predicates.is_empty());
    assert!(translator.registry().is_empty());
}

#[test]
fn unknown_kind_and_operator_contribute_nothing() {
    let mut translator = GridTranslator::<Rig>::new();

    let mystery = FilterInput {
        filter_type: "fuzzy".to_string(),
        op: Some("contains".to_string()),
        filter: Some(ScalarInput::Text("x".to_string())),
        ..Default::default()
    };
    let unknown_op = text_filter("matches", "x");
    let blank_operand = text_filter("contains", "   ");

    let model = filters(vec![
        ("label", mystery),
        ("power", unknown_op),
        ("status", blank_operand),
    ]);
    assert!(translator.translate(&model).unwrap().is_empty());
}

#[test]
fn text_filter_with_numeric_operand_is_a_model_error() {
    let mut translator = GridTranslator::<Rig>::new();
    let bad = FilterInput {
        filter_type: "text".to_string(),
        op: Some("contains".to_string()),
        filter: Some(ScalarInput::Int(7)),
        ..Default::default()
    };

    let err = translator
        .translate(&filters(vec![("label", bad)]))
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::Filter(FilterModelError::OperandType { .. })
    ));
}

#[test]
fn number_filter_shapes() {
    let mut translator = GridTranslator::<Rig>::new();

    // Missing primary operand for a non-range operator: no predicate.
    let missing = number_filter("greaterThan", None, None);
    assert!(
        translator
            .translate(&filters(vec![("power", missing)]))
            .unwrap()
            .is_empty()
    );

    // Full range: closed interval as one conjunctive predicate.
    let range = number_filter(
        "inRange",
        Some(ScalarInput::Int(10)),
        Some(ScalarInput::Int(20)),
    );
    let predicates = translator
        .translate(&filters(vec![("power", range)]))
        .unwrap();
    assert_eq!(predicates.len(), 1);
    let Predicate::And(parts) = &predicates[0] else {
        panic!("expected conjunction, got {predicates:?}");
    };
    assert!(matches!(
        parts[0],
        Predicate::Compare {
            op: CompareOp::Ge,
            operand: Value::Uint(10),
            ..
        }
    ));
    assert!(matches!(
        parts[1],
        Predicate::Compare {
            op: CompareOp::Le,
            operand: Value::Uint(20),
            ..
        }
    ));

    // One-sided ranges degrade to a single bound.
    let lower_only = number_filter("inRange", Some(ScalarInput::Int(10)), None);
    let predicates = translator
        .translate(&filters(vec![("power", lower_only)]))
        .unwrap();
    assert!(matches!(
        predicates[0],
        Predicate::Compare {
            op: CompareOp::Ge,
            ..
        }
    ));

    // A number filter on a text column contributes nothing.
    let on_text = number_filter("equals", Some(ScalarInput::Int(1)), None);
    assert!(
        translator
            .translate(&filters(vec![("label", on_text)]))
            .unwrap()
            .is_empty()
    );

    // An unparseable numeric string is malformed input, not a no-op.
    let junk = number_filter("equals", Some(ScalarInput::Text("abc".to_string())), None);
    let err = translator
        .translate(&filters(vec![("power", junk)]))
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::Filter(FilterModelError::InvalidNumber { .. })
    ));
}

#[test]
fn decimal_operands_stay_exact() {
    let mut translator = GridTranslator::<Rig>::new();
    let filter = number_filter("equals", Some(ScalarInput::Float(10.1)), None);
    let predicates = translator
        .translate(&filters(vec![("price", filter)]))
        .unwrap();

    let Predicate::Compare { operand, .. } = &predicates[0] else {
        panic!("expected compare");
    };
    assert_eq!(*operand, Value::Decimal(dec("10.1")));
}

#[test]
fn date_filter_skips_quietly_where_the_contract_says_so() {
    let mut translator = GridTranslator::<Rig>::new();

    // Not a timestamp column: whole descriptor ignored.
    let on_uint = date_filter("equals", Some("2025-10-10"), None);
    assert!(
        translator
            .translate(&filters(vec![("power", on_uint)]))
            .unwrap()
            .is_empty()
    );

    // Unparseable from-date: ignored, not an error.
    let junk = date_filter("equals", Some("10/10/2025"), None);
    assert!(
        translator
            .translate(&filters(vec![("made_at", junk)]))
            .unwrap()
            .is_empty()
    );

    // Missing from-date: ignored.
    let missing = date_filter("equals", None, None);
    assert!(
        translator
            .translate(&filters(vec![("made_at", missing)]))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn date_greater_than_jumps_to_next_day_start() {
    let mut translator = GridTranslator::<Rig>::new();
    let filter = date_filter("greaterThan", Some("2025-10-10"), None);
    let predicates = translator
        .translate(&filters(vec![("made_at", filter)]))
        .unwrap();

    let Predicate::Compare { op, operand, .. } = &predicates[0] else {
        panic!("expected compare");
    };
    assert_eq!(*op, CompareOp::Ge);
    assert_eq!(*operand, Value::Timestamp(ts(2025, 10, 11, 0, 0, 0, 0)));
}

#[test]
fn set_filter_coerces_to_declared_kind() {
    let mut translator = GridTranslator::<Rig>::new();

    // Empty list: no predicate.
    assert!(
        translator
            .translate(&filters(vec![("status", set_filter(&[]))]))
            .unwrap()
            .is_empty()
    );

    let predicates = translator
        .translate(&filters(vec![("status", set_filter(&["ACTIVE", "IDLE"]))]))
        .unwrap();
    let Predicate::In { values, .. } = &predicates[0] else {
        panic!("expected membership predicate");
    };
    assert_eq!(
        *values,
        vec![
            Value::Enum("ACTIVE".to_string()),
            Value::Enum("IDLE".to_string()),
        ]
    );

    // Unknown variant names are malformed input.
    let err = translator
        .translate(&filters(vec![("status", set_filter(&["BROKEN"]))]))
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::Filter(FilterModelError::UnknownEnumVariant { .. })
    ));
}

#[test]
fn one_build_shares_one_join_across_filters_and_sort() {
    let mut translator = GridTranslator::<Rig>::new();
    translator
        .translate(&filters(vec![
            ("operator.name", text_filter("contains", "a")),
            (
                "operator.age",
                number_filter("greaterThan", Some(ScalarInput::Int(18)), None),
            ),
        ]))
        .unwrap();
    translator.order_by(&sort(&[("operator.name", "asc")])).unwrap();

    assert_eq!(translator.registry().len(), 1);
    assert!(translator.registry().contains("operator"));
    assert_eq!(
        translator.registry().prefixes().collect::<Vec<_>>(),
        vec!["operator"]
    );
}

#[test]
fn empty_sort_model_selects_declared_default_order() {
    let mut translator = GridTranslator::<Rig>::new();
    let order = translator.order_by(&SortModel::new()).unwrap();

    let keys: Vec<(&str, OrderDirection)> = order
        .iter()
        .map(|clause| (clause.column.field.name, clause.direction))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("made_at", OrderDirection::Desc),
            ("id", OrderDirection::Desc),
        ]
    );
}

#[test]
fn sort_direction_defaults_to_ascending() {
    let input = SortInput {
        col_id: "power".to_string(),
        sort: Some("DESC".to_string()),
    };
    assert_eq!(input.direction(), OrderDirection::Desc);

    let odd = SortInput {
        col_id: "power".to_string(),
        sort: Some("sideways".to_string()),
    };
    assert_eq!(odd.direction(), OrderDirection::Asc);
}

// ---- execution ----------------------------------------------------------

#[test]
fn contains_is_case_insensitive_substring() {
    let db = seed();
    let req = request(
        filters(vec![("label", text_filter("contains", "TRuck"))]),
        sort(&[("id", "asc")]),
        0,
        10,
    );

    assert_eq!(labels(&run(&db, &req)), vec!["alpha truck", "gamma TRUCK"]);
}

#[test]
fn count_matches_full_fetch_for_every_sort() {
    let db = seed();
    let filter_model = filters(vec![(
        "power",
        number_filter("greaterThanOrEqual", Some(ScalarInput::Int(80)), None),
    )]);

    for sort_model in [
        SortModel::new(),
        sort(&[("label", "asc")]),
        sort(&[("operator.name", "desc"), ("power", "asc")]),
    ] {
        let req = request(filter_model.clone(), sort_model, 0, 100);
        assert_eq!(run_count(&db, &req), run(&db, &req).len() as u64);
    }
}

#[test]
fn date_equals_covers_the_whole_day_half_open() {
    let db = seed();
    let req = request(
        filters(vec![(
            "made_at",
            date_filter("equals", Some("2025-10-10"), None),
        )]),
        sort(&[("id", "asc")]),
        0,
        10,
    );

    // 23:59:59.999 matches; 2025-10-11T00:00:00.000 does not.
    assert_eq!(labels(&run(&db, &req)), vec!["gamma TRUCK", "delta digger"]);
}

#[test]
fn date_filter_greater_than_skips_the_whole_from_day() {
    let db = seed();
    let req = request(
        filters(vec![(
            "made_at",
            date_filter("greaterThan", Some("2025-10-10"), None),
        )]),
        sort(&[("id", "asc")]),
        0,
        10,
    );

    // Every instant of 2025-10-10 is excluded, including 23:59:59.999 —
    // deliberately not "after any point in that day".
    assert_eq!(labels(&run(&db, &req)), vec!["alpha truck", "beta crane"]);
}

#[test]
fn date_range_with_missing_to_degrades_to_equals() {
    let db = seed();
    let ranged = request(
        filters(vec![(
            "made_at",
            date_filter("inRange", Some("2025-10-10"), None),
        )]),
        sort(&[("id", "asc")]),
        0,
        10,
    );
    let equals = request(
        filters(vec![(
            "made_at",
            date_filter("equals", Some("2025-10-10"), None),
        )]),
        sort(&[("id", "asc")]),
        0,
        10,
    );

    assert_eq!(labels(&run(&db, &ranged)), labels(&run(&db, &equals)));
}

#[test]
fn number_range_bounds_are_inclusive() {
    let db = seed();
    let req = request(
        filters(vec![(
            "price",
            number_filter(
                "inRange",
                Some(ScalarInput::Int(10)),
                Some(ScalarInput::Int(20)),
            ),
        )]),
        sort(&[("id", "asc")]),
        0,
        10,
    );

    // Exactly 10 and exactly 20 match; 9.999 does not.
    assert_eq!(
        labels(&run(&db, &req)),
        vec!["alpha truck", "beta crane", "gamma TRUCK"]
    );
}

#[test]
fn shared_association_filters_do_not_inflate_counts() {
    let db = seed();
    let combined = request(
        filters(vec![
            ("operator.name", text_filter("contains", "a")),
            (
                "operator.age",
                number_filter("greaterThan", Some(ScalarInput::Int(18)), None),
            ),
        ]),
        SortModel::new(),
        0,
        100,
    );

    // Alice (age 30) matches both; her rigs appear once each.
    assert_eq!(run_count(&db, &combined), 2);
    assert_eq!(labels(&run(&db, &combined)), vec!["alpha truck", "gamma TRUCK"]);
}

#[test]
fn association_sort_puts_missing_rows_last() {
    let db = seed();
    let req = request(
        FilterModel::new(),
        sort(&[("operator.name", "asc"), ("id", "asc")]),
        0,
        10,
    );

    // delta digger has no operator: outer-join null sorts last ascending.
    assert_eq!(
        labels(&run(&db, &req)),
        vec![
            "alpha truck",
            "gamma TRUCK",
            "beta crane",
            "epsilon hauler",
            "delta digger",
        ]
    );
}

#[test]
fn default_order_is_newest_first_then_id_desc() {
    let db = seed();
    let req = request(FilterModel::new(), SortModel::new(), 0, 10);

    assert_eq!(
        labels(&run(&db, &req)),
        vec![
            "alpha truck",
            "beta crane",
            "gamma TRUCK",
            "delta digger",
            "epsilon hauler",
        ]
    );
}

#[test]
fn window_clamps_degenerate_bounds() {
    let db = seed();

    // Negative start clamps to 0; end <= start still yields one row.
    let req = request(FilterModel::new(), SortModel::new(), -5, -5);
    assert_eq!(labels(&run(&db, &req)), vec!["alpha truck"]);

    let req = request(FilterModel::new(), SortModel::new(), 2, 4);
    assert_eq!(labels(&run(&db, &req)), vec!["gamma TRUCK", "delta digger"]);
}

///
/// TrackingSource
/// Delegating source that counts batch fetches and can simulate rows
/// deleted between the id phase and the hydration phase.
///

struct TrackingSource<'a> {
    inner: &'a TestDb,
    dropped: HashSet<u64>,
    fetch_calls: RefCell<u32>,
}

impl<'a> TrackingSource<'a> {
    fn new(inner: &'a TestDb) -> Self {
        Self {
            inner,
            dropped: HashSet::new(),
            fetch_calls: RefCell::new(0),
        }
    }
}

impl GridSource<Rig> for TrackingSource<'_> {
    type Row = RigRow;

    fn scan(&self) -> impl Iterator<Item = &Rig> {
        self.inner.scan()
    }

    fn fetch_rows(&self, ids: &[Id<Rig>]) -> Vec<RigRow> {
        *self.fetch_calls.borrow_mut() += 1;
        let surviving: Vec<Id<Rig>> = ids
            .iter()
            .copied()
            .filter(|id| !self.dropped.contains(&id.key()))
            .collect();

        self.inner.fetch_rows(&surviving)
    }

    fn row_id(row: &RigRow) -> Id<Rig> {
        row.rig.id()
    }

    fn association_value(&self, row: &Rig, join: &str, field: &str) -> Value {
        self.inner.association_value(row, join, field)
    }
}

#[test]
fn rows_deleted_between_phases_shrink_the_page_silently() {
    let db = seed();
    let mut source = TrackingSource::new(&db);
    // Default order page {0,2} is [alpha truck (id 1), beta crane (id 2)];
    // both vanish between the two phases.
    source.dropped.insert(1);
    source.dropped.insert(2);

    let executor = GridExecutor::<Rig, _>::new(&source, GridConfig::default());
    let rows = executor
        .fetch_page(&request(FilterModel::new(), SortModel::new(), 0, 2))
        .unwrap();
    assert!(rows.is_empty());

    // A partial loss keeps survivors in identity-page order.
    let mut source = TrackingSource::new(&db);
    source.dropped.insert(1);
    let executor = GridExecutor::<Rig, _>::new(&source, GridConfig::default());
    let rows = executor
        .fetch_page(&request(FilterModel::new(), SortModel::new(), 0, 3))
        .unwrap();
    assert_eq!(labels(&rows), vec!["beta crane", "gamma TRUCK"]);
}

#[test]
fn empty_identity_page_skips_the_batch_fetch() {
    let db = seed();
    let source = TrackingSource::new(&db);
    let executor = GridExecutor::<Rig, _>::new(&source, GridConfig::default());

    let rows = executor
        .fetch_page(&request(
            filters(vec![("label", text_filter("equals", "no such rig"))]),
            SortModel::new(),
            0,
            10,
        ))
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(*source.fetch_calls.borrow(), 0);
}

#[test]
fn unknown_filter_column_fails_before_any_phase() {
    let db = seed();
    let source = TrackingSource::new(&db);
    let executor = GridExecutor::<Rig, _>::new(&source, GridConfig::default());

    let err = executor
        .fetch_page(&request(
            filters(vec![("mileage", text_filter("contains", "x"))]),
            SortModel::new(),
            0,
            10,
        ))
        .unwrap_err();
    assert!(err.is_client_input());
    assert_eq!(*source.fetch_calls.borrow(), 0);
}

///
/// CapturingSink
///

#[derive(Default)]
struct CapturingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl MetricsSink for CapturingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn executors_emit_metrics_through_the_sink() {
    let db = seed();
    let sink_impl = CapturingSink::default();

    sink::with_sink(&sink_impl, || {
        let req = request(FilterModel::new(), SortModel::new(), 0, 2);
        run(&db, &req);
    });

    let events = sink_impl.events.borrow();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, MetricsEvent::ExecStart { .. }))
    );
    assert!(events.iter().any(
        |e| matches!(e, MetricsEvent::ExecFinish { rows_returned, .. } if *rows_returned == 2)
    ));
}

#[test]
fn wire_shapes_decode_from_camel_case() {
    let request: GridRequest = serde_json::from_value(serde_json::json!({
        "startRow": 20,
        "endRow": 40,
        "filterModel": {
            "label": { "filterType": "text", "type": "contains", "filter": "x" },
            "power": { "filterType": "number", "type": "inRange", "filter": 1, "filterTo": "2.5" },
            "made_at": { "filterType": "date", "type": "equals", "dateFrom": "2025-10-10" },
            "status": { "filterType": "set", "values": ["ACTIVE"] }
        },
        "sortModel": [ { "colId": "operator.name", "sort": "desc" } ]
    }))
    .unwrap();

    assert_eq!(request.window(), crate::grid::PageWindow { offset: 20, limit: 20 });
    assert_eq!(request.filter_model.len(), 4);
    assert_eq!(request.sort_model[0].col_id, "operator.name");
    assert_eq!(request.sort_model[0].direction(), OrderDirection::Desc);

    let number = &request.filter_model["power"];
    assert_eq!(number.op.as_deref(), Some("inRange"));
    assert!(matches!(number.filter, Some(ScalarInput::Int(1))));
    assert!(matches!(number.filter_to, Some(ScalarInput::Text(_))));
}

// ---- properties ---------------------------------------------------------

proptest! {
    /// Sorting never changes the count, and a window at least as large as
    /// the result set returns exactly `count` rows.
    #[test]
    fn count_agrees_with_unbounded_fetch(threshold in 0u64..250, descending in any::<bool>()) {
        let db = seed();
        let filter_model = filters(vec![(
            "power",
            number_filter(
                "greaterThanOrEqual",
                Some(ScalarInput::Int(i64::try_from(threshold).unwrap())),
                None,
            ),
        )]);
        let sort_model = if descending {
            sort(&[("power", "desc")])
        } else {
            sort(&[("power", "asc")])
        };

        let req = request(filter_model, sort_model, 0, 100);
        prop_assert_eq!(run_count(&db, &req), run(&db, &req).len() as u64);
    }
}
