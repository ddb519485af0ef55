//! Module: grid::executor
//! Responsibility: the two-phase association-safe page fetch and the
//! matching count, over a `GridSource`.
//! Does not own: translation (grid::translate) or storage (the source).
//!
//! Phase one runs the predicate/order build against an id-only projection
//! and windows the result; phase two is exactly one batch fetch of
//! hydrated rows for those identities, reordered in memory because the
//! batch has no defined order guarantee. At most two storage round trips
//! per page, regardless of page size or association depth.

use crate::{
    config::GridConfig,
    grid::{
        error::GridError,
        page::{GridRequest, GridResponse},
        predicate::read_column,
        sort::OrderDirection,
        source::GridSource,
        translate::{GridTranslator, OrderClause},
    },
    obs::sink::{self, ExecKind, MetricsEvent, PlanPhase},
    traits::EntityValue,
    types::Id,
    value::{Value, sort_cmp},
};
use std::{cmp::Ordering, collections::HashMap, marker::PhantomData};

///
/// GridExecutor
///
/// Request-scoped read path: each call owns its own translator, join
/// registry, and rank map. No shared mutable state; `count` and
/// `fetch_page` may run concurrently against the same source.
///

pub struct GridExecutor<'a, E: EntityValue, S: GridSource<E>> {
    source: &'a S,
    config: GridConfig,
    _marker: PhantomData<E>,
}

impl<'a, E, S> GridExecutor<'a, E, S>
where
    E: EntityValue,
    S: GridSource<E>,
{
    #[must_use]
    pub const fn new(source: &'a S, config: GridConfig) -> Self {
        Self {
            source,
            config,
            _marker: PhantomData,
        }
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.config.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Fetch one page of hydrated rows, in the id-phase order.
    pub fn fetch_page(&self, request: &GridRequest) -> Result<Vec<S::Row>, GridError> {
        sink::emit(MetricsEvent::ExecStart {
            kind: ExecKind::FetchPage,
            entity_path: E::PATH,
        });

        let ids = self.id_page(request)?;

        // An empty identity page never issues the second query.
        if ids.is_empty() {
            sink::emit(MetricsEvent::ExecFinish {
                kind: ExecKind::FetchPage,
                entity_path: E::PATH,
                rows_returned: 0,
            });

            return Ok(Vec::new());
        }

        sink::emit(MetricsEvent::Phase {
            phase: PlanPhase::Hydrate,
            entity_path: E::PATH,
        });

        // One batch fetch with declared associations eagerly included.
        // Identities deleted since the id phase are silently absent and
        // the page shrinks; that race is expected.
        let mut rows = self.source.fetch_rows(&ids);

        // The batch has no order guarantee: restore the identity page's
        // order. Rows missing from the rank map sort last.
        let rank: HashMap<Id<E>, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        rows.sort_by_key(|row| rank.get(&S::row_id(row)).copied().unwrap_or(usize::MAX));

        self.debug_log(format!(
            "fetch_page on {}: {} ids, {} rows hydrated",
            E::PATH,
            ids.len(),
            rows.len()
        ));
        sink::emit(MetricsEvent::ExecFinish {
            kind: ExecKind::FetchPage,
            entity_path: E::PATH,
            rows_returned: rows.len() as u64,
        });

        Ok(rows)
    }

    /// Count all rows matching the filter model. Reuses the predicate
    /// build; no projection, no pagination, no order.
    pub fn count(&self, request: &GridRequest) -> Result<u64, GridError> {
        sink::emit(MetricsEvent::ExecStart {
            kind: ExecKind::Count,
            entity_path: E::PATH,
        });

        let mut translator = GridTranslator::<E>::new();
        let predicates = translator.translate(&request.filter_model)?;

        sink::emit(MetricsEvent::Phase {
            phase: PlanPhase::Count,
            entity_path: E::PATH,
        });

        let mut scanned = 0u64;
        let mut matched = 0u64;
        for row in self.source.scan() {
            scanned += 1;
            if predicates.iter().all(|p| p.matches(self.source, row)) {
                matched += 1;
            }
        }

        sink::emit(MetricsEvent::RowsScanned {
            entity_path: E::PATH,
            rows_scanned: scanned,
        });
        sink::emit(MetricsEvent::ExecFinish {
            kind: ExecKind::Count,
            entity_path: E::PATH,
            rows_returned: matched,
        });

        Ok(matched)
    }

    /// Fetch a page and its total count as one grid response.
    pub fn query(&self, request: &GridRequest) -> Result<GridResponse<S::Row>, GridError> {
        let rows = self.fetch_page(request)?;
        let total_count = self.count(request)?;

        Ok(GridResponse { rows, total_count })
    }

    /// Phase one: the ordered, windowed identity page.
    fn id_page(&self, request: &GridRequest) -> Result<Vec<Id<E>>, GridError> {
        let mut translator = GridTranslator::<E>::new();
        let predicates = translator.translate(&request.filter_model)?;
        let order = translator.order_by(&request.sort_model)?;

        sink::emit(MetricsEvent::Phase {
            phase: PlanPhase::IdPage,
            entity_path: E::PATH,
        });

        let mut scanned = 0u64;
        let mut matches: Vec<(Vec<Value>, Id<E>)> = Vec::new();
        for row in self.source.scan() {
            scanned += 1;
            if predicates.iter().all(|p| p.matches(self.source, row)) {
                let keys = order
                    .iter()
                    .map(|clause| read_column(self.source, row, &clause.column))
                    .collect();
                matches.push((keys, row.id()));
            }
        }

        sink::emit(MetricsEvent::RowsScanned {
            entity_path: E::PATH,
            rows_scanned: scanned,
        });

        // Stable sort: ties keep the scan's ascending-id order.
        matches.sort_by(|(a, _), (b, _)| cmp_order_keys(a, b, &order));

        let window = request.window().clamped(self.config.max_page_rows);
        self.debug_log(format!(
            "id_page on {}: {} candidates, window offset={} limit={}",
            E::PATH,
            matches.len(),
            window.offset,
            window.limit
        ));

        Ok(matches
            .into_iter()
            .skip(window.offset)
            .take(window.limit)
            .map(|(_, id)| id)
            .collect())
    }
}

fn cmp_order_keys(left: &[Value], right: &[Value], order: &[OrderClause]) -> Ordering {
    for (i, clause) in order.iter().enumerate() {
        let ordering = match clause.direction {
            OrderDirection::Asc => sort_cmp(&left[i], &right[i]),
            OrderDirection::Desc => sort_cmp(&left[i], &right[i]).reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
