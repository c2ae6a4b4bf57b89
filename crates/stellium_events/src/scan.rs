//! Range scan for notable astrological events.
//!
//! The scan walks a date range a day at a time, comparing each day's
//! noon-sampled positions to the previous day's. Noon sampling means a
//! crossing that happens mid-day can land a day early or late relative to
//! the true instant; that is the documented precision trade-off of the
//! whole pipeline, not something the scan compensates for.

use std::collections::HashSet;

use chrono::NaiveDate;

use stellium_chart::{ChartCalculator, LunarPhase};
use stellium_ephem::EphemerisSource;

use crate::types::{AstroEvent, EventKind};

/// Scan `[start, end]` (inclusive) for ingresses, New/Full Moon days, and
/// exact aspects.
///
/// Per day, in detection order: ingresses (sign changed against the
/// previous day, matched per body so a body missing on one day cannot
/// misalign the comparison), lunar phase, exact aspects. Candidates are
/// accumulated for the whole range and deduplicated once at the end by
/// description, first occurrence kept — so a Full Moon spanning several
/// sampled days yields one event dated to its first day. Ranges are
/// expected to stay within one lunar cycle (~31 days); beyond that, a
/// phase recurring in a later cycle would be folded into the first.
///
/// A reversed range (`start > end`) scans no days and returns an empty
/// list.
pub fn major_events<S: EphemerisSource>(
    calc: &ChartCalculator<S>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<AstroEvent> {
    let mut events = Vec::new();

    let Some(baseline_day) = start.pred_opt() else {
        return events;
    };
    let mut previous = calc.positions(baseline_day);

    let mut day = start;
    while day <= end {
        let current = calc.positions(day);

        for position in &current.positions {
            if let Some(before) = previous.position_of(position.body)
                && before.sign != position.sign
            {
                events.push(AstroEvent {
                    date: day,
                    kind: EventKind::Ingress,
                    description: format!(
                        "{} enters {}",
                        position.body.display_name(),
                        position.sign.name()
                    ),
                });
            }
        }

        let phase = calc.moon_phase(day);
        if matches!(phase, LunarPhase::NewMoon | LunarPhase::FullMoon) {
            events.push(AstroEvent {
                date: day,
                kind: EventKind::LunarPhase,
                description: phase.label().to_string(),
            });
        }

        for aspect in calc.aspects(&current.positions) {
            if aspect.exact {
                events.push(AstroEvent {
                    date: day,
                    kind: EventKind::ExactAspect,
                    description: format!(
                        "{} {} {}",
                        aspect.body1.display_name(),
                        aspect.kind.name(),
                        aspect.body2.display_name()
                    ),
                });
            }
        }

        previous = current;
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    dedup_by_description(events)
}

/// Collapse to one event per unique description, keeping the first
/// occurrence in scan order.
fn dedup_by_description(events: Vec<AstroEvent>) -> Vec<AstroEvent> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.description.clone()))
        .collect()
}
