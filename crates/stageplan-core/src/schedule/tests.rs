#[cfg(test)]
mod schedule_tests {
    use jiff::civil::{date, Date};
    use serde_json::json;

    use crate::{
        error::Rejection,
        models::{
            Assignment, RawDurations, SizeClass, SizeSpec, SpecTable, Stage, StageDurations,
            StageMode, SupplyRecord, Unit, VehicleCounts, VehicleKind, MAX_STAGE_DAYS,
        },
        schedule::{
            build_schedule, check_availability, customer_rentals, customers, effective_durations,
            maintenance_load,
            period_summary, stage_on, stage_windows, transport_demand, union_days, utilization,
            DaySpan, DurationSource, Verdict,
        },
    };

    const SCENARIO: [f64; 6] = [3.0, 1.5, 14.0, 1.5, 3.0, 4.0];
    const WHOLE_27: [f64; 6] = [3.0, 1.0, 14.0, 2.0, 3.0, 4.0];

    fn durations(values: [f64; 6]) -> StageDurations {
        StageDurations::new(values).expect("valid durations")
    }

    fn span(start: Date, end: Date) -> DaySpan {
        DaySpan::new(start, end).expect("ordered span")
    }

    fn unit(id: &str, standard: [f64; 6]) -> Unit {
        Unit {
            id: id.to_string(),
            size_class: SizeClass(500),
            name: format!("DN-500-{id}"),
            available_from: date(2023, 12, 1),
            start: None,
            standard_durations: RawDurations::from(standard),
            assignments: Vec::new(),
        }
    }

    fn tractor_specs(tractors: u32) -> SpecTable {
        SpecTable::from_specs(vec![SizeSpec {
            size_class: SizeClass(500),
            standard_durations: durations(WHOLE_27),
            vehicles: VehicleCounts::new(tractors, 0, 0),
        }])
    }

    #[test]
    fn test_scenario_schedule_rounds_fractional_stages_up() {
        let schedule = build_schedule(&durations(SCENARIO), date(2024, 1, 1));

        let expected = [
            (Stage::TransitToSite, date(2024, 1, 1), date(2024, 1, 3), 3.0),
            (Stage::Unload, date(2024, 1, 4), date(2024, 1, 5), 1.5),
            (Stage::Work, date(2024, 1, 6), date(2024, 1, 19), 14.0),
            (Stage::Load, date(2024, 1, 20), date(2024, 1, 21), 1.5),
            (Stage::TransitToMaintenance, date(2024, 1, 22), date(2024, 1, 24), 3.0),
            (Stage::Maintenance, date(2024, 1, 25), date(2024, 1, 28), 4.0),
        ];
        assert_eq!(schedule.segments.len(), expected.len());
        for (segment, (stage, start, end, duration)) in schedule.segments.iter().zip(expected) {
            assert_eq!(segment.stage, stage);
            assert_eq!(segment.start, start);
            assert_eq!(segment.end, end);
            assert_eq!(segment.duration, duration);
        }

        assert_eq!(schedule.raw_total(), 27.0);
        assert_eq!(schedule.calendar_days(), 28);
        assert_eq!(
            schedule.span(),
            Some(span(date(2024, 1, 1), date(2024, 1, 28)))
        );
    }

    #[test]
    fn test_zero_duration_stages_are_omitted() {
        let cycle = durations([2.0, 0.0, 5.0, 0.0, 1.0, 0.0]);
        let schedule = build_schedule(&cycle, date(2024, 3, 1));

        let stages: Vec<Stage> = schedule.segments.iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::TransitToSite, Stage::Work, Stage::TransitToMaintenance]
        );
        assert!(schedule.segment(Stage::Unload).is_none());

        let work = schedule.segment(Stage::Work).expect("work segment");
        assert_eq!(work.start, date(2024, 3, 3));
        assert_eq!(work.end, date(2024, 3, 7));

        let back = schedule.segment(Stage::TransitToMaintenance).expect("transit segment");
        assert_eq!(back.start, date(2024, 3, 8));
        assert_eq!(back.end, date(2024, 3, 8));
    }

    #[test]
    fn test_calendar_footprint_is_ceiling_of_duration() {
        for value in [0.1, 0.5, 1.0, 1.01, 2.99, 7.0] {
            let schedule = build_schedule(
                &durations([0.0, 0.0, value, 0.0, 0.0, 0.0]),
                date(2024, 1, 1),
            );
            let work = schedule.segment(Stage::Work).expect("work segment");
            assert_eq!(work.calendar_days(), value.ceil() as i64, "duration {value}");
            assert_eq!(work.duration, value);
        }
    }

    #[test]
    fn test_all_zero_cycle_has_no_segments() {
        let schedule = build_schedule(&StageDurations::ZERO, date(2024, 1, 1));
        assert!(schedule.is_empty());
        assert_eq!(schedule.span(), None);
        assert_eq!(schedule.calendar_days(), 0);
    }

    #[test]
    fn test_override_replaces_standard_cycle() {
        let mut unit = unit("u1", SCENARIO);
        unit.assignments.push(
            Assignment::new("a1", date(2024, 2, 1))
                .with_override(durations([1.0, 1.0, 5.0, 1.0, 1.0, 1.0])),
        );

        let resolved = effective_durations(&unit, unit.assignments.first());
        assert_eq!(resolved.source, DurationSource::Override);
        assert_eq!(resolved.durations.raw_total(), 10.0);
        assert!(resolved.notes.is_empty());

        let schedule = build_schedule(&resolved.durations, date(2024, 2, 1));
        assert_eq!(
            schedule.span(),
            Some(span(date(2024, 2, 1), date(2024, 2, 10)))
        );

        let standard = unit.standard_durations.parse().expect("standard parses");
        assert_eq!(standard.raw_total(), 27.0);
    }

    #[test]
    fn test_inactive_override_is_ignored() {
        let mut unit = unit("u1", SCENARIO);
        let mut assignment = Assignment::new("a1", date(2024, 2, 1))
            .with_override(durations([1.0, 1.0, 5.0, 1.0, 1.0, 1.0]));
        assignment.override_active = false;
        unit.assignments.push(assignment);

        let resolved = effective_durations(&unit, unit.assignments.first());
        assert_eq!(resolved.source, DurationSource::Standard);
        assert_eq!(resolved.durations.raw_total(), 27.0);
    }

    #[test]
    fn test_corrupt_override_falls_back_with_note() {
        let mut unit = unit("u1", SCENARIO);
        let mut assignment = Assignment::new("a1", date(2024, 2, 1));
        assignment.override_active = true;
        assignment.override_durations = Some(RawDurations(json!("[1, 2, oops]")));
        unit.assignments.push(assignment);

        let resolved = effective_durations(&unit, unit.assignments.first());
        assert_eq!(resolved.source, DurationSource::Standard);
        assert_eq!(resolved.notes.len(), 1);
        assert_eq!(resolved.notes[0].assignment_id.as_deref(), Some("a1"));
        assert_eq!(resolved.notes[0].fallback, DurationSource::Standard);
    }

    #[test]
    fn test_corrupt_standard_cycle_zeroes_every_stage() {
        let mut unit = unit("u1", SCENARIO);
        unit.standard_durations = RawDurations(json!([1, 2, 3]));
        let mut assignment = Assignment::new("a1", date(2024, 2, 1));
        assignment.override_active = true;
        unit.assignments.push(assignment);

        let resolved = effective_durations(&unit, unit.assignments.first());
        assert_eq!(resolved.source, DurationSource::Zeroed);
        assert_eq!(resolved.durations, StageDurations::ZERO);
        assert_eq!(resolved.notes.len(), 2);
        assert!(resolved
            .notes
            .iter()
            .all(|note| note.fallback == DurationSource::Zeroed));
    }

    #[test]
    fn test_stage_on_reports_position_within_segment() {
        let mut unit = unit("u1", SCENARIO);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        let first = stage_on(&unit, date(2024, 1, 4), StageMode::Full).expect("unloading");
        assert_eq!(first.stage, Stage::Unload);
        assert_eq!(first.assignment_id.as_deref(), Some("a1"));
        assert_eq!(first.offset, 0);
        assert!(first.is_first_day);
        assert!(!first.is_last_day);
        assert_eq!(first.duration(), 1.5);

        let last = stage_on(&unit, date(2024, 1, 5), StageMode::Full).expect("unloading");
        assert_eq!(last.stage, Stage::Unload);
        assert_eq!(last.offset, 1);
        assert!(last.is_last_day);

        assert!(stage_on(&unit, date(2023, 12, 31), StageMode::Full).is_none());
        assert!(stage_on(&unit, date(2024, 1, 29), StageMode::Full).is_none());
    }

    #[test]
    fn test_stage_on_filters_by_mode() {
        let mut unit = unit("u1", SCENARIO);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        assert!(stage_on(&unit, date(2024, 1, 2), StageMode::Occupied).is_none());
        assert_eq!(
            stage_on(&unit, date(2024, 1, 10), StageMode::Occupied).map(|a| a.stage),
            Some(Stage::Work)
        );
        assert!(stage_on(&unit, date(2024, 1, 10), StageMode::Maintenance).is_none());
        assert_eq!(
            stage_on(&unit, date(2024, 1, 26), StageMode::Maintenance).map(|a| a.stage),
            Some(Stage::Maintenance)
        );
    }

    #[test]
    fn test_stage_on_inspects_every_assignment() {
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        unit.assignments.push(Assignment::new("a2", date(2024, 3, 1)));

        let active = stage_on(&unit, date(2024, 3, 2), StageMode::Full).expect("in transit");
        assert_eq!(active.assignment_id.as_deref(), Some("a2"));
        assert_eq!(active.stage, Stage::TransitToSite);
    }

    #[test]
    fn test_projection_matches_synthetic_assignment() {
        let mut idle = unit("u1", SCENARIO);
        idle.start = Some(date(2024, 1, 1));

        let mut assigned = idle.clone();
        assigned.start = None;
        assigned.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        for day in span(date(2023, 12, 30), date(2024, 2, 2)).iter_days() {
            let projected = stage_on(&idle, day, StageMode::Full);
            let scheduled = stage_on(&assigned, day, StageMode::Full);
            assert_eq!(
                projected.map(|a| (a.stage, a.segment)),
                scheduled.map(|a| (a.stage, a.segment)),
                "day {day}"
            );
        }
    }

    #[test]
    fn test_unit_without_start_or_assignments_has_no_stage() {
        let idle = unit("u1", SCENARIO);
        assert!(stage_on(&idle, date(2024, 1, 1), StageMode::Full).is_none());
    }

    #[test]
    fn test_overlapping_candidate_is_rejected() {
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        let candidate = durations([1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);

        let busy = check_availability(&unit, date(2024, 1, 20), &candidate);
        assert!(!busy.is_accepted());
        assert_eq!(
            busy.rejection(),
            Some(&Rejection::Busy {
                assignment_id: "a1".to_string(),
                start: date(2024, 1, 1),
                end: date(2024, 1, 27),
            })
        );
        assert_eq!(
            busy.rejection().map(Rejection::reason),
            Some("unit busy on requested dates")
        );

        let free = check_availability(&unit, date(2024, 1, 28), &candidate);
        assert!(free.is_accepted());
        assert_eq!(
            free.verdict,
            Verdict::Accepted {
                span: Some(span(date(2024, 1, 28), date(2024, 2, 1)))
            }
        );
    }

    #[test]
    fn test_candidate_before_delivery_is_rejected() {
        let mut unit = unit("u1", WHOLE_27);
        unit.available_from = date(2024, 1, 10);

        let result = check_availability(&unit, date(2024, 1, 5), &durations(WHOLE_27));
        assert_eq!(
            result.rejection(),
            Some(&Rejection::NotYetAvailable {
                available_from: date(2024, 1, 10),
                requested: date(2024, 1, 5),
            })
        );

        let on_delivery = check_availability(&unit, date(2024, 1, 10), &durations(WHOLE_27));
        assert!(on_delivery.is_accepted());
    }

    #[test]
    fn test_availability_checks_all_assignments() {
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        unit.assignments.push(Assignment::new("a2", date(2024, 3, 1)));

        let result = check_availability(&unit, date(2024, 3, 10), &durations(WHOLE_27));
        match result.rejection() {
            Some(Rejection::Busy { assignment_id, .. }) => assert_eq!(assignment_id, "a2"),
            other => panic!("expected busy rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_span_candidate_never_conflicts() {
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        let result = check_availability(&unit, date(2024, 1, 10), &StageDurations::ZERO);
        assert_eq!(result.verdict, Verdict::Accepted { span: None });
    }

    #[test]
    fn test_oversized_stored_override_still_blocks_candidate() {
        let mut unit = unit("u1", WHOLE_27);
        let mut assignment = Assignment::new("a1", date(2024, 1, 1));
        assignment.override_active = true;
        assignment.override_durations = Some(RawDurations(json!([1e19, 1e19, 0, 0, 0, 0])));
        unit.assignments.push(assignment);

        let result = check_availability(&unit, date(2024, 1, 5), &durations(WHOLE_27));
        assert_eq!(
            result.rejection(),
            Some(&Rejection::Busy {
                assignment_id: "a1".to_string(),
                start: date(2024, 1, 1),
                end: date(2024, 1, 27),
            })
        );
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].fallback, DurationSource::Standard);
    }

    #[test]
    fn test_longest_candidate_spans_centuries_without_overflow() {
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2030, 1, 1)));

        let longest = durations([MAX_STAGE_DAYS; 6]);
        let result = check_availability(&unit, date(2024, 1, 5), &longest);
        assert!(matches!(
            result.rejection(),
            Some(Rejection::Busy { assignment_id, .. }) if assignment_id == "a1"
        ));

        let schedule = build_schedule(&longest, date(2024, 1, 5));
        assert_eq!(schedule.segments.len(), 6);
        assert_eq!(schedule.calendar_days(), 6 * 36_500);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let spans = [
            span(date(2024, 1, 1), date(2024, 1, 10)),
            span(date(2024, 1, 10), date(2024, 1, 12)),
            span(date(2024, 1, 11), date(2024, 1, 20)),
            span(date(2024, 1, 5), date(2024, 1, 5)),
            span(date(2024, 2, 1), date(2024, 2, 3)),
        ];
        for a in &spans {
            for b in &spans {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
        assert!(spans[0].overlaps(&spans[1]));
        assert!(!spans[0].overlaps(&spans[2]));
        assert!(spans[0].overlaps(&spans[3]));
    }

    #[test]
    fn test_external_need_is_demand_beyond_owned_fleet() {
        let specs = tractor_specs(2);
        let long_transit = [10.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let mut units = vec![unit("u1", long_transit), unit("u2", long_transit)];
        for unit in &mut units {
            unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        }
        let supply = vec![SupplyRecord {
            id: "s1".to_string(),
            date: date(2024, 1, 1),
            vehicles: VehicleCounts::new(2, 0, 0),
        }];

        let range = DaySpan::single(date(2024, 1, 10));
        let report = transport_demand(&range, &units, &specs, &supply);
        let day = report.on(date(2024, 1, 10)).expect("day in range");
        assert_eq!(day.demand.tractors, 4);
        assert_eq!(day.owned.tractors, 2);
        assert_eq!(day.owned_applied.tractors, 2);
        assert_eq!(day.external.tractors, 2);
        assert_eq!(report.peak_external().tractors, 2);
    }

    #[test]
    fn test_demand_counts_only_transport_stages() {
        let specs = tractor_specs(1);
        let mut unit = unit("u1", WHOLE_27);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        let range = span(date(2024, 1, 1), date(2024, 1, 31));
        let report = transport_demand(&range, &[unit], &specs, &[]);
        let series = report.series(VehicleKind::Tractor);

        assert_eq!(series.days.len(), 31);
        assert_eq!(series.demand.len(), 31);
        // transit 1-3, unload 4, load 19-20, transit 21-23
        let busy = &series.demand;
        assert_eq!(&busy[0..4], &[1, 1, 1, 1]);
        assert_eq!(busy[4], 0);
        assert_eq!(busy[17], 0);
        assert_eq!(&busy[18..23], &[1, 1, 1, 1, 1]);
        assert_eq!(busy[23], 0);
        assert_eq!(series.external, series.demand);
        assert!(series.owned_applied.iter().all(|n| *n == 0));
    }

    #[test]
    fn test_demand_skips_unknown_size_class_and_idle_units() {
        let specs = tractor_specs(1);
        let mut stranger = unit("u1", WHOLE_27);
        stranger.size_class = SizeClass(9999);
        stranger.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        let mut idle = unit("u2", WHOLE_27);
        idle.start = Some(date(2024, 1, 1));

        let range = span(date(2024, 1, 1), date(2024, 1, 5));
        let report = transport_demand(&range, &[stranger, idle], &specs, &[]);

        assert_eq!(report.skipped_units.len(), 1);
        assert_eq!(report.skipped_units[0].unit_id, "u1");
        assert!(report.days.iter().all(|d| d.demand.is_zero()));
    }

    #[test]
    fn test_owned_fleet_never_decreases() {
        let supply = vec![
            SupplyRecord {
                id: "s2".to_string(),
                date: date(2024, 1, 15),
                vehicles: VehicleCounts::new(1, 2, 0),
            },
            SupplyRecord {
                id: "s1".to_string(),
                date: date(2024, 1, 3),
                vehicles: VehicleCounts::new(2, 0, 1),
            },
        ];
        let range = span(date(2024, 1, 1), date(2024, 1, 31));
        let report = transport_demand(&range, &[], &SpecTable::standard(), &supply);

        for pair in report.days.windows(2) {
            for kind in VehicleKind::ALL {
                assert!(pair[0].owned.get(kind) <= pair[1].owned.get(kind));
            }
        }
        assert!(report.days[1].owned.is_zero());
        assert_eq!(report.days[2].owned, VehicleCounts::new(2, 0, 1));
        assert_eq!(report.days[30].owned, VehicleCounts::new(3, 2, 1));
    }

    #[test]
    fn test_extra_supply_only_lowers_external_need_from_its_date() {
        let specs = tractor_specs(2);
        let mut units = vec![unit("u1", WHOLE_27), unit("u2", WHOLE_27)];
        units[0].assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        units[1].assignments.push(Assignment::new("b1", date(2024, 1, 3)));
        let base = vec![SupplyRecord {
            id: "s1".to_string(),
            date: date(2024, 1, 1),
            vehicles: VehicleCounts::new(1, 0, 0),
        }];
        let mut extended = base.clone();
        extended.push(SupplyRecord {
            id: "s2".to_string(),
            date: date(2024, 1, 4),
            vehicles: VehicleCounts::new(2, 0, 0),
        });

        let range = span(date(2024, 1, 1), date(2024, 1, 31));
        let before = transport_demand(&range, &units, &specs, &base);
        let after = transport_demand(&range, &units, &specs, &extended);
        assert!(before.days.iter().any(|d| !d.external.is_zero()));

        for (old, new) in before.days.iter().zip(&after.days) {
            if old.day < date(2024, 1, 4) {
                assert_eq!(old.external, new.external, "{}", old.day);
            } else {
                for kind in VehicleKind::ALL {
                    assert!(new.external.get(kind) <= old.external.get(kind), "{}", old.day);
                }
            }
        }
        let changed = before
            .days
            .iter()
            .zip(&after.days)
            .any(|(old, new)| old.external != new.external);
        assert!(changed);
    }

    #[test]
    fn test_utilization_clips_to_period_and_delivery() {
        let mut busy = unit("u1", SCENARIO);
        busy.available_from = date(2024, 1, 1);
        busy.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        let mut late = unit("u2", SCENARIO);
        late.available_from = date(2024, 3, 1);
        let mut fresh = unit("u3", SCENARIO);
        fresh.available_from = date(2024, 1, 22);

        let period = span(date(2024, 1, 1), date(2024, 1, 31));
        let report = utilization(&[fresh, busy, late], &period);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].unit_id, "u1");
        assert_eq!(report[0].total_days, 31);
        assert_eq!(report[0].busy_days, 28);
        assert_eq!(report[0].rental_days, 18);
        assert_eq!(report[0].utilization, 90.32);

        assert_eq!(report[1].unit_id, "u3");
        assert_eq!(report[1].from, date(2024, 1, 22));
        assert_eq!(report[1].total_days, 10);
        assert_eq!(report[1].utilization, 0.0);
    }

    #[test]
    fn test_utilization_counts_overlapping_assignments_once() {
        let mut unit = unit("u1", WHOLE_27);
        unit.available_from = date(2024, 1, 1);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        unit.assignments.push(Assignment::new("a2", date(2024, 1, 10)));

        let period = span(date(2024, 1, 1), date(2024, 1, 31));
        let report = utilization(&[unit], &period);

        assert_eq!(report[0].busy_days, 31);
        assert_eq!(report[0].utilization, 100.0);
        // rental a1 Jan 4-20, a2 Jan 13-29
        assert_eq!(report[0].rental_days, 26);
    }

    #[test]
    fn test_union_days_merges_touching_and_nested_spans() {
        let spans = vec![
            span(date(2024, 1, 10), date(2024, 1, 12)),
            span(date(2024, 1, 1), date(2024, 1, 5)),
            span(date(2024, 1, 2), date(2024, 1, 3)),
            span(date(2024, 1, 6), date(2024, 1, 6)),
        ];
        assert_eq!(union_days(spans), 9);
        assert_eq!(union_days(Vec::new()), 0);
    }

    #[test]
    fn test_stage_windows_by_mode() {
        let mut unit = unit("u1", SCENARIO);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        let january = span(date(2024, 1, 1), date(2024, 1, 31));

        let rental: Vec<Stage> = stage_windows(&unit, StageMode::Occupied, &january)
            .iter()
            .map(|w| w.segment.stage)
            .collect();
        assert_eq!(rental, vec![Stage::Unload, Stage::Work, Stage::Load]);

        let maintenance = stage_windows(&unit, StageMode::Maintenance, &january);
        assert_eq!(maintenance.len(), 1);
        assert_eq!(maintenance[0].segment.start, date(2024, 1, 25));
        assert_eq!(maintenance[0].assignment_id.as_deref(), Some("a1"));

        let february = span(date(2024, 2, 1), date(2024, 2, 29));
        assert!(stage_windows(&unit, StageMode::Full, &february).is_empty());
    }

    #[test]
    fn test_period_summary_counts_each_unit_once() {
        let specs = tractor_specs(2);
        let mut moving = unit("u1", WHOLE_27);
        moving.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
        moving.assignments.push(Assignment::new("a2", date(2024, 1, 28)));
        let mut idle = unit("u2", WHOLE_27);
        idle.start = Some(date(2024, 1, 1));
        let supply = vec![SupplyRecord {
            id: "s1".to_string(),
            date: date(2024, 2, 1),
            vehicles: VehicleCounts::new(1, 1, 1),
        }];

        let summary = period_summary(
            &[moving, idle],
            &specs,
            &supply,
            &span(date(2024, 1, 1), date(2024, 2, 15)),
        );
        assert_eq!(summary.units_in_work, 1);
        assert_eq!(summary.transport, VehicleCounts::new(2, 0, 0));
        assert_eq!(summary.owned_at_end, VehicleCounts::new(1, 1, 1));
    }

    #[test]
    fn test_maintenance_load_per_day() {
        let mut unit = unit("u1", SCENARIO);
        unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));

        let load = maintenance_load(&[unit], &span(date(2024, 1, 24), date(2024, 1, 29)));
        let counts: Vec<usize> = load.iter().map(|d| d.units).collect();
        assert_eq!(counts, vec![0, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_customers_are_distinct_sorted_and_trimmed() {
        let mut first = unit("u1", WHOLE_27);
        first.assignments.push(Assignment::new("a1", date(2024, 1, 1)).with_customer("Zeta"));
        first.assignments.push(Assignment::new("a2", date(2024, 3, 1)).with_customer(" Acme "));
        let mut second = unit("u2", WHOLE_27);
        second.assignments.push(Assignment::new("b1", date(2024, 1, 1)).with_customer("Acme"));
        second.assignments.push(Assignment::new("b2", date(2024, 3, 1)).with_customer("  "));
        second.assignments.push(Assignment::new("b3", date(2024, 5, 1)));

        assert_eq!(customers(&[first, second]), vec!["Acme", "Zeta"]);
    }

    #[test]
    fn test_customer_rentals_use_raw_rental_stages() {
        let mut first = unit("u1", SCENARIO);
        first.assignments.push(
            Assignment::new("a1", date(2024, 1, 10))
                .with_customer("Acme")
                .with_site("North"),
        );
        first.assignments.push(Assignment::new("a2", date(2024, 3, 1)).with_customer("Other"));
        let mut second = unit("u2", SCENARIO);
        second.assignments.push(
            Assignment::new("b1", date(2024, 1, 1))
                .with_customer("Acme")
                .with_override(durations([2.0, 0.5, 3.0, 0.0, 1.0, 1.0])),
        );
        let mut transit_only = unit("u3", SCENARIO);
        transit_only.assignments.push(
            Assignment::new("c1", date(2024, 1, 1))
                .with_customer("Acme")
                .with_override(durations([2.0, 0.0, 0.0, 0.0, 2.0, 1.0])),
        );

        let mut notes = Vec::new();
        let period = span(date(2024, 1, 1), date(2024, 1, 31));
        let rows = customer_rentals(&[first, second, transit_only], "Acme", &period, &mut notes);

        assert!(notes.is_empty());
        assert_eq!(rows.len(), 2);
        // override: unload Jan 3, work Jan 4-6, no loading
        assert_eq!(rows[0].assignment_id, "b1");
        assert_eq!(rows[0].rental_days, 3.5);
        assert_eq!((rows[0].start, rows[0].end), (date(2024, 1, 3), date(2024, 1, 6)));
        assert_eq!(rows[0].site, None);

        assert_eq!(rows[1].assignment_id, "a1");
        assert_eq!(rows[1].rental_days, 17.0);
        assert_eq!((rows[1].start, rows[1].end), (date(2024, 1, 13), date(2024, 1, 30)));
        assert_eq!(rows[1].site.as_deref(), Some("North"));

        let march = span(date(2024, 3, 1), date(2024, 3, 31));
        assert!(customer_rentals(&[unit("u4", SCENARIO)], "Acme", &march, &mut notes).is_empty());
    }
}
