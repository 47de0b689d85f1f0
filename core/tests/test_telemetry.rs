// Telemetry counters, stage timers and snapshots.

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use stegframe_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    #[test]
    fn counters_accumulate() {
        let mut c = TelemetryCounters::default();
        c.add_message(26, 58);
        c.add_envelope(100);
        c.add_fragment();
        c.add_fragment();
        c.add_slot(true);
        c.add_slot(false);

        assert_eq!(c.fragments, 2);
        assert_eq!(c.slots_visited, 2);
        assert_eq!(c.slots_empty, 1);
        assert_eq!(c.framing_overhead_bytes(), 32);
        assert_eq!(c.bytes_envelope, 100);
    }

    #[test]
    fn counters_merge() {
        let mut a = TelemetryCounters::default();
        a.add_fragment();
        a.add_message(1, 33);
        let mut b = TelemetryCounters::default();
        b.add_fragment();
        b.add_slot(false);

        a += b;
        assert_eq!(a.fragments, 2);
        assert_eq!(a.slots_empty, 1);
        assert_eq!(a.bytes_framed, 33);
    }

    #[test]
    fn stage_times_add_up() {
        let mut times = StageTimes::default();
        times.add(Stage::Encrypt, Duration::from_micros(10));
        times.add(Stage::Encrypt, Duration::from_micros(5));
        times.add(Stage::Split, Duration::from_micros(1));

        assert_eq!(times.get(Stage::Encrypt), Duration::from_micros(15));
        assert_eq!(times.get(Stage::Join), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_micros(16));
        assert!(times.has_all(&[Stage::Encrypt, Stage::Split]));
        assert!(!times.has_all(&[Stage::Encrypt, Stage::Join]));
        assert_eq!(times.len(), 2);
        let order: Vec<Stage> = (&times).into_iter().map(|(s, _)| *s).collect();
        assert_eq!(order, [Stage::Encrypt, Stage::Split]);
    }

    #[test]
    fn timer_charges_closure_time_to_stage() {
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Reveal, || {
            sleep(Duration::from_millis(2));
            7
        });
        timer.finish();

        assert_eq!(out, 7);
        assert!(timer.stage_times.get(Stage::Reveal) >= Duration::from_millis(2));
        assert!(timer.elapsed() >= timer.stage_times.total());
    }

    #[test]
    fn snapshot_reports_expansion_and_serialises() {
        let mut counters = TelemetryCounters::default();
        counters.add_message(10, 42);
        counters.add_envelope(80);
        let mut timer = TelemetryTimer::new();
        timer.time(Stage::Checksum, || ());
        timer.finish();

        let snap = TelemetrySnapshot::from(&counters, &timer);
        assert!((snap.expansion_ratio - 8.0).abs() < f64::EPSILON);
        assert!(snap.sanity_check());
        assert!(snap.has_all_stages(&[Stage::Checksum]));

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"bytes_envelope\":80"));
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, counters);
    }

    #[test]
    fn empty_message_has_zero_expansion() {
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &TelemetryTimer::default());
        assert_eq!(snap.expansion_ratio, 0.0);
    }

    #[test]
    fn stage_names_are_snake_case() {
        assert_eq!(Stage::EmbedIndex.to_string(), "embed_index");
        assert_eq!(Stage::Checksum.to_string(), "checksum");
    }
}
