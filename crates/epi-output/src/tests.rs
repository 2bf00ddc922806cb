//! Integration tests for epi-output.

use epi_core::{DistrictId, PolicyAction, PolicyKind, StateCounts, Tick};
use epi_policy::PolicyEvent;
use tempfile::TempDir;

use crate::csv::{AGENT_STATES_FILE, POLICY_LOG_FILE, STATE_COUNTS_FILE};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn read_all(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

fn counts(s: usize, e: usize, i: usize, r: usize, d: usize) -> StateCounts {
    StateCounts { susceptible: s, exposed: e, infected: i, recovered: r, dead: d }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::row::{AgentStateCsvRow, PolicyLogRow, StateCountsRow};
    use crate::writer::OutputWriter;

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (h, rows) = read_all(&dir.path().join(STATE_COUNTS_FILE));
        assert_eq!(h, ["tick", "susceptible", "exposed", "infected", "recovered", "dead"]);
        assert!(rows.is_empty());

        let (h, _) = read_all(&dir.path().join(POLICY_LOG_FILE));
        assert_eq!(h, ["tick", "action", "district_id", "policy_type"]);

        let (h, _) = read_all(&dir.path().join(AGENT_STATES_FILE));
        assert_eq!(h, ["tick", "agent_id", "district_id", "state"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join(STATE_COUNTS_FILE).exists());
    }

    #[test]
    fn state_counts_written_in_column_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_state_counts(&StateCountsRow::new(Tick(7), &counts(70, 3, 5, 1, 1))).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_all(&dir.path().join(STATE_COUNTS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["7", "70", "3", "5", "1", "1"]);
    }

    #[test]
    fn policy_rows_use_labels() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let event = PolicyEvent {
            tick:     Tick(27),
            action:   PolicyAction::Lifted,
            district: DistrictId(2),
            policy:   PolicyKind::Lockdown,
        };
        w.write_policy_event(&PolicyLogRow::from(&event)).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_all(&dir.path().join(POLICY_LOG_FILE));
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["27", "lifted", "2", "lockdown"]);
    }

    #[test]
    fn agent_rows_batch() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            AgentStateCsvRow { tick: 0, agent_id: 0, district_id: 0, state: "infected" },
            AgentStateCsvRow { tick: 0, agent_id: 1, district_id: 1, state: "susceptible" },
        ];
        w.write_agent_states(&rows).unwrap();
        w.write_agent_states(&[]).unwrap();
        w.finish().unwrap();

        let (_, read) = read_all(&dir.path().join(AGENT_STATES_FILE));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[1][3], "susceptible");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use epi_behavior::StaticBehavior;
    use epi_core::{EpiConfig, InterventionPolicy};
    use epi_sim::{SimBuilder, SimObserver};

    use super::*;
    use crate::row::{AgentStateCsvRow, PolicyLogRow, StateCountsRow};
    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver};

    /// Fails every write after the first `ok` ones.
    struct FlakyWriter {
        ok:     usize,
        writes: usize,
    }

    impl FlakyWriter {
        fn write(&mut self) -> OutputResult<()> {
            self.writes += 1;
            if self.writes > self.ok {
                Err(OutputError::Io(std::io::Error::other("disk full")))
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for FlakyWriter {
        fn write_state_counts(&mut self, _: &StateCountsRow) -> OutputResult<()> {
            self.write()
        }
        fn write_policy_event(&mut self, _: &PolicyLogRow) -> OutputResult<()> {
            self.write()
        }
        fn write_agent_states(&mut self, _: &[AgentStateCsvRow]) -> OutputResult<()> {
            self.write()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_writes_stop() {
        let mut obs = SimOutputObserver::new(FlakyWriter { ok: 2, writes: 0 });
        for t in 0..5 {
            obs.on_tick_start(Tick(t), &counts(1, 0, 0, 0, 0));
        }
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert_eq!(obs.into_writer().writes, 3);
    }

    #[test]
    fn full_run_to_csv() {
        let config = EpiConfig::from_json_str(
            r#"{
                "width": 10, "height": 10, "density": 0.8,
                "transmission_rate": 0.0, "latency_period": 3,
                "infection_duration": 1000, "recovery_rate": 0.5,
                "num_districts": 2, "initial_infected": 40,
                "policy": "adaptive-controller", "total_ticks": 8,
                "controller": { "enforcement_duration": 4 },
                "record_agent_rows": true, "seed": 3
            }"#,
        )
        .unwrap();
        assert_eq!(config.policy, InterventionPolicy::Adaptive);

        let dir = tmp();
        let mut sim = SimBuilder::new(config)
            .behavior(StaticBehavior::default())
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let (_, rows) = read_all(&dir.path().join(STATE_COUNTS_FILE));
        assert_eq!(rows.len(), 8);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][3], "40");

        let (_, rows) = read_all(&dir.path().join(POLICY_LOG_FILE));
        assert_eq!(rows.len(), sim.policy_log().len());
        assert!(!rows.is_empty());
        assert_eq!(&rows[0][0], "3");

        let (_, rows) = read_all(&dir.path().join(AGENT_STATES_FILE));
        assert_eq!(rows.len(), 8 * 80);
    }
}
