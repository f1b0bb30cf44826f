use geoinv_core::Observer;
use log::{Level, log, log_enabled};

use crate::traits::{HasIteration, HasResidual};

/// Writes one log record per solver iteration.
///
/// Records go through the [`log`] facade, so nothing is printed unless the
/// application installs a logger. The observer never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    target: &'static str,
    level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl LogObserver {
    /// Target used unless overridden with [`LogObserver::target`].
    pub const DEFAULT_TARGET: &'static str = "geoinv::inverse";

    /// Creates an observer logging at `debug` level under [`Self::DEFAULT_TARGET`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Self::DEFAULT_TARGET,
            level: Level::Debug,
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasResidual + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if log_enabled!(target: self.target, self.level) {
            log!(
                target: self.target,
                self.level,
                "iter {}: residual {} (max {:e})",
                event.iter(),
                event.residual(),
                event.residual_norm(),
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;
    use std::sync::Mutex;

    use geoinv_core::{Coord, from_fn};
    use geoinv_solvers::inverse::newton::{self, Config, Status};
    use log::{LevelFilter, Log, Metadata, Record};

    /// Collects formatted records for one target.
    struct Capture {
        records: Mutex<Vec<(Level, String)>>,
    }

    const TARGET: &str = "geoinv::test-capture";

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.target() == TARGET
        }

        fn log(&self, record: &Record<'_>) {
            if self.enabled(record.metadata()) {
                self.records
                    .lock()
                    .unwrap()
                    .push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn logs_every_iteration() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);

        let model = from_fn(|c: Coord| Ok::<_, Infallible>(Coord::new(2.0 * c.x, 3.0 * c.y)));
        let solution = newton::solve(
            &model,
            Coord::new(4.0, 9.0),
            Coord::new(1.0, 1.0),
            &Config::default(),
            LogObserver::new().target(TARGET).level(Level::Info),
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::ResidualConverged);

        let records = CAPTURE.records.lock().unwrap();
        assert_eq!(records.len(), solution.iters);
        assert!(records.iter().all(|(level, _)| *level == Level::Info));
        assert!(records[0].1.starts_with("iter 1: residual (-2, -6)"));
    }

    #[test]
    fn defaults() {
        let observer = LogObserver::default();
        assert_eq!(observer, LogObserver::new());
        assert_eq!(observer.target, LogObserver::DEFAULT_TARGET);
        assert_eq!(observer.level, Level::Debug);
    }
}
