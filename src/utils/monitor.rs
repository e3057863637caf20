#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub phase_time: Duration,
    pub elapsed_time: Duration,
}

/// Logs time and process memory at the end of each run phase
/// (catalog load, index build, traversal).
#[cfg(feature = "cli")]
pub struct RunMonitor {
    system: System,
    pid: Option<Pid>,
    start_time: Instant,
    last_phase: Instant,
    peak_memory_mb: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = if enabled {
            sysinfo::get_current_pid().ok()
        } else {
            None
        };
        let now = Instant::now();

        Self {
            system: System::new(),
            pid,
            start_time: now,
            last_phase: now,
            peak_memory_mb: 0,
            enabled,
        }
    }

    fn sample(&mut self) -> Option<PhaseStats> {
        if !self.enabled {
            return None;
        }

        let pid = self.pid?;
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let memory_mb = self.system.process(pid)?.memory() / 1024 / 1024;
        self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);

        let now = Instant::now();
        let phase_time = now - self.last_phase;
        self.last_phase = now;

        Some(PhaseStats {
            memory_usage_mb: memory_mb,
            peak_memory_mb: self.peak_memory_mb,
            phase_time,
            elapsed_time: now - self.start_time,
        })
    }

    pub fn log_phase(&mut self, phase: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - Memory: {}MB, Peak: {}MB, Phase: {:?}, Total: {:?}",
                phase,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.phase_time,
                stats.elapsed_time
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 為非CLI環境提供只計時的實現
#[cfg(not(feature = "cli"))]
pub struct RunMonitor {
    start_time: Instant,
    enabled: bool,
}

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn log_phase(&mut self, phase: &str) {
        if self.enabled {
            tracing::info!("📊 {} - Total: {:?}", phase, self.start_time.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
