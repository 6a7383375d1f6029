use log::{LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where log records go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTarget {
    #[default]
    Stdout,
    /// Directory receiving one `YYYY-MM-DD.log` file per day.
    File(PathBuf),
}

/// Broken-down UTC wall clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
    pub millis: u32,
}

impl UtcTime {
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_unix(elapsed.as_secs(), elapsed.subsec_millis())
    }

    pub fn from_unix(secs: u64, millis: u32) -> Self {
        let (year, month, day) = civil_from_days((secs / 86400) as i64);
        let time_of_day = secs % 86400;
        Self {
            year,
            month,
            day,
            hour: time_of_day / 3600,
            minute: (time_of_day % 3600) / 60,
            second: time_of_day % 60,
            millis,
        }
    }

    /// `YYYY-MM-DD`, used as the log file name.
    pub fn date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `YYYY-MM-DDTHH:MM:SS.mmm`
    pub fn timestamp(&self) -> String {
        format!(
            "{}T{:02}:{:02}:{:02}.{:03}",
            self.date(),
            self.hour,
            self.minute,
            self.second,
            self.millis
        )
    }
}

// Howard Hinnant's days-to-civil conversion.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i64 + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Formats a record as a single line. Frame-processing threads are named,
/// so the thread name is preferred over the opaque id.
pub fn format_record(time: &UtcTime, record: &Record) -> String {
    let thread = std::thread::current();
    let thread = match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    };
    format!(
        "{} [{}] [{}] {}:{} - {}",
        time.timestamp(),
        record.level(),
        thread,
        record.file().unwrap_or(record.target()),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_record(&UtcTime::now(), record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

struct OpenLog {
    date: String,
    file: File,
}

/// Appends to `<dir>/<date>.log`, switching files when the UTC date changes.
pub struct FileLogger {
    dir: PathBuf,
    current: Mutex<OpenLog>,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let date = UtcTime::now().date();
        let file = open_append(&dir, &date)?;
        Ok(Self {
            dir,
            current: Mutex::new(OpenLog { date, file }),
        })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

fn open_append(dir: &PathBuf, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{date}.log")))
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let now = UtcTime::now();
        let line = format_record(&now, record);
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());

        let today = now.date();
        if today != current.date {
            match open_append(&self.dir, &today) {
                Ok(file) => {
                    current.file = file;
                    current.date = today;
                }
                // keep writing to the previous day's file
                Err(e) => eprintln!("failed to roll log file over to {today}: {e}"),
            }
        }

        if let Err(e) = writeln!(current.file, "{line}") {
            eprintln!("failed to write log file: {e}");
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.file.flush().ok();
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger for `target`.
///
/// Debug builds log at `Debug`, release builds at `Info`. Only the first
/// successful call per process takes effect; later calls are ignored.
pub fn init_logger(target: &LogTarget) -> std::io::Result<()> {
    let installed = match target {
        LogTarget::Stdout => {
            static STDOUT: StdoutLogger = StdoutLogger;
            log::set_logger(&STDOUT)
        }
        // set_logger needs a 'static reference; the logger lives for the process
        LogTarget::File(dir) => log::set_logger(Box::leak(Box::new(FileLogger::new(dir)?))),
    };
    if installed.is_ok() {
        log::set_max_level(default_level());
    }
    Ok(())
}
