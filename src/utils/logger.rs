use crate::shared::constants;
use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::Mutex;

#[derive(Clone)]
struct LoggerPaths {
    error_path: String,
    debug_path: String,
}

lazy_static! {
    static ref LOGGER: Mutex<Option<LoggerPaths>> = Mutex::new(None);
}

fn append_line(path: &str, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_file(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(
            file,
            "=== {} {} Log Started: {} ===",
            constants::APP_NAME,
            title,
            chrono::Local::now()
        );
    }
}

/// Starts file logging into `dir` (error.log + debug.log) and installs a
/// panic hook that records the backtrace there.
pub fn init(dir: &Path) {
    let error_path = dir.join(constants::ERROR_LOG_FILE);
    let debug_path = dir.join(constants::DEBUG_LOG_FILE);

    start_file(&error_path, "Error");
    start_file(&debug_path, "Debug");

    let paths = LoggerPaths {
        error_path: error_path.to_string_lossy().to_string(),
        debug_path: debug_path.to_string_lossy().to_string(),
    };
    if let Ok(mut slot) = LOGGER.lock() {
        *slot = Some(paths.clone());
    }

    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::capture();
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &s[..],
                None => "Box<Any>",
            },
        };

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let error_msg = format!(
            "\nCRITICAL PANIC at {}:\nMessage: {}\nBacktrace:\n{:?}\n",
            location, msg, backtrace
        );

        append_line(&paths.error_path, &error_msg);
        append_line(&paths.debug_path, &error_msg);

        eprintln!("{} crashed. See {} for details.", constants::APP_NAME, paths.error_path);
    }));
}

pub fn log(level: &str, msg: &str) {
    if level == "ERROR" {
        eprintln!("ERROR: {}", msg);
    }

    let paths = match LOGGER.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };
    if let Some(paths) = paths {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let line = format!("[{}][{}] {}", timestamp, level, msg);
        append_line(&paths.debug_path, &line);

        if level == "ERROR" {
            append_line(&paths.error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_both_logs() {
        let dir = std::env::temp_dir().join("piscii_logger_test");
        std::fs::create_dir_all(&dir).unwrap();

        init(&dir);
        info("hello from test");
        error("something broke");
        let _ = panic::take_hook();

        let debug_log = std::fs::read_to_string(dir.join(constants::DEBUG_LOG_FILE)).unwrap();
        let error_log = std::fs::read_to_string(dir.join(constants::ERROR_LOG_FILE)).unwrap();
        assert!(debug_log.contains("[INFO] hello from test"));
        assert!(debug_log.contains("[ERROR] something broke"));
        assert!(error_log.contains("[ERROR] something broke"));
        assert!(!error_log.contains("hello from test"));
    }
}
