use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use take::inspect::NOTHING;
use take::prelude::*;

static RECORDS: Mutex<Vec<(Level, String, String)>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct Recorder;

impl Log for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (record.level(), record.target().to_string(), record.args().to_string());
        RECORDS.lock().unwrap().push(entry);
    }

    fn flush(&self) {}
}

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&Recorder).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

#[test]
fn inspect_mid_pipeline() {
    let mut capture = Capture::new();
    let value = take(3)
        .inspect_into(&mut capture, Some("start"))
        .through(|n| n * 2)
        .inspect_into(&mut capture, None)
        .get();

    assert_eq!(value, Some(6));
    assert_eq!(capture.lines(), ["start: 3", "6"]);
}

#[test]
fn inspect_nothing() {
    let mut capture = Capture::new();
    let pipe = nothing::<u8>().inspect_into(&mut capture, None);

    assert!(pipe.is_nothing());
    assert_eq!(capture.lines(), [NOTHING]);
}

#[test]
fn inspect_to_writer() {
    let mut writer = Writer::new(Vec::new()).format(Format::Pretty);
    take(Some(1)).inspect_into(&mut writer, Some("nested"));

    let output = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(output, "nested: Some(\n    1,\n)\n");
}

#[test]
fn inspect_to_stdout() {
    let pipe = take("foo").inspect().inspect_labeled("foo");
    assert_eq!(pipe.get(), Some("foo"));

    let pipe = take(vec![1]).inspect_into(&mut Stdout::new().format(Format::Pretty), None);
    assert_eq!(pipe.get(), Some(vec![1]));
}

#[test]
fn inspect_to_log() {
    install_logger();

    let mut logger = Logger::new().level(Level::Info).target("take-test");
    take("foo").inspect_into(&mut logger, Some("logged"));

    let records = RECORDS.lock().unwrap();
    let found = records
        .iter()
        .any(|(level, target, line)| *level == Level::Info && target == "take-test" && line == "logged: \"foo\"");
    assert!(found);
}
