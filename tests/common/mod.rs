use std::io::Write;

use task_eta::input::Config;
use task_eta::schedule::Completion;
use tempfile::NamedTempFile;

#[must_use]
#[allow(dead_code)]
pub fn make_task(start: &str, hours: i64, from: &str, to: &str, leaves: &[&str]) -> String {
    format!(
        concat!(
            //
            "[task]\n",
            "start = {start}\n",
            "hours = {hours}\n",
            "\n",
            "[working_hours]\n",
            "start = \"{from}\"\n",
            "end = \"{to}\"\n",
            "\n",
            "[leave]\n",
            "dates = [{leaves}]\n",
        ),
        start = start,
        hours = hours,
        from = from,
        to = to,
        leaves = leaves.join(", "),
    )
}

/// Writes the task to a temporary file, so it can be read like a file
/// passed on the command line.
#[must_use]
#[allow(dead_code)]
pub fn write_task_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("should be able to create a temporary file");

    file.write_all(contents.as_bytes())
        .expect("should be able to write the task file");

    file
}

#[must_use]
#[allow(dead_code)]
pub fn complete(task: &str) -> Completion {
    let file = write_task_file(task);

    Config::try_from_toml_file(file.path())
        .expect("task file should be valid")
        .build()
        .expect("config should be valid")
        .completion()
        .expect("completion should be computable")
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
