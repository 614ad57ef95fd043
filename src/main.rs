use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::str::FromStr;

use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use task_eta::estimate_completion;
use task_eta::input::{Config, ConfigBuilder};
use task_eta::schedule::WorkWindow;
use task_eta::time::{parse_twelve_hour, Date, DateTime};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;
    use std::str::FromStr;

    use anyhow::Context as _;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .ok()
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        /// Parses the flag if it is present.
        fn parsed_flag<T>(&self, name: &str) -> Result<Option<T>, anyhow::Error>
        where
            T: FromStr,
            T::Err: fmt::Display,
        {
            self.context()
                .string_flag(name)
                .ok()
                .map(|value| {
                    value
                        .parse::<T>()
                        .map_err(|e| anyhow::anyhow!("invalid value for flag \"{}\": {}", name, e))
                })
                .transpose()
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

fn parse_leaves(list: &str) -> anyhow::Result<Vec<Date>> {
    list.split(',')
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(|date| Date::from_str(date).map_err(anyhow::Error::from))
        .collect()
}

fn apply_overrides(builder: &mut ConfigBuilder, context: &Context) -> anyhow::Result<()> {
    if let Some(start) = context.parsed_flag::<DateTime>("start")? {
        builder.start(start);
    }

    if let Some(hours) = context.parsed_flag::<i64>("hours")? {
        builder.hours(hours);
    }

    if let Some(leaves) = context.parsed_flag::<String>("leaves")? {
        for date in parse_leaves(&leaves)? {
            builder.leave(date);
        }
    }

    Ok(())
}

fn report(config: &Config, as_json: bool) -> anyhow::Result<()> {
    let completion = estimate_completion(config)?;

    if as_json {
        println!("{}", config.to_completion_json()?);
    } else {
        println!("{}", completion);
    }

    Ok(())
}

fn estimate(context: &Context) -> anyhow::Result<()> {
    let task: PathBuf = context.required_path_flag("task")?;

    let mut builder = Config::try_from_toml_file(&task)?;
    apply_overrides(&mut builder, context)?;

    let config = builder.build()?;
    info!("finished building config");

    report(&config, context.bool_flag("json"))
}

fn compute(context: &Context) -> anyhow::Result<()> {
    let from = parse_twelve_hour(&context.required_string_flag("from")?)?;
    let to = parse_twelve_hour(&context.required_string_flag("to")?)?;

    let mut builder = Config::builder();
    builder.window(WorkWindow::new(from, to)?);
    apply_overrides(&mut builder, context)?;

    let config = builder.build()?;
    info!("finished building config");

    report(&config, context.bool_flag("json"))
}

fn shared_flags(command: Command) -> Command {
    command
        .flag(
            Flag::new("start", FlagType::String)
                .description("When the work starts, like `2022-12-17T22:00:00`."),
        )
        .flag(Flag::new("hours", FlagType::String).description("How many hours the task takes."))
        .flag(
            Flag::new("leaves", FlagType::String)
                .description("Comma separated days of leave, like `2022-12-19,2022-12-24`."),
        )
        .flag(
            Flag::new("json", FlagType::Bool)
                .description("[optional] Print the result as json. Default: false"),
        )
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let estimate_command = shared_flags(
        Command::new("estimate")
            .usage(format!("{} estimate --task task.toml [args]", args[0]))
            .description("Estimates the completion of the task described in a toml file.")
            .flag(Flag::new("task", FlagType::String).description("Path to the task file.")),
    )
    .action(|context: &Context| exit_on_error(estimate(context)));

    let compute_command = shared_flags(
        Command::new("compute")
            .usage(format!(
                "{} compute --start 2022-12-17T22:00:00 --hours 18 --from \"11 PM\" --to \"07 AM\"",
                args[0]
            ))
            .description("Estimates the completion of a task given entirely by flags.")
            .flag(
                Flag::new("from", FlagType::String)
                    .description("Start of the working hours, like `09 AM`."),
            )
            .flag(
                Flag::new("to", FlagType::String)
                    .description("End of the working hours, like `05 PM`."),
            ),
    )
    .action(|context: &Context| exit_on_error(compute(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(estimate_command)
        .command(compute_command);

    app.run(args);
}
