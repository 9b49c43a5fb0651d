use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};
mod config;
mod engine;
mod error;
mod model;
mod services;
mod utils;

use config::Config;
use error::Result;
use model::Invocation;
use services::RunOrRaise;

#[derive(Parser, Debug)]
#[command(name = "raise", version)]
#[command(about = "Активирует окно уже запущенного приложения или запускает новый экземпляр")]
struct Args {
    /// Запустить новый экземпляр, даже если процесс уже есть, но окон нет
    #[arg(short = 'f', long)]
    force: bool,

    /// Только показать подходящие окна
    #[arg(short = 'L', long)]
    list: bool,

    /// Не уходить в фон: заменить текущий процесс запускаемым
    #[arg(short = 'n', long)]
    no_fork: bool,

    /// Перебирать окна в обратном порядке
    #[arg(short = 'r', long)]
    reverse: bool,

    /// С дополнительными аргументами всегда запускать новый экземпляр (подразумевает -f)
    #[arg(short = 'p', long)]
    passthrough: bool,

    /// Класс окна вместо имени команды
    #[arg(short = 'c', long = "class", value_name = "NAME")]
    class: Option<String>,

    /// Имя процесса вместо имени команды
    #[arg(short = 'i', long = "process", value_name = "NAME")]
    process: Option<String>,

    /// Путь к файлу конфигурации
    #[arg(long)]
    config: Option<PathBuf>,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long)]
    log_level: Option<String>,

    /// Команда и её аргументы
    #[arg(
        value_name = "COMMAND [ARG]...",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

impl Args {
    fn invocation(&self) -> Invocation {
        let (command, args) = self
            .command
            .split_first()
            .map(|(command, args)| (command.clone(), args.to_vec()))
            .unwrap_or_default();

        let mut invocation = Invocation::new(command, args)
            .with_passthrough(self.passthrough)
            .with_force(self.force);
        invocation.class_override = self.class.clone();
        invocation.process_override = self.process.clone();
        invocation.list = self.list;
        invocation.reverse = self.reverse;
        invocation.no_fork = self.no_fork;
        invocation
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help и --version печатаются в stdout и не являются ошибкой
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("raise: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format)?;

    info!("Запуск run-or-raise v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    utils::check_prerequisites(&config)?;

    let invocation = args.invocation();
    debug!("Параметры запуска: {:?}", invocation);

    let service = RunOrRaise::new(&config, args.dry_run);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.run(&invocation, &mut out)?;
    out.flush()?;

    Ok(())
}

fn init_tracing(level: &str, format: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят выводом списка окон, логи идут в stderr
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "compact" => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
        _ => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
    }

    Ok(())
}
