mod app;
mod cli;
mod clock;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use error::Result;
use storage::{config, FileStore, KeyValueStore, Paths};
use store::TaskStore;

/// 启动 TUI 界面
fn run_tui(storage: FileStore) -> Result<()> {
    let boxed: Box<dyn KeyValueStore> = Box::new(storage);
    let mut app = App::new(TaskStore::initialize(boxed));
    tracing::debug!(tasks = app.store.len(), "entering tui");

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result.map_err(Into::into)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::main_view::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}

fn execute(cli: Cli) -> Result<()> {
    let base = match cli.data_dir {
        Some(dir) => dir,
        None => storage::todolist_dir()?,
    };
    let config = config::load_config(&base);
    let paths = Paths::resolve(&base, &config);

    if let Err(e) = logging::init(&paths.log, &config.log.level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(storage = %paths.storage.display(), "todolist starting");

    let command = cli.command.unwrap_or(Commands::Tui);
    match command {
        Commands::Path => return cli::tasks::paths(&paths, &mut io::stdout()),
        Commands::Init => return cli::tasks::init(&base, &paths, &mut io::stdout()),
        _ => {}
    }

    let storage = FileStore::open(&paths.storage)?;
    if matches!(command, Commands::Tui) {
        return run_tui(storage);
    }

    let mut store = TaskStore::initialize(storage);
    let mut out = io::stdout().lock();
    match command {
        Commands::Add { text } => cli::tasks::add(&mut store, &text, &mut out),
        Commands::Toggle { id } => cli::tasks::toggle(&mut store, id, &mut out),
        Commands::Delete { id } => cli::tasks::delete(&mut store, id, &mut out),
        Commands::List { filter, json } => {
            cli::tasks::list(&store, filter.into(), json, &mut out)
        }
        Commands::Theme { value } => cli::tasks::theme(&mut store, value, &mut out),
        Commands::Tui | Commands::Path | Commands::Init => Ok(()),
    }
}

fn main() -> ExitCode {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
