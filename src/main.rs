// src/main.rs

use repowatch::config::model::DEFAULT_LOG_FILE;
use repowatch::{cli, exit, load_config, logging, run};

fn main() {
    // A panic inside the runtime surfaces from `block_on` on this thread,
    // where `exit_code` logs it and maps it to 1.
    let code = exit::exit_code(|| {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(run_main())
    });
    std::process::exit(code);
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();

    let cfg = match load_config(&args) {
        Ok(cfg) => cfg,
        Err(err) => {
            // Still try to get the failure into the log file: the CLI path,
            // or the default one. If that fails too, only stderr sees it.
            let log_file = args
                .log_file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.into());
            let _ = logging::init_logging(args.log_level, &log_file);
            return Err(err);
        }
    };

    logging::init_logging(args.log_level, &cfg.settings.log_file)?;
    run(args, cfg).await
}
