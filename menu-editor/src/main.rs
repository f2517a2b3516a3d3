use menu_editor::tui::{self, App};
use menu_editor::{Config, init_logger};

fn main() -> anyhow::Result<()> {
    // 1. Environment and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging (tui-logger panel, optional file)
    init_logger(&config.log_level, config.log_dir.as_deref())?;
    tracing::info!(currency = %config.currency_symbol, "Menu editor starting");

    // 3. Terminal
    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new(config);
    let res = tui::run(&mut terminal, &mut app);

    // Always restore, even if the loop failed
    tui::restore_terminal(&mut terminal)?;

    if let Err(e) = res {
        tracing::error!("Menu editor error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
