mod app;
mod screens;

use iced::{Size, Task};
use tracing::{error, info};
use classroom::config::Config;
use classroom::{logging, Database};
use app::App;

fn startup(config: &Config) -> classroom::Result<Database> {
    let db = Database::open(&config.database_path)?;
    if config.seed_default_users {
        db.seed_default_users()?;
    }
    Ok(db)
}

fn main() -> iced::Result {
    logging::init();

    let config_path = Config::location();
    let config = Config::load_from(&config_path);
    let db = match startup(&config) {
        Ok(db) => db,
        Err(e) => {
            error!(path = %config.database_path.display(), error = %e, "Could not open the database");
            std::process::exit(1);
        }
    };
    info!(path = %db.path().display(), "Database ready");

    iced::application("Classroom", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(Size::new(1200.0, 760.0))
        .run_with(move || (App::new(db, config, config_path), Task::none()))
}
