use crate::cli::parser::PhotoCommands;
use crate::config::Config;
use crate::core::photo::PhotoLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &PhotoCommands, cfg: &Config) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;

    match cmd {
        PhotoCommands::Add {
            id,
            path,
            date: date_arg,
        } => {
            let taken_at = date::parse_optional_datetime(date_arg.as_ref())?;
            let photo = PhotoLogic::add(&pool, *id, path, taken_at)?;
            success(format!("Photo #{} attached: {}", photo.id, photo.uri));
        }

        PhotoCommands::List { id } => {
            let photos = PhotoLogic::list(&pool, *id)?;
            if photos.is_empty() {
                info(format!("No photos for plant #{}.", id));
                return Ok(());
            }
            for p in &photos {
                println!("{:>4}  {}  {}", p.id, p.taken_at.format("%Y-%m-%d %H:%M"), p.uri);
            }
        }
    }

    Ok(())
}
