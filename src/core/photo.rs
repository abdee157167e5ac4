use crate::db::store::{AuditLog, PhotoStore, PlantStore};
use crate::errors::{AppError, AppResult};
use crate::models::photo::Photo;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};

pub struct PhotoLogic;

impl PhotoLogic {
    /// Attach a photo reference. Local paths are stored expanded; the file
    /// itself is neither copied nor required to exist.
    pub fn add<S>(store: &S, plant_id: i64, uri: &str, taken_at: DateTime<Local>) -> AppResult<Photo>
    where
        S: PlantStore + PhotoStore + AuditLog,
    {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(AppError::InvalidInput("photo path cannot be empty".into()));
        }
        store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let stored = if uri.contains("://") {
            uri.to_string()
        } else {
            expand_tilde(uri).to_string_lossy().into_owned()
        };

        let mut photo = Photo {
            id: 0,
            plant_id,
            uri: stored,
            taken_at,
        };
        photo.id = store.insert_photo(&photo)?;

        store.audit("photo", &plant_id.to_string(), &photo.uri);
        Ok(photo)
    }

    /// Photos of a plant, newest first.
    pub fn list<S>(store: &S, plant_id: i64) -> AppResult<Vec<Photo>>
    where
        S: PlantStore + PhotoStore,
    {
        store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let mut photos = store.photos_for_plant(plant_id)?;
        photos.sort_by(|a, b| b.taken_at.cmp(&a.taken_at).then(b.id.cmp(&a.id)));
        Ok(photos)
    }
}
