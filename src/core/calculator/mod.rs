pub mod days;
pub mod growth;
pub mod health;
pub mod rain;
pub mod watering;
