pub mod cities;
pub mod diseases;
pub mod facilities;
pub mod health;
pub mod remedies;
pub mod screenings;
